use axum::http::HeaderMap;

use crate::api::error::AppError;

/// Header the caller identity is read from.
pub const USER_ID_HEADER: &str = "user-id";

/// Opaque caller identity. Used only as a storage namespace key.
#[derive(Debug, Clone)]
pub struct UserId(pub String);

/// Resolves the caller identity from request metadata. Kept behind a trait
/// so the header convention can be swapped for verified credentials without
/// touching the ingestion pipeline.
pub trait IdentityProvider: Send + Sync {
    fn resolve(&self, headers: &HeaderMap) -> Result<UserId, AppError>;
}

/// Takes the `user-id` header value verbatim. No format or credential check
/// is performed; the token is a partition key, not a proof of identity.
pub struct HeaderIdentity;

impl IdentityProvider for HeaderIdentity {
    fn resolve(&self, headers: &HeaderMap) -> Result<UserId, AppError> {
        headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .map(|v| UserId(v.to_string()))
            .ok_or_else(|| AppError::Unauthorized("Missing user-id header".to_string()))
    }
}
