use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::AppState;
use crate::api::error::AppError;

/// Resolves the caller identity and makes it available to handlers as a
/// `UserId` extension. Rejection happens here, so no handler runs without
/// an identity.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = state.identity.resolve(req.headers())?;
    req.extensions_mut().insert(user);
    Ok(next.run(req).await)
}
