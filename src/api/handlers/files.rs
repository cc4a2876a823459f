use axum::{
    Extension, Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::AppState;
use crate::api::error::AppError;
use crate::models::FileListing;
use crate::services::identity::UserId;
use crate::utils::validation;

#[derive(Debug, Deserialize)]
pub struct ListFilesQuery {
    /// 1-indexed page to return
    #[serde(default = "default_page")]
    pub page: usize,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_page() -> usize {
    1
}

fn default_page_size() -> usize {
    10
}

#[utoipa::path(
    get,
    path = "/files/",
    params(
        ("page" = Option<usize>, Query, description = "1-indexed page to return"),
        ("page_size" = Option<usize>, Query, description = "Entries per page")
    ),
    responses(
        (status = 200, description = "Paginated listing of the caller's files", body = FileListing),
        (status = 400, description = "Non-positive pagination parameters"),
        (status = 401, description = "Missing user-id header")
    ),
    tag = "files"
)]
pub async fn list_files(
    State(state): State<AppState>,
    Extension(user): Extension<UserId>,
    Query(query): Query<ListFilesQuery>,
) -> Result<Json<FileListing>, AppError> {
    validation::validate_namespace(&user.0)?;

    if query.page == 0 || query.page_size == 0 {
        return Err(AppError::BadRequest(
            "page and page_size must be positive".to_string(),
        ));
    }

    let listing = state
        .files
        .list_files(&user.0, query.page, query.page_size)
        .await?;

    Ok(Json(listing))
}
