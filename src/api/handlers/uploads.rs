use axum::{
    Extension,
    body::Body,
    extract::{Multipart, State},
    http::header,
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use futures::StreamExt;

use crate::AppState;
use crate::api::error::AppError;
use crate::models::ProgressEvent;
use crate::services::identity::UserId;
use crate::services::ingest::UploadEntry;
use crate::utils::validation;

#[utoipa::path(
    post,
    path = "/upload/",
    request_body(content = Vec<u8>, description = "Multipart body with one or more file parts", content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Newline-delimited JSON progress stream", body = ProgressEvent),
        (status = 400, description = "Oversized file or malformed batch"),
        (status = 401, description = "Missing user-id header")
    ),
    tag = "files"
)]
pub async fn upload_files(
    State(state): State<AppState>,
    Extension(user): Extension<UserId>,
    mut multipart: Multipart,
) -> Result<Response, AppError> {
    validation::validate_namespace(&user.0)?;

    // Assemble the whole batch up front; validation must finish before the
    // first byte hits storage.
    let mut batch: Vec<UploadEntry> = Vec::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let Some(filename) = field.file_name().map(|f| f.to_string()) else {
            continue;
        };
        let filename = validation::sanitize_filename(&filename)?;
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        batch.push(UploadEntry { filename, data });
    }

    if batch.is_empty() {
        return Err(AppError::BadRequest("No file provided".to_string()));
    }

    state.ingest.check_batch(&batch)?;

    tracing::info!(user = %user.0, files = batch.len(), "starting upload batch");

    // One JSON object per line, forwarded to the caller as each file
    // completes. Dropping the body (client gone) drops the producer too.
    let events = state.ingest.process_batch(batch, user.0);
    let body = Body::from_stream(events.map(|event| {
        serde_json::to_vec(&event)
            .map(|mut line| {
                line.push(b'\n');
                Bytes::from(line)
            })
            .map_err(axum::Error::new)
    }));

    Ok((
        [
            (header::CONTENT_TYPE, "text/event-stream"),
            (header::CACHE_CONTROL, "no-cache"),
        ],
        body,
    )
        .into_response())
}
