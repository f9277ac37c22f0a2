use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct DownloadQuery {
    pub key: Option<String>,
}

/// GET /uploads/*file
/// Streams a stored upload back to the client. `.pdf` requests are gated by a
/// shared-secret `key` query parameter; any other extension is served without
/// the check. Deliberately weak access control, kept as-is from the original
/// site — an unlisted password, not authentication.
pub async fn serve_upload(
    State(state): State<AppState>,
    Path(file): Path<String>,
    Query(query): Query<DownloadQuery>,
) -> Result<Response, AppError> {
    // Only the basename is ever looked up, so traversal segments are inert.
    let name = file.rsplit('/').next().unwrap_or(&file);

    if name.ends_with(".pdf") && query.key.as_deref() != Some(state.config.download_key.as_str()) {
        return Err(AppError::Unauthorized);
    }

    let data = state
        .files
        .read(name)
        .await?
        .ok_or_else(|| AppError::NotFound("File not found".to_string()))?;

    // The original served the whole prefix with a PDF content type.
    Ok(([(header::CONTENT_TYPE, "application/pdf")], data).into_response())
}
