use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use tracing::info;

use crate::errors::AppError;
use crate::models::ResumeId;
use crate::schema::{validate_resume, NewResume};
use crate::state::AppState;
use crate::upload::{check_upload, generate_filename};

/// POST /api/resume/upload
/// Accepts at most one multipart file under the field name `resume`, validates
/// it against the upload policy, writes it to the file store, then records the
/// metadata. The file is on disk before the record exists, so a failed request
/// never produces a record without a file.
pub async fn upload_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let mut stored = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Malformed multipart body: {e}")))?
    {
        if field.name() != Some("resume") {
            continue;
        }

        let original_name = field.file_name().unwrap_or("resume").to_string();
        let content_type = field.content_type().map(str::to_string);
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Failed to read upload: {e}")))?;

        check_upload(content_type.as_deref(), data.len(), state.config.max_upload_bytes)?;

        let generated = generate_filename("resume", &original_name);
        state.files.store(&generated, data).await?;

        let payload = NewResume {
            filename: original_name,
            path: format!("/uploads/{generated}"),
        };
        validate_resume(&payload)?;

        let resume = state.storage.create_resume(payload).await;
        info!("Resume {} stored as {}", resume.id, resume.path);
        stored = Some(resume);
        break; // at most one file per request
    }

    let resume = stored.ok_or_else(|| AppError::BadRequest("No file uploaded".to_string()))?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Resume uploaded successfully!",
            "resume": resume,
        })),
    ))
}

/// GET /api/resume/latest
pub async fn latest_resume(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let resume = state
        .storage
        .get_latest_resume()
        .await
        .ok_or_else(|| AppError::NotFound("No resume found".to_string()))?;

    Ok(Json(json!({
        "success": true,
        "resume": resume,
    })))
}

/// GET /api/resume/all
pub async fn all_resumes(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let resumes = state.storage.get_all_resumes().await;

    Ok(Json(json!({
        "success": true,
        "resumes": resumes,
    })))
}

/// DELETE /api/resume/:id
/// Removes the record first, then the backing file. A file-removal failure
/// after the record is gone surfaces as a 500 and may orphan the file; that
/// window is accepted rather than treated as fatal.
pub async fn delete_resume(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let id: i64 = id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid resume ID".to_string()))?;
    let id = ResumeId(id);

    let resume = state
        .storage
        .get_resume(id)
        .await
        .ok_or_else(|| AppError::NotFound("Resume not found".to_string()))?;

    if !state.storage.delete_resume(id).await {
        return Err(AppError::Internal(anyhow::anyhow!(
            "resume {id} vanished between lookup and delete"
        )));
    }

    // The stored file name is the last segment of the public path.
    let file_name = resume.path.rsplit('/').next().unwrap_or(&resume.path);
    let removed = state.files.delete(file_name).await?;
    info!("Resume {id} deleted (file removed: {removed})");

    Ok(Json(json!({
        "success": true,
        "message": "Resume deleted successfully!",
    })))
}
