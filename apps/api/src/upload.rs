//! Upload policy for the résumé endpoint: what is accepted and what the
//! stored file gets named.

use chrono::Utc;
use rand::Rng;

use crate::errors::AppError;

pub const PDF_MIME: &str = "application/pdf";

/// Rejects an upload whose declared MIME type or size falls outside policy.
/// Runs before any byte is written, so a rejected upload leaves no trace.
pub fn check_upload(content_type: Option<&str>, size: usize, max_bytes: usize) -> Result<(), AppError> {
    if content_type != Some(PDF_MIME) {
        return Err(AppError::BadRequest("Only PDF files are allowed".to_string()));
    }
    if size > max_bytes {
        return Err(AppError::BadRequest(format!(
            "File exceeds the {max_bytes} byte limit"
        )));
    }
    Ok(())
}

/// Generates a collision-resistant stored name for an upload:
/// `<field>-<epoch-ms>-<random-int><original-extension>`.
pub fn generate_filename(field: &str, original_name: &str) -> String {
    let timestamp = Utc::now().timestamp_millis();
    let suffix: u32 = rand::rng().random_range(0..1_000_000_000);
    let ext = std::path::Path::new(original_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{e}"))
        .unwrap_or_default();
    format!("{field}-{timestamp}-{suffix}{ext}")
}
