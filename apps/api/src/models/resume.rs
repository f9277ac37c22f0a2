use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::ResumeId;

/// An uploaded résumé. The record can be deleted by id, which also removes
/// the backing file on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    pub id: ResumeId,
    /// The file name the client uploaded under, kept for display.
    pub filename: String,
    /// Public path of the stored file, always `/uploads/<generated-name>`.
    pub path: String,
    pub uploaded_at: DateTime<Utc>,
}
