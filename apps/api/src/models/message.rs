use serde::{Deserialize, Serialize};

use crate::models::MessageId;

/// A contact-form submission. Immutable once stored; never deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: MessageId,
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
    /// RFC 3339 timestamp stamped at creation.
    pub created_at: String,
}
