#![allow(dead_code)]

use serde::{Deserialize, Serialize};

use crate::models::UserId;

/// Admin account record. Created once, never mutated; there is no deletion
/// path. Username uniqueness is the caller's lookup-before-create concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub password: String,
}
