#![allow(dead_code)]

//! Insert payloads and structural validation for the three entity types.
//!
//! Validation failures report per-field: every write path runs its payload
//! through these checks before touching storage, and a failure short-circuits
//! the request with a 400 carrying the itemized `FieldErrors`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Field name → list of human-readable problems with that field.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewMessage {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewResume {
    pub filename: String,
    pub path: String,
}

pub fn validate_user(new: &NewUser) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();
    if new.username.trim().is_empty() {
        errors.push("username", "Username is required");
    }
    if new.password.is_empty() {
        errors.push("password", "Password is required");
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

pub fn validate_message(new: &NewMessage) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();
    if new.name.trim().len() < 2 {
        errors.push("name", "Name is required");
    }
    if !is_plausible_email(&new.email) {
        errors.push("email", "Invalid email address");
    }
    if new.message.len() < 10 {
        errors.push("message", "Message must be at least 10 characters");
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

pub fn validate_resume(new: &NewResume) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();
    if new.filename.trim().is_empty() {
        errors.push("filename", "Filename is required");
    }
    if !new.path.starts_with("/uploads/") || new.path.len() == "/uploads/".len() {
        errors.push("path", "Path must be under /uploads/");
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Structural email check: one `@`, non-empty local part, dotted domain,
/// no whitespace. Deliberately loose; delivery is the only real validator.
fn is_plausible_email(email: &str) -> bool {
    if email.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    domain.split('.').count() >= 2 && domain.split('.').all(|label| !label.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_message_passes() {
        let new = NewMessage {
            name: "Jo Doe".to_string(),
            email: "jo@example.com".to_string(),
            subject: None,
            message: "hello world, this is long enough".to_string(),
        };
        assert!(validate_message(&new).is_ok());
    }

    #[test]
    fn bad_email_and_short_message_report_both_fields() {
        let new = NewMessage {
            name: "Jo".to_string(),
            email: "bad-email".to_string(),
            subject: None,
            message: "short".to_string(),
        };
        let errors = validate_message(&new).unwrap_err();
        assert!(errors.contains("email"));
        assert!(errors.contains("message"));
        assert!(!errors.contains("name"));
    }

    #[test]
    fn one_char_name_is_rejected() {
        let new = NewMessage {
            name: "J".to_string(),
            email: "jo@example.com".to_string(),
            subject: Some("hi".to_string()),
            message: "hello world, long enough".to_string(),
        };
        let errors = validate_message(&new).unwrap_err();
        assert!(errors.contains("name"));
    }

    #[test]
    fn email_shapes() {
        assert!(is_plausible_email("a@b.com"));
        assert!(is_plausible_email("first.last@sub.domain.org"));
        assert!(!is_plausible_email(""));
        assert!(!is_plausible_email("no-at-sign.com"));
        assert!(!is_plausible_email("@b.com"));
        assert!(!is_plausible_email("a@"));
        assert!(!is_plausible_email("a@bare-domain"));
        assert!(!is_plausible_email("a@b..com"));
        assert!(!is_plausible_email("a b@c.com"));
    }

    #[test]
    fn resume_path_must_live_under_uploads() {
        let ok = NewResume {
            filename: "My Resume.pdf".to_string(),
            path: "/uploads/resume-1-2.pdf".to_string(),
        };
        assert!(validate_resume(&ok).is_ok());

        let bad = NewResume {
            filename: "My Resume.pdf".to_string(),
            path: "/etc/passwd".to_string(),
        };
        assert!(validate_resume(&bad).unwrap_err().contains("path"));

        let empty = NewResume {
            filename: "".to_string(),
            path: "/uploads/".to_string(),
        };
        let errors = validate_resume(&empty).unwrap_err();
        assert!(errors.contains("filename"));
        assert!(errors.contains("path"));
    }

    #[test]
    fn field_errors_serialize_keyed_by_field() {
        let mut errors = FieldErrors::default();
        errors.push("email", "Invalid email address");
        errors.push("email", "Second problem");
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"email": ["Invalid email address", "Second problem"]})
        );
    }
}
