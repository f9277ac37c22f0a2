use std::path::PathBuf;

use anyhow::{Context, Result};

/// Default upload size cap: 10 MiB, matching the original site's limit.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every variable has a default so the service runs with no environment at all.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Directory uploaded résumés are written to, relative to the working
    /// directory unless absolute. Created on first use.
    pub upload_dir: PathBuf,
    /// Hard cap on an uploaded file's size in bytes.
    pub max_upload_bytes: usize,
    /// Shared secret gating `.pdf` downloads under /uploads. A weak,
    /// unlisted-password style control, not real authentication.
    pub download_key: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            upload_dir: std::env::var("UPLOAD_DIR")
                .unwrap_or_else(|_| "uploads".to_string())
                .into(),
            max_upload_bytes: match std::env::var("MAX_UPLOAD_BYTES") {
                Ok(v) => v
                    .parse::<usize>()
                    .context("MAX_UPLOAD_BYTES must be a byte count")?,
                Err(_) => DEFAULT_MAX_UPLOAD_BYTES,
            },
            download_key: std::env::var("DOWNLOAD_KEY")
                .unwrap_or_else(|_| "abhay-portfolio".to_string()),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
