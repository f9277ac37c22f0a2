use std::sync::Arc;

use crate::config::Config;
use crate::files::FileStore;
use crate::storage::Storage;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Both collaborators are trait objects so tests and a future persistent
/// backend can swap them without touching handler code.
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn Storage>,
    pub files: Arc<dyn FileStore>,
    pub config: Config,
}
