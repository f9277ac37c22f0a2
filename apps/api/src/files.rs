//! File-storage collaborator for uploaded résumés.
//!
//! Routes only see `Arc<dyn FileStore>` and deal in generated file names, so
//! the disk backend could be swapped for object storage without touching any
//! handler. `DiskFileStore` writes under the configured upload directory,
//! creating it on first use.

use std::path::PathBuf;

use async_trait::async_trait;
use bytes::Bytes;

#[async_trait]
pub trait FileStore: Send + Sync {
    /// Persists `data` under `name`. Overwrites silently; generated names are
    /// collision-resistant so that only happens if a caller reuses a name.
    async fn store(&self, name: &str, data: Bytes) -> std::io::Result<()>;

    /// Reads a stored file, or None if no such file exists.
    async fn read(&self, name: &str) -> std::io::Result<Option<Bytes>>;

    /// Removes a stored file. Returns whether a file was actually removed;
    /// a missing file is not an error.
    async fn delete(&self, name: &str) -> std::io::Result<bool>;
}

#[derive(Debug, Clone)]
pub struct DiskFileStore {
    root: PathBuf,
}

impl DiskFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        DiskFileStore { root: root.into() }
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

#[async_trait]
impl FileStore for DiskFileStore {
    async fn store(&self, name: &str, data: Bytes) -> std::io::Result<()> {
        tokio::fs::create_dir_all(&self.root).await?;
        tokio::fs::write(self.path_for(name), &data).await
    }

    async fn read(&self, name: &str) -> std::io::Result<Option<Bytes>> {
        match tokio::fs::read(self.path_for(name)).await {
            Ok(data) => Ok(Some(Bytes::from(data))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn delete(&self, name: &str) -> std::io::Result<bool> {
        match tokio::fs::remove_file(self.path_for(name)).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e),
        }
    }
}
