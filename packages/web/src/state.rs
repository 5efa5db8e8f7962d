//! Shared application state.

use std::path::Path;
use std::sync::Arc;

use tempfile::TempDir;

/// Application state: one scratch root for all uploads and split runs.
///
/// Every session works under its own uuid-named paths inside this root, so
/// sessions never share mutable files. The directory is removed when the
/// process exits and the `TempDir` drops.
#[derive(Clone)]
pub struct AppState {
    upload_root: Arc<TempDir>,
}

impl AppState {
    /// Create the state with a fresh scratch root.
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            upload_root: Arc::new(TempDir::new()?),
        })
    }

    /// Scratch root path for uploads and split output.
    #[must_use]
    pub fn upload_root(&self) -> &Path {
        self.upload_root.path()
    }
}
