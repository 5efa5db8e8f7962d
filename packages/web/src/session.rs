//! Explicit session record for the four-step workflow.

use std::path::PathBuf;

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use wxr_split::ItemCounts;

const SESSION_KEY_WORKFLOW: &str = "workflow";
const SESSION_KEY_FLASH: &str = "flash";

/// State carried between the workflow steps for one user session.
///
/// Stored as one explicit record rather than loose keys; a step that needs
/// a field the record doesn't have yet redirects back to the start.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workflow {
    /// Saved upload on disk.
    pub source_path: PathBuf,
    /// Analysis summary of the upload.
    pub counts: ItemCounts,
    /// File name the user uploaded under.
    pub original_filename: String,
    /// Chunk size used for the split, once chosen.
    pub chunk_size: Option<usize>,
    /// Scratch directory holding the chunk files, once split.
    pub output_dir: Option<PathBuf>,
    /// Path of the zip archive, once created.
    pub archive_path: Option<PathBuf>,
    /// Number of chunks produced, once split.
    pub chunk_count: Option<usize>,
}

impl Workflow {
    /// Start a workflow record for a freshly analyzed upload.
    #[must_use]
    pub fn new(source_path: PathBuf, counts: ItemCounts, original_filename: String) -> Self {
        Self {
            source_path,
            counts,
            original_filename,
            chunk_size: None,
            output_dir: None,
            archive_path: None,
            chunk_count: None,
        }
    }

    /// Remove this workflow's files from disk.
    ///
    /// Best effort: failures are logged and swallowed, never retried.
    pub fn cleanup_files(&self) {
        if let Err(e) = std::fs::remove_file(&self.source_path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(path = %self.source_path.display(), error = %e, "failed to remove upload");
            }
        }
        if let Some(dir) = &self.output_dir {
            if let Err(e) = std::fs::remove_dir_all(dir) {
                if e.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!(path = %dir.display(), error = %e, "failed to remove output dir");
                }
            }
        }
    }
}

/// Load the workflow record, if any.
pub async fn load_workflow(session: &Session) -> Result<Option<Workflow>, StatusCode> {
    session.get(SESSION_KEY_WORKFLOW).await.map_err(|e| {
        tracing::error!(error = %e, "failed to read session");
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

/// Store the workflow record.
pub async fn store_workflow(session: &Session, workflow: &Workflow) -> Result<(), StatusCode> {
    session
        .insert(SESSION_KEY_WORKFLOW, workflow.clone())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "failed to write session");
            StatusCode::INTERNAL_SERVER_ERROR
        })
}

/// Remove the workflow record and delete its files.
pub async fn clear_workflow(session: &Session) -> Result<(), StatusCode> {
    let removed: Option<Workflow> =
        session.remove(SESSION_KEY_WORKFLOW).await.map_err(|e| {
            tracing::error!(error = %e, "failed to clear session");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;
    if let Some(workflow) = removed {
        workflow.cleanup_files();
    }
    Ok(())
}

/// Queue a one-shot message for the next rendered page.
pub async fn set_flash(session: &Session, message: &str) {
    if let Err(e) = session.insert(SESSION_KEY_FLASH, message.to_string()).await {
        tracing::warn!(error = %e, "failed to store flash message");
    }
}

/// Take (and clear) the queued flash message.
pub async fn take_flash(session: &Session) -> Option<String> {
    session
        .remove::<String>(SESSION_KEY_FLASH)
        .await
        .unwrap_or_default()
}
