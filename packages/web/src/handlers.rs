//! Request handlers for the four-step workflow.
//!
//! upload → analyze → split → download. Every step checks the explicit
//! session record and redirects to the start (with a flash warning) when a
//! required field is missing.

use std::path::PathBuf;

use axum::extract::{Multipart, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use serde::Deserialize;
use tower_sessions::Session;
use uuid::Uuid;

use wxr_split::config::{DEFAULT_CHUNK_SIZE, MAX_CHUNK_SIZE, MIN_CHUNK_SIZE};
use wxr_split::{
    analyze, archive_chunks, clamp_chunk_size, has_xml_extension, split_export, ItemCounts,
};

use crate::pages;
use crate::session::{
    clear_workflow, load_workflow, set_flash, store_workflow, take_flash, Workflow,
};
use crate::state::AppState;

/// GET /: upload form. Entering the start resets any previous workflow
/// and removes its scratch files.
pub async fn index(session: Session) -> Result<Html<String>, StatusCode> {
    clear_workflow(&session).await?;
    let flash = take_flash(&session).await;
    Ok(Html(pages::index(flash.as_deref())))
}

/// POST /upload: save the export, analyze it, move to the analyze step.
pub async fn upload(
    State(state): State<AppState>,
    session: Session,
    mut multipart: Multipart,
) -> Result<Response, StatusCode> {
    // Re-uploading replaces whatever the session had before.
    clear_workflow(&session).await?;

    let mut file_bytes: Option<Vec<u8>> = None;
    let mut file_name: Option<String> = None;

    loop {
        match multipart.next_field().await {
            Ok(Some(field)) => {
                if field.name() == Some("file") {
                    if let Some(name) = field.file_name() {
                        file_name = Some(name.to_string());
                    }
                    match field.bytes().await {
                        Ok(bytes) => file_bytes = Some(bytes.to_vec()),
                        Err(e) => {
                            tracing::warn!(error = %e, "failed to read upload body");
                            set_flash(&session, "Upload failed: the file exceeds the 500 MB limit or could not be read").await;
                            return Ok(Redirect::to("/").into_response());
                        }
                    }
                }
            }
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(error = %e, "malformed multipart upload");
                set_flash(&session, "Upload failed: the file exceeds the 500 MB limit or could not be read").await;
                return Ok(Redirect::to("/").into_response());
            }
        }
    }

    let Some(bytes) = file_bytes else {
        set_flash(&session, "No file selected").await;
        return Ok(Redirect::to("/").into_response());
    };
    let original_filename = file_name.unwrap_or_default();
    if !has_xml_extension(&original_filename) {
        set_flash(&session, "Only XML files are allowed").await;
        return Ok(Redirect::to("/").into_response());
    }

    let source_path = state
        .upload_root()
        .join(format!("{}.xml", Uuid::new_v4()));

    let counts = run_analysis(source_path.clone(), bytes).await?;

    if counts.is_empty() {
        if let Err(e) = std::fs::remove_file(&source_path) {
            tracing::warn!(path = %source_path.display(), error = %e, "failed to remove rejected upload");
        }
        set_flash(&session, "Invalid WordPress export file or no items found").await;
        return Ok(Redirect::to("/").into_response());
    }

    let workflow = Workflow::new(source_path, counts, original_filename);
    store_workflow(&session, &workflow).await?;

    Ok(Redirect::to("/analyze").into_response())
}

/// Write the upload to disk and analyze it off the async runtime.
async fn run_analysis(path: PathBuf, bytes: Vec<u8>) -> Result<ItemCounts, StatusCode> {
    tokio::task::spawn_blocking(move || -> std::io::Result<ItemCounts> {
        std::fs::write(&path, &bytes)?;
        let xml = String::from_utf8_lossy(&bytes);
        Ok(analyze(&xml))
    })
    .await
    .map_err(|e| {
        tracing::error!(error = %e, "analysis task panicked");
        StatusCode::INTERNAL_SERVER_ERROR
    })?
    .map_err(|e| {
        tracing::error!(error = %e, "failed to save upload");
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

/// GET /analyze: summary of the upload plus the splitting options form.
pub async fn analyze_page(session: Session) -> Result<Response, StatusCode> {
    let Some(workflow) = load_workflow(&session).await? else {
        set_flash(&session, "Please upload a WordPress export file first").await;
        return Ok(Redirect::to("/").into_response());
    };
    let flash = take_flash(&session).await;
    Ok(Html(pages::analyze(
        &workflow,
        flash.as_deref(),
        DEFAULT_CHUNK_SIZE,
        MIN_CHUNK_SIZE,
        MAX_CHUNK_SIZE,
    ))
    .into_response())
}

/// Options form for the split step. Checkbox fields are present ("on")
/// only when checked; all unchecked means no post-type filter.
#[derive(Debug, Deserialize)]
pub struct SplitForm {
    pub chunk_size: Option<usize>,
    pub post: Option<String>,
    pub page: Option<String>,
    pub attachment: Option<String>,
}

impl SplitForm {
    fn post_types(&self) -> Vec<String> {
        let mut types = Vec::new();
        if self.post.is_some() {
            types.push("post".to_string());
        }
        if self.page.is_some() {
            types.push("page".to_string());
        }
        if self.attachment.is_some() {
            types.push("attachment".to_string());
        }
        types
    }
}

/// POST /split: split the upload into chunks and bundle them into a zip.
pub async fn split(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<SplitForm>,
) -> Result<Response, StatusCode> {
    let Some(mut workflow) = load_workflow(&session).await? else {
        set_flash(&session, "Please upload a WordPress export file first").await;
        return Ok(Redirect::to("/").into_response());
    };

    // The engine accepts any positive size; interactive requests are clamped.
    let chunk_size = clamp_chunk_size(form.chunk_size.unwrap_or(DEFAULT_CHUNK_SIZE));
    let post_types = form.post_types();

    let output_dir = state.upload_root().join(Uuid::new_v4().to_string());
    let source_path = workflow.source_path.clone();

    let run_dir = output_dir.clone();
    let result = tokio::task::spawn_blocking(
        move || -> wxr_split::Result<(Vec<PathBuf>, PathBuf)> {
            let xml = std::fs::read_to_string(&source_path)?;
            let files = split_export(&xml, &run_dir, chunk_size, &post_types)?;
            let archive = archive_chunks(&files, None)?;
            Ok((files, archive))
        },
    )
    .await
    .map_err(|e| {
        tracing::error!(error = %e, "split task panicked");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    match result {
        Ok((files, archive)) => {
            workflow.chunk_size = Some(chunk_size);
            workflow.output_dir = Some(output_dir);
            workflow.archive_path = Some(archive);
            workflow.chunk_count = Some(files.len());
            store_workflow(&session, &workflow).await?;
            Ok(Redirect::to("/download").into_response())
        }
        Err(e) => {
            tracing::warn!(error = %e, "split failed");
            if let Err(remove_err) = std::fs::remove_dir_all(&output_dir) {
                if remove_err.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!(error = %remove_err, "failed to remove output dir after split failure");
                }
            }
            set_flash(&session, &format!("Splitting failed: {e}")).await;
            Ok(Redirect::to("/analyze").into_response())
        }
    }
}

/// GET /download: result page with the archive link.
pub async fn download_page(session: Session) -> Result<Response, StatusCode> {
    let Some(workflow) = load_workflow(&session).await? else {
        set_flash(&session, "Please upload a WordPress export file first").await;
        return Ok(Redirect::to("/").into_response());
    };
    if workflow.archive_path.is_none() {
        set_flash(&session, "Please split the export first").await;
        return Ok(Redirect::to("/analyze").into_response());
    }
    Ok(Html(pages::download(&workflow)).into_response())
}

/// GET /download/archive: stream the zip archive.
pub async fn download_archive(session: Session) -> Result<Response, StatusCode> {
    let Some(workflow) = load_workflow(&session).await? else {
        set_flash(&session, "Please upload a WordPress export file first").await;
        return Ok(Redirect::to("/").into_response());
    };
    let Some(archive_path) = workflow.archive_path else {
        set_flash(&session, "Please split the export first").await;
        return Ok(Redirect::to("/analyze").into_response());
    };

    let file_name = archive_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "wordpress_export_chunks.zip".to_string());

    let bytes = tokio::task::spawn_blocking(move || std::fs::read(&archive_path))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "archive read task panicked");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    match bytes {
        Ok(bytes) => Ok((
            [
                (header::CONTENT_TYPE, "application/zip".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{file_name}\""),
                ),
            ],
            bytes,
        )
            .into_response()),
        Err(e) => {
            tracing::warn!(error = %e, "archive no longer readable");
            set_flash(&session, "Download failed: the archive is no longer available").await;
            Ok(Redirect::to("/").into_response())
        }
    }
}

/// POST /reset: drop the session's workflow and start over.
pub async fn reset(session: Session) -> Result<Response, StatusCode> {
    clear_workflow(&session).await?;
    set_flash(&session, "Session reset").await;
    Ok(Redirect::to("/").into_response())
}
