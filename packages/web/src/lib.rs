//! wxr-split web UI.
//!
//! Four sequential views over the `wxr_split` library: upload a WordPress
//! export, review the analysis, split it into chunks, download the zip.
//! Session state is an explicit [`session::Workflow`] record; each session
//! works on its own uuid-named scratch paths, so concurrent sessions never
//! touch the same files.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

use wxr_split::config::MAX_UPLOAD_SIZE;

pub mod handlers;
pub mod pages;
pub mod session;
pub mod state;

pub use state::AppState;

/// Session idle expiry.
const SESSION_IDLE_MINUTES: i64 = 30;

/// Build the application router.
pub fn app(state: AppState) -> Router {
    let session_layer = SessionManagerLayer::new(MemoryStore::default())
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(time::Duration::minutes(
            SESSION_IDLE_MINUTES,
        )));

    Router::new()
        .route("/", get(handlers::index))
        .route("/upload", post(handlers::upload))
        .route("/analyze", get(handlers::analyze_page))
        .route("/split", post(handlers::split))
        .route("/download", get(handlers::download_page))
        .route("/download/archive", get(handlers::download_archive))
        .route("/reset", post(handlers::reset))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_SIZE))
        .layer(TraceLayer::new_for_http())
        .layer(session_layer)
        .with_state(state)
}
