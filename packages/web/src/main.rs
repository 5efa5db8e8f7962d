use std::env;

use tracing_subscriber::EnvFilter;

use wxr_split_web::{app, AppState};

const DEFAULT_BIND: &str = "0.0.0.0:8080";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let state = match AppState::new() {
        Ok(state) => state,
        Err(e) => {
            tracing::error!(error = %e, "failed to create upload scratch directory");
            std::process::exit(1);
        }
    };
    tracing::info!(path = %state.upload_root().display(), "upload scratch directory ready");

    let bind = env::var("WXR_WEB_BIND").unwrap_or_else(|_| DEFAULT_BIND.to_string());
    let listener = match tokio::net::TcpListener::bind(&bind).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(bind, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };
    tracing::info!(bind, "listening");

    if let Err(e) = axum::serve(listener, app(state)).await {
        tracing::error!(error = %e, "server error");
        std::process::exit(1);
    }
}
