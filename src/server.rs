use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use anyhow::{Context, Result};
use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tokio::signal;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ServeSettings;
use crate::handlers;
use crate::storage::FileStore;

/// Path of the list endpoint.
pub const LIST_FILES_PATH: &str = "/tools/list_files";
/// Path of the create endpoint.
pub const CREATE_FILE_PATH: &str = "/tools/create_file";

/// Builds the router. A `request_timeout_secs` of 0 disables the timeout.
pub fn build_app(store: FileStore, request_timeout_secs: u64) -> Router {
    let tools = Router::new()
        .route("/tools", get(handlers::list_tools))
        .route(LIST_FILES_PATH, get(handlers::list_files))
        .route(CREATE_FILE_PATH, post(handlers::create_file))
        .with_state(store);

    let app = Router::new()
        .route("/livez", get(handlers::livez))
        .merge(tools)
        .layer(TraceLayer::new_for_http());

    if request_timeout_secs == 0 {
        return app;
    }

    app.layer(TimeoutLayer::with_status_code(
        StatusCode::REQUEST_TIMEOUT,
        Duration::from_secs(request_timeout_secs),
    ))
}

/// Runs the file server until Ctrl+C or SIGTERM.
pub async fn serve(settings: ServeSettings) -> Result<()> {
    let store = FileStore::open(&settings.dir).with_context(|| {
        format!(
            "Failed to create storage directory: {}",
            settings.dir.display()
        )
    })?;
    info!(dir = %store.dir().display(), "Using storage directory");

    let app = build_app(store, settings.request_timeout);

    let ip: IpAddr = settings
        .host
        .parse()
        .with_context(|| format!("Invalid host address: {}", settings.host))?;
    let addr = SocketAddr::new(ip, settings.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!(addr = %addr, "Starting file server");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("File server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down..."),
        () = terminate => info!("Received SIGTERM, shutting down..."),
    }
}
