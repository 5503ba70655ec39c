//! Serve command - Starts the HTTP health surface.

use std::future::Future;

use tokio::net::TcpListener;

use crate::api::{create_router, AppState};
use crate::cli::args::ServeArgs;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::Database;

/// Execute the serve command
pub async fn execute(args: ServeArgs, mut config: Config) -> AppResult<()> {
    tracing::info!("Starting server...");

    if let Some(host) = args.host {
        config.server_host = host;
    }
    if let Some(port) = args.port {
        config.server_port = port;
    }

    let db = Database::connect(&config.database).await?;
    tracing::info!("Database connected");

    if config.basic_auth.enabled {
        tracing::info!(username = %config.basic_auth.username, "Basic auth gate enabled");
    }

    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!("Server running on http://{}", addr);

    let app_state = AppState::new(db, config.basic_auth);
    serve_until(listener, app_state, shutdown_signal()).await
}

/// Serve requests until `shutdown` resolves, then close the pool.
pub(crate) async fn serve_until<F>(
    listener: TcpListener,
    app_state: AppState,
    shutdown: F,
) -> AppResult<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = create_router(app_state.clone());

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)));

    // Router clones are gone once serve returns
    match std::sync::Arc::try_unwrap(app_state.database) {
        Ok(db) => {
            if let Err(e) = db.close().await {
                tracing::warn!("Failed to close database pool: {}", e);
            }
        }
        Err(_) => tracing::debug!("Database pool still shared at shutdown"),
    }

    tracing::info!("Server stopped");
    served
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::warn!("Received Ctrl+C, shutting down"),
        _ = terminate => tracing::warn!("Received terminate signal, shutting down"),
    }
}
