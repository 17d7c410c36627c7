use crate::routes::{health_routes, not_found, ride_routes};
use crate::state::AppState;
use crate::{Result, WebError};
use axum::Router;
use rides_config::ServerConfig;
use std::future::Future;
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;

/// Router with every endpoint; no listener is bound.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(ride_routes())
        .with_state(state)
        .merge(health_routes())
        .method_not_allowed_fallback(not_found)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
}

pub async fn start_server(config: &ServerConfig, state: AppState) -> Result<()> {
    let addr: SocketAddr = config
        .socket_addr()
        .parse()
        .map_err(|e| WebError::Config(format!("Invalid address: {e}")))?;

    let app = build_router(state);

    tracing::info!("App started and listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    wait_for_shutdown(tokio::signal::ctrl_c(), terminate()).await;
}

#[cfg(unix)]
async fn terminate() {
    use tokio::signal::unix::{signal, SignalKind};

    match signal(SignalKind::terminate()) {
        Ok(mut stream) => {
            stream.recv().await;
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to listen for SIGTERM");
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(not(unix))]
async fn terminate() {
    std::future::pending::<()>().await;
}

/// Resolves on whichever of Ctrl-C or terminate fires first.
async fn wait_for_shutdown<C, T>(ctrl_c: C, terminate: T)
where
    C: Future<Output = std::io::Result<()>>,
    T: Future<Output = ()>,
{
    let ctrl_c = async {
        if let Err(e) = ctrl_c.await {
            tracing::warn!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        _ = ctrl_c => tracing::info!("Ctrl-C received"),
        _ = terminate => tracing::info!("SIGTERM received"),
    }
    tracing::info!("Shutdown signal received");
}
