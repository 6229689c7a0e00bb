use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use configs::{AppConfig, StoreConfig, StoreMode};
use models::{product, term};
use service::store::{MemoryStore, PostgrestStore, TableStore};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::{routes, state::AppState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Router wired around an injected store client.
pub fn build_app(store: Arc<dyn TableStore>) -> Router {
    routes::build_router(AppState::new(store), build_cors())
}

/// Store client selected by `store.mode`.
pub fn build_store(cfg: &StoreConfig) -> anyhow::Result<Arc<dyn TableStore>> {
    let store: Arc<dyn TableStore> = match cfg.mode {
        StoreMode::Postgrest => Arc::new(PostgrestStore::from_config(cfg)?),
        StoreMode::Memory => {
            // 本地运行：表只存在于进程内，重启即丢失
            warn!("store.mode=memory, data is not persisted");
            Arc::new(
                MemoryStore::new()
                    .with_unique_key(product::TABLE, product::KEY)
                    .with_unique_key(term::TABLE, term::KEY),
            )
        }
    };
    Ok(store)
}

/// Public entry: run the HTTP server with an already validated configuration
pub async fn run_with_config(cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(build_store(&cfg.store)?);

    let addr: SocketAddr = cfg.server.bind_addr().parse()?;
    info!(%addr, store_mode = ?cfg.store.mode, store_url = %cfg.store.url, "starting server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut s) => { s.recv().await; }
            Err(e) => {
                warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!(event = "shutdown_signal", "shutdown signal received, draining connections");
}
