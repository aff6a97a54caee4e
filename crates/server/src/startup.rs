use std::sync::Arc;

use axum::Router;
use configs::AppConfig;
use service::{InMemoryUserStore, UserStore};
use tokio::net::TcpListener;
use tracing::info;

use crate::cors::build_cors;
use crate::errors::StartupError;
use crate::routes;
use crate::shutdown::shutdown_signal;
use crate::state::AppState;

/// Assemble the router around an existing store.
pub fn build_app(config: &AppConfig, users: Arc<dyn UserStore>) -> Result<Router, StartupError> {
    let cors = build_cors(&config.cors)?;
    Ok(routes::build_router(AppState::new(users), cors))
}

/// Public entry: create the store, bind and serve until a shutdown signal.
pub async fn run(config: AppConfig) -> anyhow::Result<()> {
    let users: Arc<dyn UserStore> = InMemoryUserStore::new();
    let app = build_app(&config, users)?;

    let addr = config.server.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| StartupError::Bind { addr: addr.clone(), source })?;
    let local_addr = listener.local_addr()?;
    info!(addr = %local_addr, "server listening");

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
    info!(addr = %local_addr, "server stopped accepting connections");
    Ok(())
}
