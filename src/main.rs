use anyhow::Context;
use codesage::client::OpenRouterClient;
use codesage::config::Config;
use codesage::server::{build_router, AppState};
use codesage::util::{env_bind_addr, init_tracing};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    // Missing provider key is a startup failure, never a per-request one.
    let config = Config::from_env().context("invalid service configuration")?;
    tracing::info!(model = %config.model, base_url = %config.base_url, "provider configured");

    let provider = Arc::new(OpenRouterClient::new(config));
    let app = build_router(AppState { provider });

    let addr = env_bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("Codesage listening on http://{addr}");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
