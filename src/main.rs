use std::sync::Arc;

use anyhow::{Context, Result};
use blackjack_table::{config::Config, server, store::GameStore};
use clap::Parser;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    let addr = config.listen_addr()?;
    let store = Arc::new(GameStore::new(config.seed));
    let app = server::router(store);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, seeded = config.seed.is_some(), "blackjack table listening");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
