use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use customer_registry::config::Config;
use customer_registry::{CustomerStore, Server, api, logging};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    logging::init(config.verbose);

    let store = Arc::new(CustomerStore::seeded(config.update_policy));
    info!(customers = store.len(), policy = ?config.update_policy, "store seeded");

    Server::bind(&config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?
        .serve(api::routes(store))
        .await
        .context("server error")
}
