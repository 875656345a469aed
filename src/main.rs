use std::{path::Path, sync::Arc};

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use shopmind_api::{
    api::{create_router, AppState},
    config::Config,
    services::{
        prompt::PromptOptions,
        providers::OpenAiProvider,
        Catalog, Recommender,
    },
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let catalog = Catalog::load(Path::new(&config.catalog_path))?;

    let provider = OpenAiProvider::new(&config);
    let recommender = Recommender::new(
        Arc::new(provider),
        PromptOptions {
            max_candidates: config.max_candidates,
        },
    );

    let state = AppState::new(catalog, recommender);
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(addr = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}
