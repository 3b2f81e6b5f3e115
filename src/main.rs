use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cinerec::api::{create_router, AppState};
use cinerec::config::Config;
use cinerec::services::posters::TmdbPosterClient;
use cinerec::store::{Catalog, PosterCache, SimilarityMatrix};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("Configuration error")?;

    // Load the precomputed artifacts; a missing or mismatched pair is fatal.
    let catalog = Catalog::load(&config.catalog_path)?;
    let similarity = SimilarityMatrix::load(&config.similarity_path)?;
    similarity.validate_shape(catalog.len())?;

    let cache = PosterCache::new(Duration::from_secs(config.poster_cache_ttl_secs));
    let posters = TmdbPosterClient::new(
        config.tmdb_api_key.clone(),
        config.tmdb_api_url.clone(),
        config.poster_base_url.clone(),
        cache,
    )
    .context("Failed to build TMDB client")?;

    let state = AppState::new(catalog, similarity, Arc::new(posters));
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Server running on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
