use crate::config::StorefrontConfig;
use crate::database::ProductRepository;
use crate::database::sqlite::SqliteRepository;
use crate::features::products::service::CategoryQueryHandler;
use crate::features::products::view::CategoryPageRenderer;
use crate::io::local::LocalProductSource;
use crate::services::SeedImporter;
use anyhow::Context;
use axum::Router;
use std::path::Path;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub mod config;
mod database;
mod domain;
mod error;
mod features;
mod io;
mod logging;
mod services;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CategoryQueryHandler>,
    pub renderer: Arc<CategoryPageRenderer>,
}

// features are composed here, static assets are served next to them
pub fn app(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .merge(features::products::products_router())
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // determine environment variables
    dotenv::dotenv().ok();

    let config = StorefrontConfig::from_env()?;
    logging::init_tracing(config.log_format);

    // the one shared store handle, lives until shutdown
    let pool = database::pool::connect(&config)
        .await
        .with_context(|| format!("Failed to open product store at {}", config.database_url))?;

    let repo: Arc<dyn ProductRepository> = Arc::new(SqliteRepository::new(pool.clone()));

    if let Some(seed_dir) = &config.seed_dir {
        SeedImporter::new(repo.clone(), Box::new(LocalProductSource))
            .import_dir(seed_dir)
            .await?;
    }

    let product_count = repo.count_products().await?;
    tracing::info!(products = product_count, "product store ready");

    let state = AppState {
        catalog: Arc::new(CategoryQueryHandler::new(repo)),
        renderer: Arc::new(CategoryPageRenderer::new().context("Failed to load page templates")?),
    };

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "server listening");

    axum::serve(listener, app(state, &config.static_dir))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    database::pool::close(pool).await;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        // without a signal handler, keep serving until the process is killed
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
