use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use cotacao_core::quotes::{AwesomeApiFetcher, QuoteService, QuoteServiceTrait};
use cotacao_storage_sqlite::{db, spawn_writer, ExchangeRateRepository};

use crate::config::Config;

pub struct AppState {
    pub quote_service: Arc<dyn QuoteServiceTrait + Send + Sync>,
}

pub fn init_tracing() {
    let log_format = std::env::var("COTACAO_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = spawn_writer(&pool)?;

    let store = Arc::new(ExchangeRateRepository::with_write_window(
        writer,
        config.store_timeout,
    ));
    let fetcher = Arc::new(AwesomeApiFetcher::new(config.upstream_url.clone()));
    let quote_service: Arc<dyn QuoteServiceTrait + Send + Sync> = Arc::new(QuoteService::new(
        fetcher,
        store,
        config.request_timeout,
    ));

    Ok(Arc::new(AppState { quote_service }))
}
