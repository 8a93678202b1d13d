use std::time::Duration;

use cotacao_core::quotes::DEFAULT_REQUEST_TIMEOUT;
use cotacao_market_data::DEFAULT_UPSTREAM_URL;
use cotacao_storage_sqlite::DEFAULT_WRITE_WINDOW;

/// Server configuration, sourced from `COTACAO_*` environment variables.
///
/// The two timeouts are independent constants, not a shared budget: the
/// request deadline bounds the upstream fetch, the store timeout bounds the
/// persistence write on its own clock.
pub struct Config {
    pub listen_addr: String,
    pub db_path: String,
    pub upstream_url: String,
    pub request_timeout: Duration,
    pub store_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self {
            listen_addr: env_or("COTACAO_LISTEN_ADDR", "0.0.0.0:8080"),
            db_path: env_or("COTACAO_DB_PATH", "./cotacao.db"),
            upstream_url: env_or("COTACAO_UPSTREAM_URL", DEFAULT_UPSTREAM_URL),
            request_timeout: env_millis("COTACAO_REQUEST_TIMEOUT_MS", DEFAULT_REQUEST_TIMEOUT),
            store_timeout: env_millis("COTACAO_STORE_TIMEOUT_MS", DEFAULT_WRITE_WINDOW),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_millis(key: &str, default: Duration) -> Duration {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .map(Duration::from_millis)
        .unwrap_or(default)
}
