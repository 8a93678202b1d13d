use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::main_lib::AppState;

pub mod health;
pub mod quote;

pub fn app_router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(quote::router())
        .merge(health::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
