use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use cotacao_core::quotes::RateSummary;

use crate::{error::ApiResult, main_lib::AppState};

/// Serve the latest USD-BRL bid.
///
/// The deadline is attached at receipt and pre-flighted before the fetch; a
/// spent deadline answers 503 without touching the upstream, a failed fetch
/// answers 500. Persistence runs after the response is committed and can not
/// change the outcome.
async fn get_quote(State(state): State<Arc<AppState>>) -> ApiResult<Json<RateSummary>> {
    let deadline = state.quote_service.request_deadline();
    let rate = state.quote_service.latest_quote(deadline).await?;
    let summary = RateSummary::from(&rate);

    // Response-first ordering: hand the decoded quote to a detached task for
    // the single bounded write, so the reply is never gated on the store.
    // The task may be scheduled before the response bytes leave the socket;
    // the reply is already committed at that point and the write outcome can
    // not alter it.
    let service = state.quote_service.clone();
    tokio::spawn(async move { service.record_quote(rate).await });

    Ok(Json(summary))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/quote", get(get_quote))
}
