//! AwesomeAPI currency quote provider.

use std::time::Duration;

use log::debug;
use reqwest::Client;

use crate::errors::ProviderError;
use crate::models::{RateEnvelope, RateQuote};

/// Default quote endpoint for the USD-BRL pair.
pub const DEFAULT_UPSTREAM_URL: &str = "https://economia.awesomeapi.com.br/json/last/USD-BRL";

/// Fetches the latest USD-BRL quote from AwesomeAPI.
///
/// Performs exactly one GET per call. Retries, caching and rate-limit
/// handling are out of scope; a failed call is reported and that is the end
/// of it.
pub struct AwesomeApiProvider {
    client: Client,
    url: String,
}

impl AwesomeApiProvider {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }

    /// Fetch the latest quote within `budget`.
    ///
    /// The budget covers the whole request (connect, send, read). Expiry
    /// surfaces as [`ProviderError::Timeout`]; every other transport, status
    /// or decode failure gets its own variant, and callers handle them all
    /// the same way.
    pub async fn latest(&self, budget: Duration) -> Result<RateQuote, ProviderError> {
        debug!("fetching {} with budget {:?}", self.url, budget);

        let response = self
            .client
            .get(&self.url)
            .timeout(budget)
            .send()
            .await
            .map_err(|e| map_transport_error(e, budget))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status {
                status: status.as_u16(),
            });
        }

        let envelope: RateEnvelope = response.json().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout {
                    budget_ms: budget.as_millis() as u64,
                }
            } else {
                ProviderError::Decode(e.to_string())
            }
        })?;

        Ok(envelope.usd_brl)
    }
}

fn map_transport_error(err: reqwest::Error, budget: Duration) -> ProviderError {
    if err.is_timeout() {
        ProviderError::Timeout {
            budget_ms: budget.as_millis() as u64,
        }
    } else {
        ProviderError::Network(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    const BODY: &str = r#"{"USDBRL":{"code":"USD","codein":"BRL","name":"Dólar Americano/Real Brasileiro","high":"5.78","low":"5.71","varBid":"0.02","pctChange":"0.37","bid":"5.7405","ask":"5.7415","timestamp":"1756500000","create_date":"2026-08-29 18:00:00"}}"#;

    /// Serves a single connection with the given status line and body, after
    /// an optional delay.
    async fn one_shot_server(status_line: &'static str, body: &'static str, delay: Duration) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;
            tokio::time::sleep(delay).await;
            let response = format!(
                "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len(),
            );
            let _ = socket.write_all(response.as_bytes()).await;
        });
        format!("http://{addr}/json/last/USD-BRL")
    }

    #[tokio::test]
    async fn decodes_successful_response() {
        let url = one_shot_server("HTTP/1.1 200 OK", BODY, Duration::ZERO).await;
        let provider = AwesomeApiProvider::new(url);
        let quote = provider.latest(Duration::from_secs(2)).await.unwrap();
        assert_eq!(quote.bid, "5.7405");
        assert_eq!(quote.code, "USD");
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let url = one_shot_server("HTTP/1.1 500 Internal Server Error", "", Duration::ZERO).await;
        let provider = AwesomeApiProvider::new(url);
        let err = provider.latest(Duration::from_secs(2)).await.unwrap_err();
        assert!(matches!(err, ProviderError::Status { status: 500 }));
    }

    #[tokio::test]
    async fn undecodable_body_is_an_error() {
        let url = one_shot_server("HTTP/1.1 200 OK", "not json", Duration::ZERO).await;
        let provider = AwesomeApiProvider::new(url);
        let err = provider.latest(Duration::from_secs(2)).await.unwrap_err();
        assert!(matches!(err, ProviderError::Decode(_)));
    }

    #[tokio::test]
    async fn slow_upstream_times_out_within_budget() {
        let url = one_shot_server("HTTP/1.1 200 OK", BODY, Duration::from_millis(500)).await;
        let provider = AwesomeApiProvider::new(url);
        let err = provider.latest(Duration::from_millis(50)).await.unwrap_err();
        assert!(matches!(err, ProviderError::Timeout { budget_ms: 50 }));
    }

    #[tokio::test]
    async fn unreachable_host_is_a_network_error() {
        // Bind then drop to get a port nothing is listening on.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let provider = AwesomeApiProvider::new(format!("http://{addr}/"));
        let err = provider.latest(Duration::from_secs(1)).await.unwrap_err();
        assert!(matches!(err, ProviderError::Network(_)));
    }
}
