use std::time::Duration;

use tracing::{info, warn};

use cotacao_core::quotes::RateSummary;

use crate::cli::Args;
use crate::error::ClientError;

/// The single artifact line, matching what operators grep for.
pub fn artifact_line(bid: &str) -> String {
    format!("Dólar: R$ {bid}\n")
}

/// Fetch the bid and (over)write the artifact file.
///
/// One GET under the client-side deadline, then decode, then write. The send
/// is the only hard stop: no response within the deadline means nothing to
/// work with, and the artifact stays untouched. Once a response arrives the
/// flow runs to completion; a bad status or an undecodable body is reported
/// with the failing step named and the artifact is still written, carrying an
/// empty bid.
pub async fn run(args: &Args) -> Result<(), ClientError> {
    let deadline = Duration::from_millis(args.timeout_ms);
    let client = reqwest::Client::new();

    let response = client
        .get(&args.endpoint)
        .timeout(deadline)
        .send()
        .await
        .map_err(|e| map_request_error(e, args.timeout_ms))?;

    let bid = match read_bid(response).await {
        Ok(bid) => bid,
        Err(e) => {
            warn!("{e}; writing an empty bid");
            String::new()
        }
    };

    tokio::fs::write(&args.output, artifact_line(&bid)).await?;
    info!("wrote {} (bid \"{bid}\")", args.output.display());
    Ok(())
}

async fn read_bid(response: reqwest::Response) -> Result<String, ClientError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ClientError::Status(status.as_u16()));
    }

    let summary: RateSummary = response
        .json()
        .await
        .map_err(|e| ClientError::Decode(e.to_string()))?;
    Ok(summary.bid)
}

fn map_request_error(err: reqwest::Error, timeout_ms: u64) -> ClientError {
    if err.is_timeout() {
        ClientError::Timeout(timeout_ms)
    } else {
        ClientError::Request(err)
    }
}
