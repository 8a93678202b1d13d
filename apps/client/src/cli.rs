use std::path::PathBuf;

use clap::Parser;

/// Fetch the latest USD-BRL bid from the cotacao service and write it to a
/// local file.
#[derive(Parser, Debug)]
#[command(name = "cotacao-client", version)]
pub struct Args {
    /// Quote endpoint of the cotacao server.
    #[arg(long, env = "COTACAO_ENDPOINT", default_value = "http://localhost:8080/quote")]
    pub endpoint: String,

    /// Client-side deadline in milliseconds. Independent of (and larger
    /// than) the server's own deadline; the hops do not share a budget.
    #[arg(long, env = "COTACAO_CLIENT_TIMEOUT_MS", default_value_t = 300)]
    pub timeout_ms: u64,

    /// Artifact file to (over)write with the fetched bid.
    #[arg(long, env = "COTACAO_OUTPUT", default_value = "cotacao.txt")]
    pub output: PathBuf,
}
