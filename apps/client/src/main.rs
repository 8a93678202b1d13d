//! One-shot CLI client for the cotacao service.
//!
//! Issues a single bounded GET to the quote endpoint and writes the bid to a
//! local artifact file. A failed send is the only hard stop and exits
//! non-zero with the artifact untouched; after a response arrives, per-step
//! failures are reported and the run continues through the artifact write.

mod cli;
mod error;
mod run;

use clap::Parser;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() {
    let args = cli::Args::parse();
    init_tracing();

    if let Err(e) = run::run(&args).await {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}
