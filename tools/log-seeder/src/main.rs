//! Binary entrypoint for the log seeder.
//!
//! One-shot: generate the batch, replace the logs index, exit. Any store
//! failure aborts the run with a non-zero exit.

use chrono::{Duration, Utc};
use rand::thread_rng;
use tracing::info;

use doc_store::{EsClient, StoreConfig};
use log_seeder::{generate_logs, seed_index, DEFAULT_BASELINE_PER_MINUTE, DEFAULT_MINUTES};

#[tokio::main]
async fn main() {
  tracing_subscriber::fmt().init();

  if let Err(e) = run().await {
    eprintln!("log-seeder: {}", e);
    std::process::exit(1);
  }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
  let config = StoreConfig::from_env()?;
  let store = EsClient::new(&config)?;
  let index = config.logs_index;

  // Backdate the window so the incident sits in the recent past.
  let start = Utc::now() - Duration::hours(3);
  let entries = generate_logs(
    start,
    DEFAULT_MINUTES,
    DEFAULT_BASELINE_PER_MINUTE,
    &mut thread_rng(),
  );

  info!("indexing {} log documents into {}", entries.len(), index);
  let written = seed_index(&store, &index, &entries).await?;
  info!("done: {} documents indexed", written);

  Ok(())
}
