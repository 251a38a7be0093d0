//! Index seeding: drop, recreate with the log mapping, bulk write.

use doc_store::{DocumentStore, StoreError};
use serde_json::{json, Value};
use thiserror::Error;

use crate::generate::LogEntry;

#[derive(Debug, Error)]
pub enum SeedError {
  #[error("store error: {0}")]
  Store(#[from] StoreError),
  #[error("serialize error: {0}")]
  Serialize(#[from] serde_json::Error),
}

/// Field mapping for the logs index.
pub fn logs_mapping() -> Value {
  json!({
    "mappings": {
      "properties": {
        "@timestamp": { "type": "date" },
        "service": { "type": "keyword" },
        "endpoint": { "type": "keyword" },
        "level": { "type": "keyword" },
        "trace_id": { "type": "keyword" },
        "message": { "type": "text" },
        "latency_ms": { "type": "float" },
        "region": { "type": "keyword" }
      }
    }
  })
}

/// Replace the contents of `index` with `entries`: delete the index if it
/// exists, recreate it with the fixed mapping, then write the whole batch in
/// one bulk call. Returns the number of documents written.
pub async fn seed_index<S: DocumentStore>(
  store: &S,
  index: &str,
  entries: &[LogEntry],
) -> Result<usize, SeedError> {
  if store.index_exists(index).await? {
    store.delete_index(index).await?;
  }
  store.create_index(index, &logs_mapping()).await?;

  let docs = entries
    .iter()
    .map(serde_json::to_value)
    .collect::<Result<Vec<_>, _>>()?;
  Ok(store.bulk_index(index, &docs).await?)
}
