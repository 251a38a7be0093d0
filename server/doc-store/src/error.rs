//! Structured error types for the store client.

use thiserror::Error;

/// Missing or unusable environment configuration. Fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("{0} must be set and non-empty in the environment")]
  MissingEnv(&'static str),
}

/// Errors from document store operations.
///
/// True not-found is its own variant so callers can map it to 404 without
/// swallowing transport failures.
#[derive(Debug, Error)]
pub enum StoreError {
  /// The store reported that the document does not exist.
  #[error("document {id} not found in index {index}")]
  NotFound { index: String, id: String },

  /// The store accepted a write but returned no document id.
  #[error("store returned no document id for index {index}")]
  MissingId { index: String },

  /// The store answered with a non-success status.
  #[error("{op} {index}: status {status}: {body}")]
  Api {
    op: &'static str,
    index: String,
    status: u16,
    body: String,
  },

  /// A bulk write was accepted but some items were rejected.
  #[error("bulk into {index}: {failed} item(s) rejected: {reason}")]
  BulkRejected {
    index: String,
    failed: usize,
    reason: String,
  },

  /// Transport-level failure (connect, timeout, malformed response body).
  #[error("transport: {0}")]
  Transport(#[from] reqwest::Error),
}

impl StoreError {
  pub fn not_found(index: &str, id: &str) -> Self {
    Self::NotFound {
      index: index.to_string(),
      id: id.to_string(),
    }
  }

  pub fn api(op: &'static str, index: &str, status: u16, body: impl Into<String>) -> Self {
    Self::Api {
      op,
      index: index.to_string(),
      status,
      body: body.into(),
    }
  }
}
