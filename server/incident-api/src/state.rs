//! Shared state handed to every request handler.

use doc_store::DocumentStore;

/// One store client and the resolved incidents index name, built once at
/// startup and shared behind an `Arc`.
pub struct AppState<S: DocumentStore> {
  pub store: S,
  pub incidents_index: String,
}
