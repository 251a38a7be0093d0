//! The document store abstraction both flows share.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::StoreError;

/// Operations the backend needs from the external document store.
///
/// Implemented by [`EsClient`](crate::EsClient) against Elasticsearch and by
/// [`MemStore`](crate::MemStore) for tests and local demos.
#[async_trait]
pub trait DocumentStore: Send + Sync {
  /// Create a document with a store-assigned id; returns that id.
  ///
  /// The store may auto-create the index on first write.
  async fn index_doc(&self, index: &str, doc: &Value) -> Result<String, StoreError>;

  /// Fetch a document's source by id. A missing document is
  /// [`StoreError::NotFound`], never a generic failure.
  async fn get_doc(&self, index: &str, id: &str) -> Result<Value, StoreError>;

  /// Does the index exist?
  async fn index_exists(&self, index: &str) -> Result<bool, StoreError>;

  /// Create an index; `body` carries the field mapping. Creating an index
  /// that already exists is an error.
  async fn create_index(&self, index: &str, body: &Value) -> Result<(), StoreError>;

  /// Delete an index. Deleting a missing index is an error.
  async fn delete_index(&self, index: &str) -> Result<(), StoreError>;

  /// Index many documents in one call; returns how many were written.
  async fn bulk_index(&self, index: &str, docs: &[Value]) -> Result<usize, StoreError>;
}
