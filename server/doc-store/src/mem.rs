//! In-memory [`DocumentStore`] used by tests and local experiments.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;
use uuid::Uuid;

use crate::error::StoreError;
use crate::store::DocumentStore;

#[derive(Default)]
struct MemIndex {
  body: Value,
  docs: Vec<(String, Value)>,
}

/// Stores documents in insertion order, keyed by generated ids.
#[derive(Default)]
pub struct MemStore {
  indices: Mutex<HashMap<String, MemIndex>>,
}

impl MemStore {
  pub fn new() -> Self {
    Self::default()
  }

  /// Documents currently held by `index`, in insertion order.
  pub fn docs(&self, index: &str) -> Vec<Value> {
    self
      .indices
      .lock()
      .get(index)
      .map(|idx| idx.docs.iter().map(|(_, doc)| doc.clone()).collect())
      .unwrap_or_default()
  }

  /// Creation body recorded for `index`, if it was created explicitly.
  pub fn mapping(&self, index: &str) -> Option<Value> {
    self
      .indices
      .lock()
      .get(index)
      .map(|idx| idx.body.clone())
      .filter(|body| !body.is_null())
  }
}

#[async_trait]
impl DocumentStore for MemStore {
  async fn index_doc(&self, index: &str, doc: &Value) -> Result<String, StoreError> {
    let id = Uuid::new_v4().to_string();
    let mut indices = self.indices.lock();
    indices
      .entry(index.to_string())
      .or_default()
      .docs
      .push((id.clone(), doc.clone()));
    Ok(id)
  }

  async fn get_doc(&self, index: &str, id: &str) -> Result<Value, StoreError> {
    self
      .indices
      .lock()
      .get(index)
      .and_then(|idx| {
        idx
          .docs
          .iter()
          .find(|(doc_id, _)| doc_id == id)
          .map(|(_, doc)| doc.clone())
      })
      .ok_or_else(|| StoreError::not_found(index, id))
  }

  async fn index_exists(&self, index: &str) -> Result<bool, StoreError> {
    Ok(self.indices.lock().contains_key(index))
  }

  async fn create_index(&self, index: &str, body: &Value) -> Result<(), StoreError> {
    let mut indices = self.indices.lock();
    if indices.contains_key(index) {
      return Err(StoreError::api(
        "create_index",
        index,
        400,
        "resource_already_exists_exception",
      ));
    }
    indices.insert(
      index.to_string(),
      MemIndex {
        body: body.clone(),
        docs: Vec::new(),
      },
    );
    Ok(())
  }

  async fn delete_index(&self, index: &str) -> Result<(), StoreError> {
    if self.indices.lock().remove(index).is_none() {
      return Err(StoreError::api(
        "delete_index",
        index,
        404,
        "index_not_found_exception",
      ));
    }
    Ok(())
  }

  async fn bulk_index(&self, index: &str, docs: &[Value]) -> Result<usize, StoreError> {
    let mut indices = self.indices.lock();
    let entry = indices.entry(index.to_string()).or_default();
    for doc in docs {
      entry.docs.push((Uuid::new_v4().to_string(), doc.clone()));
    }
    Ok(docs.len())
  }
}
