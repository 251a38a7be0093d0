//! Elasticsearch REST implementation of [`DocumentStore`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde_json::Value;

use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::store::DocumentStore;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for an Elasticsearch-compatible store.
///
/// Construct once at the composition root and share by reference; the inner
/// reqwest client pools connections across requests.
pub struct EsClient {
  http: Client,
  base_url: String,
  api_key: String,
}

impl EsClient {
  pub fn new(config: &StoreConfig) -> Result<Self, StoreError> {
    let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
    Ok(Self {
      http,
      base_url: config.url.trim_end_matches('/').to_string(),
      api_key: config.api_key.clone(),
    })
  }

  fn url(&self, path: &str) -> String {
    format!("{}/{}", self.base_url, path)
  }

  fn auth(&self) -> String {
    format!("ApiKey {}", self.api_key)
  }

  async fn read_error(op: &'static str, index: &str, response: Response) -> StoreError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    StoreError::api(op, index, status, body)
  }
}

#[async_trait]
impl DocumentStore for EsClient {
  async fn index_doc(&self, index: &str, doc: &Value) -> Result<String, StoreError> {
    let response = self
      .http
      .post(self.url(&format!("{index}/_doc")))
      .header("authorization", self.auth())
      .json(doc)
      .send()
      .await?;
    if !response.status().is_success() {
      return Err(Self::read_error("index_doc", index, response).await);
    }

    let body: Value = response.json().await?;
    match body.get("_id").and_then(Value::as_str) {
      Some(id) if !id.is_empty() => Ok(id.to_string()),
      _ => Err(StoreError::MissingId {
        index: index.to_string(),
      }),
    }
  }

  async fn get_doc(&self, index: &str, id: &str) -> Result<Value, StoreError> {
    let response = self
      .http
      .get(self.url(&format!("{index}/_doc/{id}")))
      .header("authorization", self.auth())
      .send()
      .await?;
    if response.status() == StatusCode::NOT_FOUND {
      return Err(StoreError::not_found(index, id));
    }
    if !response.status().is_success() {
      return Err(Self::read_error("get_doc", index, response).await);
    }

    let mut body: Value = response.json().await?;
    // A hit without _source reads back as an empty document.
    Ok(
      body
        .get_mut("_source")
        .map(Value::take)
        .unwrap_or_else(|| Value::Object(Default::default())),
    )
  }

  async fn index_exists(&self, index: &str) -> Result<bool, StoreError> {
    let response = self
      .http
      .head(self.url(index))
      .header("authorization", self.auth())
      .send()
      .await?;
    let status = response.status();
    if status.is_success() {
      Ok(true)
    } else if status == StatusCode::NOT_FOUND {
      Ok(false)
    } else {
      Err(Self::read_error("index_exists", index, response).await)
    }
  }

  async fn create_index(&self, index: &str, body: &Value) -> Result<(), StoreError> {
    let response = self
      .http
      .put(self.url(index))
      .header("authorization", self.auth())
      .json(body)
      .send()
      .await?;
    if !response.status().is_success() {
      return Err(Self::read_error("create_index", index, response).await);
    }
    Ok(())
  }

  async fn delete_index(&self, index: &str) -> Result<(), StoreError> {
    let response = self
      .http
      .delete(self.url(index))
      .header("authorization", self.auth())
      .send()
      .await?;
    if !response.status().is_success() {
      return Err(Self::read_error("delete_index", index, response).await);
    }
    Ok(())
  }

  async fn bulk_index(&self, index: &str, docs: &[Value]) -> Result<usize, StoreError> {
    if docs.is_empty() {
      return Ok(0);
    }

    let response = self
      .http
      .post(self.url(&format!("{index}/_bulk")))
      .header("authorization", self.auth())
      .header("content-type", "application/x-ndjson")
      .body(bulk_body(docs))
      .send()
      .await?;
    if !response.status().is_success() {
      return Err(Self::read_error("bulk_index", index, response).await);
    }

    // The bulk endpoint answers 200 even when individual items fail.
    let summary: Value = response.json().await?;
    if summary.get("errors").and_then(Value::as_bool).unwrap_or(false) {
      let (failed, reason) = bulk_failures(&summary);
      return Err(StoreError::BulkRejected {
        index: index.to_string(),
        failed,
        reason,
      });
    }
    Ok(docs.len())
  }
}

/// NDJSON bulk body: one action line and one source line per document, with
/// the trailing newline the bulk API requires.
fn bulk_body(docs: &[Value]) -> String {
  let mut body = String::new();
  for doc in docs {
    body.push_str("{\"index\":{}}\n");
    body.push_str(&doc.to_string());
    body.push('\n');
  }
  body
}

/// Count rejected items and surface the first rejection reason.
fn bulk_failures(summary: &Value) -> (usize, String) {
  let mut failed = 0;
  let mut reason = String::new();
  if let Some(items) = summary.get("items").and_then(Value::as_array) {
    for item in items {
      if let Some(error) = item.get("index").and_then(|op| op.get("error")) {
        failed += 1;
        if reason.is_empty() {
          reason = error
            .get("reason")
            .and_then(Value::as_str)
            .unwrap_or("unknown")
            .to_string();
        }
      }
    }
  }
  if reason.is_empty() {
    reason = "unknown".to_string();
  }
  (failed, reason)
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  fn config(url: &str) -> StoreConfig {
    StoreConfig {
      url: url.to_string(),
      api_key: "dGVzdC1rZXk=".to_string(),
      incidents_index: "incidents".to_string(),
      logs_index: "logs".to_string(),
    }
  }

  #[test]
  fn url_building_trims_the_trailing_slash() {
    let client = EsClient::new(&config("http://localhost:9200/")).unwrap();
    assert_eq!(client.url("idx/_doc"), "http://localhost:9200/idx/_doc");

    let client = EsClient::new(&config("http://localhost:9200")).unwrap();
    assert_eq!(client.url("idx/_bulk"), "http://localhost:9200/idx/_bulk");
  }

  #[test]
  fn auth_header_uses_the_api_key_scheme() {
    let client = EsClient::new(&config("http://localhost:9200")).unwrap();
    assert_eq!(client.auth(), "ApiKey dGVzdC1rZXk=");
  }

  #[test]
  fn bulk_body_pairs_action_and_source_lines() {
    let docs = vec![json!({"a": 1}), json!({"b": 2})];
    let body = bulk_body(&docs);
    let lines: Vec<&str> = body.lines().collect();

    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "{\"index\":{}}");
    assert_eq!(lines[1], "{\"a\":1}");
    assert_eq!(lines[2], "{\"index\":{}}");
    assert_eq!(lines[3], "{\"b\":2}");
    assert!(body.ends_with('\n'));
  }

  #[test]
  fn bulk_failures_reports_count_and_first_reason() {
    let summary = json!({
      "errors": true,
      "items": [
        {"index": {"status": 201}},
        {"index": {"status": 400, "error": {"type": "mapper_parsing_exception", "reason": "failed to parse field"}}},
        {"index": {"status": 400, "error": {"type": "mapper_parsing_exception", "reason": "second failure"}}}
      ]
    });

    let (failed, reason) = bulk_failures(&summary);
    assert_eq!(failed, 2);
    assert_eq!(reason, "failed to parse field");
  }
}
