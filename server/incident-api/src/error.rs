//! API error type and its HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use doc_store::StoreError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
  #[error("incident not found")]
  NotFound,
  #[error("store error: {0}")]
  Store(StoreError),
  #[error("document error: {0}")]
  Document(#[from] serde_json::Error),
}

impl From<StoreError> for ApiError {
  fn from(err: StoreError) -> Self {
    match err {
      StoreError::NotFound { .. } => ApiError::NotFound,
      other => ApiError::Store(other),
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      ApiError::NotFound => (StatusCode::NOT_FOUND, "incident not found"),
      ApiError::Store(err) => {
        tracing::error!("store error: {}", err);
        (StatusCode::INTERNAL_SERVER_ERROR, "internal error")
      }
      ApiError::Document(err) => {
        tracing::error!("document error: {}", err);
        (StatusCode::INTERNAL_SERVER_ERROR, "internal error")
      }
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn store_not_found_becomes_the_not_found_variant() {
    let err: ApiError = StoreError::not_found("incidents", "abc").into();
    assert!(matches!(err, ApiError::NotFound));
  }

  #[test]
  fn not_found_renders_404() {
    let response = ApiError::NotFound.into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
  }

  #[test]
  fn other_store_failures_render_500() {
    let err: ApiError = StoreError::api("get_doc", "incidents", 503, "unavailable").into();
    assert!(matches!(err, ApiError::Store(_)));
    assert_eq!(
      err.into_response().status(),
      StatusCode::INTERNAL_SERVER_ERROR
    );
  }
}
