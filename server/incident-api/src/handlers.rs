//! HTTP handlers for the incident API.

use axum::extract::{Path, State};
use axum::Json;
use chrono::Utc;
use doc_store::DocumentStore;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::error::ApiError;
use crate::state::AppState;
use crate::types::{IncidentCreate, IncidentRecord, StoredIncident};

pub async fn root() -> Json<Value> {
  Json(json!({
    "app": "Incident Co-Pilot Backend",
    "health": "/health",
    "create_incident": "POST /incidents",
    "get_incident": "GET /incidents/{id}",
  }))
}

pub async fn health() -> Json<Value> {
  Json(json!({ "status": "ok" }))
}

pub async fn create_incident<S: DocumentStore>(
  State(state): State<Arc<AppState<S>>>,
  Json(incident): Json<IncidentCreate>,
) -> Result<Json<IncidentRecord>, ApiError> {
  let created_at = Utc::now();
  let doc = incident.to_doc(created_at)?;
  let id = state.store.index_doc(&state.incidents_index, &doc).await?;

  Ok(Json(IncidentRecord {
    id,
    created_at,
    fields: incident,
  }))
}

pub async fn get_incident<S: DocumentStore>(
  State(state): State<Arc<AppState<S>>>,
  Path(id): Path<String>,
) -> Result<Json<IncidentRecord>, ApiError> {
  let doc = state.store.get_doc(&state.incidents_index, &id).await?;
  let stored: StoredIncident = serde_json::from_value(doc)?;
  Ok(Json(IncidentRecord::from_stored(id, stored)))
}
