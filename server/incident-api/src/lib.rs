//! Incident Record Service
//!
//! HTTP API that persists incident reports as documents in the incidents
//! index and fetches them back by store-assigned id. Handlers are generic
//! over [`doc_store::DocumentStore`] so tests run against the in-memory
//! store instead of a live cluster.

mod error;
mod handlers;
mod state;
mod types;

pub use error::ApiError;
pub use handlers::{create_incident, get_incident, health, root};
pub use state::AppState;
pub use types::{IncidentCreate, IncidentRecord, StoredIncident};

use axum::{routing::get, routing::post, Router};
use doc_store::DocumentStore;
use std::sync::Arc;

pub fn router<S: DocumentStore + 'static>(state: Arc<AppState<S>>) -> Router {
  Router::new()
    .route("/", get(root))
    .route("/health", get(health))
    .route("/incidents", post(create_incident::<S>))
    .route("/incidents/:id", get(get_incident::<S>))
    .with_state(state)
}
