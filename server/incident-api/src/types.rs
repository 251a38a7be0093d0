//! Wire and document types for incident records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Incident fields as submitted by the client.
///
/// The five text fields are required; missing any of them fails
/// deserialization before the store is touched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentCreate {
  pub title: String,
  pub summary: String,
  pub root_cause: String,
  pub impact: String,
  #[serde(default)]
  pub services: Vec<String>,
  pub remediation: String,
  pub time_window: Option<String>,
  #[serde(default)]
  pub raw_context_ids: Vec<String>,
}

impl IncidentCreate {
  /// Stored document: the submitted fields plus the server-side timestamp.
  pub fn to_doc(&self, created_at: DateTime<Utc>) -> Result<Value, serde_json::Error> {
    let mut doc = serde_json::to_value(self)?;
    if let Value::Object(map) = &mut doc {
      map.insert("created_at".to_string(), serde_json::to_value(created_at)?);
    }
    Ok(doc)
  }
}

/// Document shape read back from the incidents index.
///
/// Absent text fields read back as empty text and absent sequences as empty,
/// so older or hand-written documents still deserialize. `created_at` is the
/// one field a stored incident must carry.
#[derive(Debug, Clone, Deserialize)]
pub struct StoredIncident {
  #[serde(default)]
  pub title: String,
  #[serde(default)]
  pub summary: String,
  #[serde(default)]
  pub root_cause: String,
  #[serde(default)]
  pub impact: String,
  #[serde(default)]
  pub services: Vec<String>,
  #[serde(default)]
  pub remediation: String,
  #[serde(default)]
  pub time_window: Option<String>,
  #[serde(default)]
  pub raw_context_ids: Vec<String>,
  pub created_at: DateTime<Utc>,
}

/// Full record returned to clients: submitted fields plus `id` and
/// `created_at`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IncidentRecord {
  pub id: String,
  pub created_at: DateTime<Utc>,
  #[serde(flatten)]
  pub fields: IncidentCreate,
}

impl IncidentRecord {
  pub fn from_stored(id: String, stored: StoredIncident) -> Self {
    Self {
      id,
      created_at: stored.created_at,
      fields: IncidentCreate {
        title: stored.title,
        summary: stored.summary,
        root_cause: stored.root_cause,
        impact: stored.impact,
        services: stored.services,
        remediation: stored.remediation,
        time_window: stored.time_window,
        raw_context_ids: stored.raw_context_ids,
      },
    }
  }
}
