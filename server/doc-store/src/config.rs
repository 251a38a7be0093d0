//! Store configuration from the process environment, resolved once at startup.

use crate::error::ConfigError;

/// Required: base URL of the document store.
pub const ENV_URL: &str = "ELASTICSEARCH_URL";
/// Required: credential sent as `Authorization: ApiKey ...` on every request.
pub const ENV_API_KEY: &str = "ELASTICSEARCH_API_KEY";

/// The logical indices this backend writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexKind {
  Incidents,
  Logs,
}

impl IndexKind {
  /// Environment variable that overrides this index name.
  pub fn env_var(self) -> &'static str {
    match self {
      Self::Incidents => "INCIDENTS_INDEX",
      Self::Logs => "INCIDENT_LOGS_INDEX",
    }
  }

  /// Index name used when no override is set.
  pub fn default_name(self) -> &'static str {
    match self {
      Self::Incidents => "incident-demo-incidents",
      Self::Logs => "incident-demo-logs",
    }
  }
}

/// Resolve a logical index name: the environment override when set to a
/// non-empty value, else the fixed default.
pub fn resolve_index_name(kind: IndexKind) -> String {
  std::env::var(kind.env_var())
    .ok()
    .filter(|v| !v.is_empty())
    .unwrap_or_else(|| kind.default_name().to_string())
}

/// Connection settings plus resolved index names.
#[derive(Debug, Clone)]
pub struct StoreConfig {
  pub url: String,
  pub api_key: String,
  pub incidents_index: String,
  pub logs_index: String,
}

impl StoreConfig {
  /// Read the full configuration from the environment.
  ///
  /// Fails if `ELASTICSEARCH_URL` or `ELASTICSEARCH_API_KEY` is absent or
  /// empty; index names fall back to their defaults.
  pub fn from_env() -> Result<Self, ConfigError> {
    Ok(Self {
      url: require_env(ENV_URL)?,
      api_key: require_env(ENV_API_KEY)?,
      incidents_index: resolve_index_name(IndexKind::Incidents),
      logs_index: resolve_index_name(IndexKind::Logs),
    })
  }
}

fn require_env(name: &'static str) -> Result<String, ConfigError> {
  std::env::var(name)
    .ok()
    .filter(|v| !v.is_empty())
    .ok_or(ConfigError::MissingEnv(name))
}
