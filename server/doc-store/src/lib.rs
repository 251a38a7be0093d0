//! Shared document-store client for the incident backend.
//!
//! The API server and the log seeder both talk to an Elasticsearch-compatible
//! store through the [`DocumentStore`] trait. [`EsClient`] is the production
//! implementation; [`MemStore`] backs tests without a running cluster.
//! [`StoreConfig`] reads connection settings and index names from the
//! environment.

mod config;
mod error;
mod es;
mod mem;
mod store;

pub use config::{resolve_index_name, IndexKind, StoreConfig, ENV_API_KEY, ENV_URL};
pub use error::{ConfigError, StoreError};
pub use es::EsClient;
pub use mem::MemStore;
pub use store::DocumentStore;
