//! Synthetic Log Seeder
//!
//! Generates a randomized two-hour batch of service logs with one embedded
//! 30-minute elevated-error incident window and bulk-loads it into a freshly
//! recreated index. Generation takes an explicit RNG so tests can drive it
//! with a fixed seed; the binary wires it to the Elasticsearch client.

mod catalog;
mod generate;
mod seed;

pub use catalog::{Level, Service, REGIONS, SUCCESS_MESSAGE, TIMEOUT_MESSAGE};
pub use generate::{
  generate_logs, sample_entry, LogEntry, DEFAULT_BASELINE_PER_MINUTE, DEFAULT_MINUTES,
};
pub use seed::{logs_mapping, seed_index, SeedError};
