//! Synthetic log generation: two hours of randomized traffic with one
//! embedded elevated-error incident window.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::Serialize;

use crate::catalog::{Level, Service, REGIONS, SUCCESS_MESSAGE, TIMEOUT_MESSAGE};

pub const DEFAULT_MINUTES: u32 = 120;
pub const DEFAULT_BASELINE_PER_MINUTE: u32 = 20;

const INCIDENT_OFFSET_MINUTES: i64 = 30;
const INCIDENT_LENGTH_MINUTES: i64 = 30;

/// One synthetic log document.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
  #[serde(rename = "@timestamp")]
  pub timestamp: DateTime<Utc>,
  pub service: Service,
  pub endpoint: &'static str,
  pub level: Level,
  pub trace_id: String,
  pub message: &'static str,
  pub latency_ms: f64,
  pub region: &'static str,
}

/// Build the full batch for `[start, start + minutes)`.
///
/// The incident window covers minutes 30 through 60 of the batch, inclusive
/// on both ends; each minute inside it carries three times the baseline
/// volume. Entries come out in non-decreasing timestamp order, one minute
/// per step.
pub fn generate_logs(
  start: DateTime<Utc>,
  minutes: u32,
  baseline_per_minute: u32,
  rng: &mut impl Rng,
) -> Vec<LogEntry> {
  let end = start + Duration::minutes(i64::from(minutes));
  let incident_start = start + Duration::minutes(INCIDENT_OFFSET_MINUTES);
  let incident_end = incident_start + Duration::minutes(INCIDENT_LENGTH_MINUTES);

  let mut entries = Vec::new();
  let mut current = start;
  while current < end {
    let in_incident = current >= incident_start && current <= incident_end;
    let per_minute = baseline_per_minute * if in_incident { 3 } else { 1 };
    for _ in 0..per_minute {
      entries.push(sample_entry(current, in_incident, rng));
    }
    current += Duration::minutes(1);
  }
  entries
}

/// Draw one entry for the given minute.
///
/// Checkout-confirm traffic inside the incident window carries the anomaly
/// signal (high latency and a fixed timeout message); everything else
/// follows the quiet baseline distribution.
pub fn sample_entry(timestamp: DateTime<Utc>, in_incident: bool, rng: &mut impl Rng) -> LogEntry {
  let service = Service::ALL[rng.gen_range(0..Service::ALL.len())];
  let endpoints = service.endpoints();
  let endpoint = endpoints[rng.gen_range(0..endpoints.len())];
  let region = REGIONS[rng.gen_range(0..REGIONS.len())];

  let (level, latency_ms, message) =
    if in_incident && service == Service::Checkout && endpoint.contains("confirm") {
      let level = if rng.gen::<f64>() < 0.7 {
        Level::Error
      } else {
        Level::Warn
      };
      (level, rng.gen_range(800.0..2000.0), TIMEOUT_MESSAGE)
    } else {
      (sample_level(rng), rng.gen_range(50.0..400.0), SUCCESS_MESSAGE)
    };

  LogEntry {
    timestamp,
    service,
    endpoint,
    level,
    trace_id: format!("trace-{}", rng.gen_range(1..=10_000)),
    message,
    latency_ms,
    region,
  }
}

/// INFO / WARN / ERROR at 0.8 / 0.15 / 0.05.
fn sample_level(rng: &mut impl Rng) -> Level {
  let roll: f64 = rng.gen();
  if roll < 0.80 {
    Level::Info
  } else if roll < 0.95 {
    Level::Warn
  } else {
    Level::Error
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::TimeZone;
  use rand::rngs::StdRng;
  use rand::SeedableRng;

  fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
  }

  fn count_at(entries: &[LogEntry], minute: i64) -> usize {
    let stamp = t0() + Duration::minutes(minute);
    entries.iter().filter(|e| e.timestamp == stamp).count()
  }

  #[test]
  fn timestamps_are_monotonic_and_span_the_window() {
    let mut rng = StdRng::seed_from_u64(42);
    let entries = generate_logs(t0(), DEFAULT_MINUTES, DEFAULT_BASELINE_PER_MINUTE, &mut rng);

    assert_eq!(entries.first().unwrap().timestamp, t0());
    assert_eq!(
      entries.last().unwrap().timestamp,
      t0() + Duration::minutes(119)
    );
    for pair in entries.windows(2) {
      assert!(pair[0].timestamp <= pair[1].timestamp);
    }
  }

  #[test]
  fn incident_minutes_triple_the_volume_inclusive_of_both_ends() {
    let mut rng = StdRng::seed_from_u64(42);
    let entries = generate_logs(t0(), DEFAULT_MINUTES, DEFAULT_BASELINE_PER_MINUTE, &mut rng);

    assert_eq!(count_at(&entries, 29), 20);
    assert_eq!(count_at(&entries, 30), 60);
    assert_eq!(count_at(&entries, 45), 60);
    assert_eq!(count_at(&entries, 60), 60);
    assert_eq!(count_at(&entries, 61), 20);
    assert_eq!(count_at(&entries, 119), 20);

    // 31 elevated minutes, 89 quiet ones.
    assert_eq!(entries.len(), 31 * 60 + 89 * 20);
  }

  #[test]
  fn confirm_timeouts_only_inside_the_window() {
    let mut rng = StdRng::seed_from_u64(7);
    let entries = generate_logs(t0(), DEFAULT_MINUTES, DEFAULT_BASELINE_PER_MINUTE, &mut rng);

    let incident_start = t0() + Duration::minutes(30);
    let incident_end = incident_start + Duration::minutes(30);

    let mut confirm_hits = 0usize;
    let mut confirm_errors = 0usize;
    for entry in &entries {
      let in_window = entry.timestamp >= incident_start && entry.timestamp <= incident_end;
      if in_window && entry.service == Service::Checkout && entry.endpoint.contains("confirm") {
        assert_eq!(entry.message, TIMEOUT_MESSAGE);
        assert!(entry.latency_ms >= 800.0 && entry.latency_ms < 2000.0);
        assert!(matches!(entry.level, Level::Error | Level::Warn));
        confirm_hits += 1;
        if entry.level == Level::Error {
          confirm_errors += 1;
        }
      } else {
        assert_eq!(entry.message, SUCCESS_MESSAGE);
        assert!(entry.latency_ms >= 50.0 && entry.latency_ms < 400.0);
      }
    }

    // Expected ~310 confirm draws in the window (1/6 of 1860).
    assert!(confirm_hits > 100, "confirm hits: {}", confirm_hits);
    let error_share = confirm_errors as f64 / confirm_hits as f64;
    assert!(
      (0.6..0.8).contains(&error_share),
      "error share: {}",
      error_share
    );
  }

  #[test]
  fn endpoints_belong_to_their_service_and_latency_is_non_negative() {
    let mut rng = StdRng::seed_from_u64(3);
    let entries = generate_logs(t0(), 40, 5, &mut rng);

    for entry in &entries {
      assert!(entry.service.endpoints().contains(&entry.endpoint));
      assert!(entry.latency_ms >= 0.0);
      assert!(REGIONS.contains(&entry.region));
    }
  }

  #[test]
  fn two_quiet_minutes_produce_exactly_two_entries() {
    let mut rng = StdRng::seed_from_u64(11);
    let entries = generate_logs(t0(), 2, 1, &mut rng);

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].timestamp, t0());
    assert_eq!(entries[1].timestamp, t0() + Duration::minutes(1));
    for entry in &entries {
      assert!(entry.latency_ms >= 50.0 && entry.latency_ms < 400.0);
      assert!(matches!(entry.level, Level::Info | Level::Warn | Level::Error));
      assert_eq!(entry.message, SUCCESS_MESSAGE);
    }
  }

  #[test]
  fn trace_ids_use_the_synthetic_range() {
    let mut rng = StdRng::seed_from_u64(5);
    let entries = generate_logs(t0(), 5, 10, &mut rng);

    for entry in &entries {
      let n: i64 = entry
        .trace_id
        .strip_prefix("trace-")
        .unwrap()
        .parse()
        .unwrap();
      assert!((1..=10_000).contains(&n));
    }
  }

  #[test]
  fn same_seed_reproduces_the_batch() {
    let mut a = StdRng::seed_from_u64(99);
    let mut b = StdRng::seed_from_u64(99);

    let left = generate_logs(t0(), 10, 3, &mut a);
    let right = generate_logs(t0(), 10, 3, &mut b);

    assert_eq!(
      serde_json::to_value(&left).unwrap(),
      serde_json::to_value(&right).unwrap()
    );
  }

  #[test]
  fn entries_serialize_with_the_store_field_names() {
    let mut rng = StdRng::seed_from_u64(1);
    let entry = sample_entry(t0(), false, &mut rng);

    let value = serde_json::to_value(&entry).unwrap();
    assert!(value.get("@timestamp").is_some());
    assert!(value.get("timestamp").is_none());
    assert!(value["latency_ms"].is_f64());
  }
}
