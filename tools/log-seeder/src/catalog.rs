//! Fixed catalog of services, endpoints, levels, regions, and messages.

use serde::Serialize;

/// Services emitting synthetic traffic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Service {
  Checkout,
  Payments,
  Inventory,
}

impl Service {
  pub const ALL: [Service; 3] = [Service::Checkout, Service::Payments, Service::Inventory];

  /// Endpoints belonging to this service.
  pub fn endpoints(self) -> &'static [&'static str] {
    match self {
      Service::Checkout => &["/checkout", "/checkout/confirm"],
      Service::Payments => &["/payments/charge", "/payments/refund"],
      Service::Inventory => &["/inventory/reserve", "/inventory/release"],
    }
  }
}

/// Log severity, stored uppercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
  Info,
  Warn,
  Error,
}

pub const REGIONS: [&str; 2] = ["eu-west-1", "us-east-1"];

pub const TIMEOUT_MESSAGE: &str = "Timeout while calling payments-v2 from checkout";
pub const SUCCESS_MESSAGE: &str = "Request completed successfully";
