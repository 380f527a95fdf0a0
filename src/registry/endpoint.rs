//! Endpoint definition and defaulting.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Interval applied when an endpoint is registered without one.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(30);

/// Status code expected when none is configured.
pub const DEFAULT_EXPECTED_STATUS: u16 = 200;

/// Method used when none is configured.
pub const DEFAULT_METHOD: &str = "GET";

/// A configured HTTP target checked on its own schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    /// Caller-supplied identity. Not checked for uniqueness.
    pub id: String,
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub method: String,
    /// Time between checks.
    #[serde(rename = "interval_ms", with = "duration_millis", default)]
    pub interval: Duration,
    #[serde(default)]
    pub expected_status: u16,
}

impl Endpoint {
    /// Create an endpoint with every optional field left unset.
    pub fn new(id: impl Into<String>, name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            url: url.into(),
            method: String::new(),
            interval: Duration::ZERO,
            expected_status: 0,
        }
    }

    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_expected_status(mut self, status: u16) -> Self {
        self.expected_status = status;
        self
    }

    /// Fill unset fields: GET, 30s, 200.
    pub fn with_defaults(mut self) -> Self {
        if self.method.is_empty() {
            self.method = DEFAULT_METHOD.to_string();
        }
        if self.interval.is_zero() {
            self.interval = DEFAULT_INTERVAL;
        }
        if self.expected_status == 0 {
            self.expected_status = DEFAULT_EXPECTED_STATUS;
        }
        self
    }
}

mod duration_millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
