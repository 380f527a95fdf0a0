//! Check outcome record.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::registry::Endpoint;

/// Immutable outcome of one check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckResult {
    /// Snapshot of the endpoint the check ran against.
    pub endpoint: Endpoint,

    /// When the check started.
    pub timestamp: DateTime<Utc>,

    /// Observed status code, 0 if no response arrived.
    pub status_code: u16,

    /// Time from request start to response headers (or failure).
    #[serde(rename = "latency_ms", with = "latency_millis")]
    pub latency: Duration,

    /// `status_code == endpoint.expected_status`.
    pub success: bool,

    /// Request-level failure description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CheckResult {
    /// A response was received.
    pub fn completed(
        endpoint: Endpoint,
        timestamp: DateTime<Utc>,
        status_code: u16,
        latency: Duration,
    ) -> Self {
        let success = status_code == endpoint.expected_status;
        Self {
            endpoint,
            timestamp,
            status_code,
            latency,
            success,
            error: None,
        }
    }

    /// The request never completed.
    pub fn failed(
        endpoint: Endpoint,
        timestamp: DateTime<Utc>,
        latency: Duration,
        error: impl Into<String>,
    ) -> Self {
        Self {
            endpoint,
            timestamp,
            status_code: 0,
            latency,
            success: false,
            error: Some(error.into()),
        }
    }

    pub fn endpoint_id(&self) -> &str {
        &self.endpoint.id
    }
}

mod latency_millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
