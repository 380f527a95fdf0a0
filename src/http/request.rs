//! Request bodies accepted by the API.
//!
//! # Responsibilities
//! - Deserialize site registration bodies
//! - Enforce required fields
//! - Assign a fresh endpoint ID to every registration

use std::time::Duration;

use serde::Deserialize;

use crate::registry::endpoint::DEFAULT_METHOD;
use crate::registry::Endpoint;

/// Body of `POST /sites` and each element of `POST /sites/batch`.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteRequest {
    pub url: String,
    pub name: String,
    #[serde(default)]
    pub expected_status: u16,
    /// Seconds between checks; 0 means the default.
    #[serde(default)]
    pub check_interval: u64,
}

impl SiteRequest {
    /// Name of the first missing required field.
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.url.trim().is_empty() {
            Some("url")
        } else if self.name.trim().is_empty() {
            Some("name")
        } else {
            None
        }
    }

    pub fn into_endpoint(self) -> Endpoint {
        Endpoint::new(uuid::Uuid::new_v4().to_string(), self.name, self.url)
            .with_method(DEFAULT_METHOD)
            .with_interval(Duration::from_secs(self.check_interval))
            .with_expected_status(self.expected_status)
    }
}

/// Query string of `GET /sites/{id}/logs`.
#[derive(Debug, Clone, Deserialize)]
pub struct LogsQuery {
    pub limit: Option<usize>,
}
