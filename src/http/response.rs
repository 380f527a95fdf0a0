//! Response bodies and error mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::probe::CheckResult;
use crate::registry::Endpoint;

#[derive(Debug, Serialize)]
pub struct SiteCreated {
    pub message: &'static str,
    pub site: Endpoint,
}

#[derive(Debug, Serialize)]
pub struct SitesCreated {
    pub message: &'static str,
    pub count: usize,
    pub sites: Vec<Endpoint>,
}

/// One history entry as shown to API clients.
#[derive(Debug, Serialize)]
pub struct LogResponse {
    pub timestamp: DateTime<Utc>,
    pub status_code: u16,
    pub latency_ms: u64,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<CheckResult> for LogResponse {
    fn from(result: CheckResult) -> Self {
        Self {
            timestamp: result.timestamp,
            status_code: result.status_code,
            latency_ms: result.latency.as_millis() as u64,
            status: if result.success { "UP" } else { "DOWN" },
            error: result.error,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SiteLogResponse {
    /// Endpoint as of the most recent result.
    pub site: Endpoint,
    pub logs: Vec<LogResponse>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Errors returned by API handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        };
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}
