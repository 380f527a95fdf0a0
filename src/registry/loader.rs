//! Bulk endpoint loading from JSON files.
//!
//! The file is a JSON array of records. Intervals are whole seconds on disk
//! and become a [`Duration`] on load.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::registry::endpoint::{Endpoint, DEFAULT_EXPECTED_STATUS};

/// Error type for endpoint file loading.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read endpoints file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed endpoints JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// On-disk shape of one endpoint.
#[derive(Debug, Deserialize)]
struct EndpointRecord {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    name: String,
    url: String,
    #[serde(default)]
    method: String,
    #[serde(default, alias = "frequency")]
    interval: u64,
    #[serde(default)]
    expected_status: u16,
}

impl From<EndpointRecord> for Endpoint {
    fn from(record: EndpointRecord) -> Self {
        let id = record
            .id
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
        let expected_status = match record.expected_status {
            0 => DEFAULT_EXPECTED_STATUS,
            status => status,
        };

        Endpoint {
            id,
            name: record.name,
            url: record.url,
            method: record.method,
            interval: Duration::from_secs(record.interval),
            expected_status,
        }
    }
}

/// Parse a JSON array of endpoint records.
pub fn parse_endpoints(json: &str) -> Result<Vec<Endpoint>, LoadError> {
    let records: Vec<EndpointRecord> = serde_json::from_str(json)?;
    Ok(records.into_iter().map(Endpoint::from).collect())
}

/// Read and parse an endpoints file. Nothing is returned on any error.
pub fn read_endpoints_file(path: &Path) -> Result<Vec<Endpoint>, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_endpoints(&content)
}
