//! Configuration schema definitions.
//!
//! This module defines the configuration structures for the checker core and
//! the host process that wraps it. All types derive Serde traits for
//! deserialization from config files.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration for the host process.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Checker engine settings.
    pub checker: CheckerConfig,

    /// HTTP API settings.
    pub api: ApiConfig,

    /// Log sink settings.
    pub logging: LoggingConfig,

    /// Optional JSON file of endpoints registered at startup.
    pub endpoints_file: Option<String>,
}

/// Verbosity of per-result log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// No per-result logs.
    None,
    /// Failed checks only.
    Error,
    /// Successes and failures.
    #[default]
    Info,
    /// Every check with full detail.
    Debug,
}

/// Checker engine configuration.
///
/// Immutable once handed to [`crate::Checker::new`].
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CheckerConfig {
    /// Number of concurrent workers executing checks.
    pub workers: usize,

    /// Shared HTTP client timeout in milliseconds.
    pub timeout_ms: u64,

    /// Per-result log verbosity.
    pub log_level: LogLevel,

    /// Capacity of the live result stream.
    pub result_buffer: usize,

    /// Maximum results kept in memory per endpoint.
    pub log_retention: usize,

    /// Capacity of the pending job queue.
    pub job_queue_capacity: usize,

    /// Emit internal lifecycle log lines.
    pub internal_logs: bool,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            workers: 50,
            timeout_ms: 10_000,
            log_level: LogLevel::Info,
            result_buffer: 1000,
            log_retention: 100,
            job_queue_capacity: 1000,
            internal_logs: false,
        }
    }
}

impl CheckerConfig {
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = timeout.as_millis() as u64;
        self
    }

    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }

    pub fn with_result_buffer(mut self, size: usize) -> Self {
        self.result_buffer = size;
        self
    }

    pub fn with_log_retention(mut self, retention: usize) -> Self {
        self.log_retention = retention;
        self
    }

    pub fn with_job_queue_capacity(mut self, capacity: usize) -> Self {
        self.job_queue_capacity = capacity;
        self
    }

    pub fn with_internal_logs(mut self, enabled: bool) -> Self {
        self.internal_logs = enabled;
        self
    }

    /// HTTP client timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// HTTP API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Serve the HTTP API.
    pub enabled: bool,

    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Output format of log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

/// Log sink configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Line format for every sink.
    pub format: LogFormat,

    /// Write to stdout.
    pub console: bool,

    /// Files appended to, in addition to the console.
    pub files: Vec<String>,

    /// Default filter directive when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Compact,
            console: true,
            files: Vec::new(),
            filter: "uptime_core=info,uptime_checker=info,tower_http=info".to_string(),
        }
    }
}
