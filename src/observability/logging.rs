//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber for a host process
//! - Emit one log line per check result at the configured verbosity
//! - Gate internal lifecycle lines behind a toggle
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - JSON format for production, compact format for development
//! - `RUST_LOG` overrides the configured filter

use std::fs::{File, OpenOptions};
use std::sync::Mutex;

use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{Layer, Registry};

use crate::config::{LogFormat, LogLevel, LoggingConfig};
use crate::probe::CheckResult;

/// Target of internal lifecycle lines.
pub const INTERNAL_TARGET: &str = "uptime_core::internal";

/// Emit an internal lifecycle line when `$enabled` is true.
macro_rules! internal_log {
    ($enabled:expr, $($arg:tt)+) => {
        if $enabled {
            tracing::info!(target: $crate::observability::logging::INTERNAL_TARGET, $($arg)+);
        }
    };
}
pub(crate) use internal_log;

/// Error type for subscriber initialization.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("failed to open log file {path}: {source}")]
    File {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to install subscriber: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Install the global subscriber described by `config`.
///
/// With neither console nor files configured nothing is installed.
pub fn init(config: &LoggingConfig) -> Result<(), LoggingError> {
    let mut layers: Vec<BoxedLayer> = Vec::new();

    if config.console {
        layers.push(match config.format {
            LogFormat::Json => tracing_subscriber::fmt::layer()
                .json()
                .with_filter(env_filter(&config.filter))
                .boxed(),
            LogFormat::Compact => tracing_subscriber::fmt::layer()
                .compact()
                .with_filter(env_filter(&config.filter))
                .boxed(),
        });
    }

    for path in &config.files {
        let file = open_log_file(path)?;
        let writer = Mutex::new(file);
        layers.push(match config.format {
            LogFormat::Json => tracing_subscriber::fmt::layer()
                .json()
                .with_writer(writer)
                .with_filter(env_filter(&config.filter))
                .boxed(),
            LogFormat::Compact => tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(false)
                .with_writer(writer)
                .with_filter(env_filter(&config.filter))
                .boxed(),
        });
    }

    if layers.is_empty() {
        return Ok(());
    }

    tracing_subscriber::registry().with(layers).try_init()?;
    Ok(())
}

fn env_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

fn open_log_file(path: &str) -> Result<File, LoggingError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LoggingError::File {
            path: path.to_string(),
            source,
        })
}

/// Logs check results at a fixed verbosity.
#[derive(Debug, Clone, Copy)]
pub struct ResultLogger {
    level: LogLevel,
}

impl ResultLogger {
    pub fn new(level: LogLevel) -> Self {
        Self { level }
    }

    pub fn log(&self, result: &CheckResult) {
        let name = result.endpoint.name.as_str();
        let error = result.error.as_deref().unwrap_or_default();
        match self.level {
            LogLevel::None => {}
            LogLevel::Error => {
                if !result.success {
                    tracing::error!(name, id = %result.endpoint.id, error, "endpoint down");
                }
            }
            LogLevel::Info => {
                if result.success {
                    tracing::info!(name, status_code = result.status_code, "endpoint up");
                } else {
                    tracing::warn!(
                        name,
                        status_code = result.status_code,
                        error,
                        "endpoint down"
                    );
                }
            }
            LogLevel::Debug => {
                tracing::debug!(
                    name,
                    id = %result.endpoint.id,
                    status_code = result.status_code,
                    latency_ms = result.latency.as_millis() as u64,
                    success = result.success,
                    error,
                    "endpoint check"
                );
            }
        }
    }
}
