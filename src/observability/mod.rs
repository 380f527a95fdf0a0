//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Workers produce:
//!     → logging.rs ResultLogger (one line per check, by LogLevel)
//! Checker, tickers and workers produce:
//!     → internal_log! lines (target uptime_core::internal, opt-in)
//!
//! Host process:
//!     → logging.rs init (console / files, compact / JSON)
//! ```
//!
//! # Design Decisions
//! - The core only emits tracing events; the host picks the sinks
//! - Structured fields (name, status_code, latency_ms, error) on every line

pub mod logging;
