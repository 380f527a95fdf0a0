//! Embeddable HTTP uptime monitoring core.
//!
//! Probes HTTP endpoints on independent schedules, keeps a bounded recent
//! history per endpoint, and streams every result to consumers as it is
//! produced.
//!
//! # Architecture Overview
//!
//! ```text
//!   register_endpoint ──▶ registry ──▶ scheduler::ticker (one per endpoint)
//!                                              │ tick
//!                                              ▼
//!                                     scheduler::queue (bounded FIFO)
//!                                              │
//!                                              ▼
//!                                     scheduler::workers (fixed pool)
//!                                              │ probe::HttpProber
//!                                              ▼
//!                          store::ResultStore ─┬─ history (query_logs)
//!                                              └─ stream  (result_stream)
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use uptime_core::{Checker, CheckerConfig, Endpoint};
//!
//! # async fn run() -> Result<(), uptime_core::Error> {
//! let checker = Checker::new(CheckerConfig::default().with_workers(4))?;
//! checker.start();
//! checker.register_endpoint(
//!     Endpoint::new("home", "Homepage", "https://example.com")
//!         .with_interval(Duration::from_secs(10)),
//! );
//!
//! let stream = checker.result_stream();
//! if let Some(result) = stream.recv().await {
//!     println!("{} -> {}", result.endpoint.name, result.status_code);
//! }
//! checker.stop().await;
//! # Ok(())
//! # }
//! ```

// Core engine
pub mod checker;
pub mod probe;
pub mod registry;
pub mod scheduler;
pub mod store;

// Cross-cutting concerns
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod observability;

// Host adapter
pub mod http;

pub use checker::Checker;
pub use config::{CheckerConfig, LogLevel};
pub use error::Error;
pub use lifecycle::LifecycleState;
pub use probe::CheckResult;
pub use registry::Endpoint;
pub use store::ResultStream;
