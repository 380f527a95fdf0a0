//! Probing subsystem.
//!
//! # Data Flow
//! ```text
//! Job (endpoint snapshot)
//!     → http.rs (build request, execute on shared client)
//!     → result.rs (CheckResult: status, latency, success, error)
//! ```
//!
//! # Design Decisions
//! - Per-check failures are data, never errors: construction and transport
//!   problems produce `success = false`, `status_code = 0`
//! - No retries; a failed check waits for the endpoint's next tick
//! - Response bodies are never read

pub mod http;
pub mod result;

pub use http::HttpProber;
pub use result::CheckResult;
