//! HTTP API subsystem (host side).
//!
//! The checker core exposes no network surface of its own; this adapter
//! lets a host process serve one.
//!
//! # Data Flow
//! ```text
//! HTTP request
//!     → server.rs (Axum router, tracing layer)
//!     → request.rs (parse body, required fields, new endpoint ID)
//!     → Checker operation
//!     → response.rs (shape JSON, map errors to status codes)
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use server::{build_router, ApiServer};
