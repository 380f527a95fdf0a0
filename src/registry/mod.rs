//! Endpoint registry subsystem.
//!
//! # Data Flow
//! ```text
//! register / register_batch / JSON file (loader.rs)
//!     → endpoint.rs (apply defaults: GET, 30s, 200)
//!     → endpoints.rs (append under mutex)
//!     → Checker hands new endpoints to the scheduler when running
//! ```
//!
//! # Design Decisions
//! - No uniqueness check on endpoint IDs
//! - Readers always receive snapshot copies

pub mod endpoint;
pub mod endpoints;
pub mod loader;

pub use endpoint::Endpoint;
pub use endpoints::EndpointRegistry;
pub use loader::{parse_endpoints, read_endpoints_file, LoadError};
