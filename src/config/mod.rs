//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!     → CheckerConfig handed by value to Checker::new
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no package-level state
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{ApiConfig, AppConfig, CheckerConfig, LogFormat, LogLevel, LoggingConfig};
pub use validation::ValidationError;
