//! Crate-level error type.
//!
//! Only configuration-class failures are errors. Failed checks are data
//! (`CheckResult::success == false`) and never surface here.

use crate::config::{ConfigError, ValidationError};
use crate::registry::LoadError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

impl From<Vec<ValidationError>> for Error {
    fn from(errors: Vec<ValidationError>) -> Self {
        Error::Config(ConfigError::Validation(errors))
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
