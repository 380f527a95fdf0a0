//! In-memory endpoint registry.

use std::sync::{Mutex, PoisonError};

use crate::registry::endpoint::Endpoint;

/// Source of truth for what is being monitored.
///
/// Duplicate IDs are kept as separate entries; deduplication is the
/// caller's responsibility.
#[derive(Debug, Default)]
pub struct EndpointRegistry {
    endpoints: Mutex<Vec<Endpoint>>,
}

impl EndpointRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply defaults and append. Returns the stored endpoint.
    pub fn register(&self, endpoint: Endpoint) -> Endpoint {
        let endpoint = endpoint.with_defaults();
        self.lock().push(endpoint.clone());
        endpoint
    }

    /// Apply defaults to every element and append them under one lock.
    pub fn register_batch(&self, endpoints: Vec<Endpoint>) -> Vec<Endpoint> {
        let endpoints: Vec<Endpoint> = endpoints.into_iter().map(Endpoint::with_defaults).collect();
        self.lock().extend(endpoints.iter().cloned());
        endpoints
    }

    /// Snapshot of every registered endpoint.
    pub fn list(&self) -> Vec<Endpoint> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Endpoint>> {
        self.endpoints.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
