//! HTTP prober.
//!
//! # Responsibilities
//! - Build a bodyless request from the endpoint's method and URL
//! - Execute it on the shared client (bounded by the client timeout)
//! - Turn every outcome, including failures, into a [`CheckResult`]

use std::error::Error as StdError;
use std::time::{Duration, Instant};

use chrono::Utc;
use reqwest::{Client, Method};

use crate::probe::result::CheckResult;
use crate::registry::Endpoint;

/// Executes single HTTP checks on a shared connection pool.
#[derive(Debug, Clone)]
pub struct HttpProber {
    client: Client,
}

impl HttpProber {
    /// Build a prober whose requests time out after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("uptime-core/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client })
    }

    /// Run one check. Never fails: errors are recorded in the result.
    pub async fn probe(&self, endpoint: &Endpoint) -> CheckResult {
        let timestamp = Utc::now();
        let start = Instant::now();

        let request = Method::from_bytes(endpoint.method.as_bytes())
            .map_err(|e| e.to_string())
            .and_then(|method| {
                self.client
                    .request(method, &endpoint.url)
                    .build()
                    .map_err(|e| error_chain(&e))
            });
        let request = match request {
            Ok(request) => request,
            Err(e) => {
                return CheckResult::failed(
                    endpoint.clone(),
                    timestamp,
                    start.elapsed(),
                    format!("error creating request: {e}"),
                );
            }
        };

        match self.client.execute(request).await {
            // Body is dropped unread.
            Ok(response) => CheckResult::completed(
                endpoint.clone(),
                timestamp,
                response.status().as_u16(),
                start.elapsed(),
            ),
            Err(e) => CheckResult::failed(endpoint.clone(), timestamp, start.elapsed(), error_chain(&e)),
        }
    }
}

/// Render an error with its source chain, e.g. "error sending request: connection refused".
fn error_chain(error: &dyn StdError) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
