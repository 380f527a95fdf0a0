//! Per-endpoint ticker.
//!
//! # Responsibilities
//! - Fire once per endpoint interval, starting one interval after spawn
//! - Turn each tick into a [`Job`] on the shared queue
//! - Exit on the shared stop signal, including while blocked on a full queue
//!
//! # Design Decisions
//! - One task per endpoint: independent cadence, no shared timer
//! - No catch-up: a tick delayed by a full queue shifts later ticks
//! - Periods longer than [`MAX_PERIOD`] are capped so deadlines stay representable

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::lifecycle::ShutdownSignal;
use crate::observability::logging::internal_log;
use crate::registry::Endpoint;
use crate::scheduler::queue::{Job, JobSender};

/// Longest period a ticker will wait between jobs (one year).
pub const MAX_PERIOD: Duration = Duration::from_secs(365 * 24 * 60 * 60);

/// Spawn the ticker task for one endpoint.
pub fn spawn_ticker(
    endpoint: Endpoint,
    jobs: JobSender,
    shutdown: ShutdownSignal,
    internal_logs: bool,
) -> JoinHandle<()> {
    let endpoint = endpoint.with_defaults();
    internal_log!(
        internal_logs,
        name = %endpoint.name,
        url = %endpoint.url,
        interval_ms = endpoint.interval.as_millis() as u64,
        "Scheduling endpoint"
    );

    let period = endpoint.interval.min(MAX_PERIOD);
    if period < endpoint.interval {
        tracing::warn!(
            name = %endpoint.name,
            interval_secs = endpoint.interval.as_secs(),
            "interval too long, checking once a year"
        );
    }

    tokio::spawn(async move {
        let mut ticker = time::interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;
                _ = shutdown.wait() => break,
                _ = ticker.tick() => {
                    let job = Job::new(endpoint.clone());
                    internal_log!(internal_logs, name = %endpoint.name, run_at = %job.run_at, "Job scheduled");
                    if !jobs.submit(job, &shutdown).await {
                        break;
                    }
                }
            }
        }

        internal_log!(internal_logs, name = %endpoint.name, "Ticker stopped");
    })
}
