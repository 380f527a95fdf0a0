//! Worker pool.
//!
//! # Responsibilities
//! - Pull jobs from the shared queue, one at a time per worker
//! - Probe, persist to history, publish to the stream, log
//! - Exit once the queue is closed and drained
//!
//! # Design Decisions
//! - Fixed pool size; throughput is bounded by workers / check latency
//! - History is written before publishing, so a consumer that receives a
//!   result can already query it

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::lifecycle::ShutdownSignal;
use crate::observability::logging::{internal_log, ResultLogger};
use crate::probe::HttpProber;
use crate::scheduler::queue::JobReceiver;
use crate::store::ResultStore;

/// Everything a worker needs, shared across the pool.
#[derive(Debug, Clone)]
pub struct WorkerContext {
    pub jobs: JobReceiver,
    pub prober: Arc<HttpProber>,
    pub store: Arc<ResultStore>,
    pub logger: ResultLogger,
    pub shutdown: ShutdownSignal,
    pub internal_logs: bool,
}

/// Spawn `count` workers sharing `ctx`.
pub fn spawn_workers(count: usize, ctx: WorkerContext) -> Vec<JoinHandle<()>> {
    (0..count)
        .map(|id| {
            let ctx = ctx.clone();
            internal_log!(ctx.internal_logs, worker = id, "Started worker");
            tokio::spawn(run_worker(id, ctx))
        })
        .collect()
}

async fn run_worker(id: usize, ctx: WorkerContext) {
    while let Some(job) = ctx.jobs.next().await {
        internal_log!(
            ctx.internal_logs,
            worker = id,
            name = %job.endpoint.name,
            run_at = %job.run_at,
            "Worker picked job"
        );

        let result = ctx.prober.probe(&job.endpoint).await;
        ctx.store.append(result.clone());
        ctx.logger.log(&result);

        internal_log!(
            ctx.internal_logs,
            worker = id,
            name = %result.endpoint.name,
            success = result.success,
            latency_ms = result.latency.as_millis() as u64,
            "Worker finished job"
        );

        if !ctx.store.publish(result, &ctx.shutdown).await {
            tracing::debug!(worker = id, "Result not published: stream closed or stopping");
        }
    }

    internal_log!(ctx.internal_logs, worker = id, "Worker exited");
}
