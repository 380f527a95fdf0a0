//! Bounded job queue shared by every ticker and worker.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::{mpsc, Mutex};

use crate::lifecycle::ShutdownSignal;
use crate::registry::Endpoint;

/// One scheduled check of one endpoint.
#[derive(Debug, Clone)]
pub struct Job {
    pub endpoint: Endpoint,
    /// When the tick that produced this job fired.
    pub run_at: DateTime<Utc>,
}

impl Job {
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            run_at: Utc::now(),
        }
    }
}

/// Create a FIFO queue holding at most `capacity` pending jobs.
///
/// The queue closes once every [`JobSender`] is dropped; receivers then
/// drain what is left and observe the end.
pub fn job_queue(capacity: usize) -> (JobSender, JobReceiver) {
    let (tx, rx) = mpsc::channel(capacity);
    (
        JobSender { tx },
        JobReceiver {
            rx: Arc::new(Mutex::new(rx)),
        },
    )
}

/// Producer half, cloned into every ticker.
#[derive(Debug, Clone)]
pub struct JobSender {
    tx: mpsc::Sender<Job>,
}

impl JobSender {
    /// Enqueue, waiting for capacity.
    ///
    /// Abandons the job if shutdown is raised while the queue is full.
    /// Returns whether the job was accepted.
    pub async fn submit(&self, job: Job, shutdown: &ShutdownSignal) -> bool {
        tokio::select! {
            biased;
            sent = self.tx.send(job) => sent.is_ok(),
            _ = shutdown.wait() => false,
        }
    }
}

/// Consumer half, shared by the worker pool.
#[derive(Debug, Clone)]
pub struct JobReceiver {
    rx: Arc<Mutex<mpsc::Receiver<Job>>>,
}

impl JobReceiver {
    /// Take the next job. `None` once the queue is closed and empty.
    pub async fn next(&self) -> Option<Job> {
        self.rx.lock().await.recv().await
    }
}
