//! Shared result store: bounded history plus the live stream.

use std::sync::{Mutex, MutexGuard, PoisonError};

use tokio::sync::mpsc;

use crate::lifecycle::ShutdownSignal;
use crate::probe::CheckResult;
use crate::store::history::LogHistory;
use crate::store::stream::ResultStream;

#[derive(Debug)]
struct StoreInner {
    history: LogHistory,
    /// Dropped on close so readers observe end-of-stream.
    publisher: Option<mpsc::Sender<CheckResult>>,
}

/// Owner of every endpoint's log history and of the result stream.
#[derive(Debug)]
pub struct ResultStore {
    inner: Mutex<StoreInner>,
    stream: ResultStream,
}

impl ResultStore {
    pub fn new(retention: usize, stream_capacity: usize) -> Self {
        let (publisher, stream) = ResultStream::channel(stream_capacity);
        Self {
            inner: Mutex::new(StoreInner {
                history: LogHistory::new(retention),
                publisher: Some(publisher),
            }),
            stream,
        }
    }

    /// Append to the endpoint's history and truncate, in one lock acquisition.
    pub fn append(&self, result: CheckResult) {
        self.lock().history.append(result);
    }

    /// Up to `limit` most recent results for `id`, oldest first.
    pub fn query(&self, id: &str, limit: usize) -> Vec<CheckResult> {
        self.lock().history.query(id, limit)
    }

    /// Handle on the live stream.
    pub fn stream(&self) -> ResultStream {
        self.stream.clone()
    }

    /// Publish to the stream, waiting for capacity.
    ///
    /// Gives up only if the stream is closed or shutdown is raised while
    /// the stream is full. Returns whether the result was delivered.
    pub async fn publish(&self, result: CheckResult, shutdown: &ShutdownSignal) -> bool {
        let publisher = self.lock().publisher.clone();
        let Some(publisher) = publisher else {
            return false;
        };

        tokio::select! {
            biased;
            sent = publisher.send(result) => sent.is_ok(),
            _ = shutdown.wait() => false,
        }
    }

    /// Close the stream. Buffered results remain readable.
    pub fn close_stream(&self) {
        self.lock().publisher.take();
    }

    fn lock(&self) -> MutexGuard<'_, StoreInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
