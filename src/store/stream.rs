//! Live result stream.

use std::sync::Arc;

use tokio::sync::{mpsc, Mutex};

use crate::probe::CheckResult;

/// Read handle on the live result stream.
///
/// Clones share one underlying channel: concurrent readers compete, and
/// each result reaches at most one of them. `recv` returns `None` once the
/// checker has stopped and buffered results are drained.
#[derive(Debug, Clone)]
pub struct ResultStream {
    rx: Arc<Mutex<mpsc::Receiver<CheckResult>>>,
}

impl ResultStream {
    pub(crate) fn channel(capacity: usize) -> (mpsc::Sender<CheckResult>, Self) {
        let (tx, rx) = mpsc::channel(capacity);
        (
            tx,
            Self {
                rx: Arc::new(Mutex::new(rx)),
            },
        )
    }

    /// Wait for the next result.
    pub async fn recv(&self) -> Option<CheckResult> {
        self.rx.lock().await.recv().await
    }

    /// Take a buffered result without waiting.
    ///
    /// Returns `None` when nothing is buffered, the stream is closed, or
    /// another reader currently holds the stream.
    pub fn try_recv(&self) -> Option<CheckResult> {
        self.rx.try_lock().ok()?.try_recv().ok()
    }
}
