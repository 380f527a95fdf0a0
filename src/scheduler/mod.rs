//! Scheduling and execution subsystem.
//!
//! # Data Flow
//! ```text
//! ticker.rs (one task per endpoint)
//!     → tick → Job { endpoint, run_at }
//!     → queue.rs (bounded FIFO, shared)
//!     → workers.rs (fixed pool)
//!     → probe → ResultStore (history + stream)
//! ```
//!
//! # Design Decisions
//! - Producers block on a full queue unless stopping
//! - Any worker may take any job; completion order is not tick order
//! - The queue closes when the last sender drops; workers drain then exit

pub mod queue;
pub mod ticker;
pub mod workers;

pub use queue::{job_queue, Job, JobReceiver, JobSender};
pub use ticker::spawn_ticker;
pub use workers::{spawn_workers, WorkerContext};
