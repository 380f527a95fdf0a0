//! Result storage subsystem.
//!
//! # Data Flow
//! ```text
//! Worker produces CheckResult
//!     → results.rs append (history.rs: push, evict oldest beyond retention)
//!     → results.rs publish (stream.rs: bounded channel)
//!     → external consumers drain ResultStream
//! ```
//!
//! # Design Decisions
//! - History and the stream publisher sit behind one mutex
//! - Insertion order is completion order, not schedule order
//! - Publishing blocks on a full stream; no drop policy
//! - The stream closes after every worker has exited

pub mod history;
pub mod results;
pub mod stream;

pub use history::LogHistory;
pub use results::ResultStore;
pub use stream::ResultStream;
