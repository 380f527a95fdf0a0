//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! start() (crate::checker):
//!     Created → spawn worker pool → spawn tickers for registered endpoints → Running
//!
//! stop() (crate::checker):
//!     Running → shutdown.rs trigger → tickers exit, job queue closes
//!     → workers drain and exit → stream closed → Stopped
//! ```
//!
//! # Design Decisions
//! - One shared, level-triggered stop signal for every task
//! - Ordered shutdown: tickers first, then workers, then the stream
//! - state.rs refuses illegal transitions instead of panicking

pub mod shutdown;
pub mod state;

pub use shutdown::{Shutdown, ShutdownSignal};
pub use state::LifecycleState;
