//! Checker lifecycle state machine.
//!
//! # States
//! - Created: registry populated, nothing running
//! - Running: tickers and workers active
//! - Stopping: stop signal raised, drain in progress
//! - Stopped: terminal, every task exited and the stream closed
//!
//! # State Transitions
//! ```text
//! Created → Running: start()
//! Running → Stopping: stop() raises the shared signal
//! Stopping → Stopped: every task joined, stream closed
//! Created → Stopped: stop() before start() only closes the stream
//! ```
//!
//! # Design Decisions
//! - Single use: nothing leaves Stopped
//! - Illegal transitions are refused, never panics

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    Created,
    Running,
    Stopping,
    Stopped,
}

impl LifecycleState {
    /// Whether `self → next` is a legal transition.
    pub fn can_transition_to(self, next: LifecycleState) -> bool {
        use LifecycleState::*;
        matches!(
            (self, next),
            (Created, Running) | (Created, Stopped) | (Running, Stopping) | (Stopping, Stopped)
        )
    }

    pub fn is_running(self) -> bool {
        self == LifecycleState::Running
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LifecycleState::Created => write!(f, "created"),
            LifecycleState::Running => write!(f, "running"),
            LifecycleState::Stopping => write!(f, "stopping"),
            LifecycleState::Stopped => write!(f, "stopped"),
        }
    }
}
