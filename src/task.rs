//! A task state machine where illegal states cannot be built.
//!
//! The timestamp lives inside the `Running` variant, so "stopped but with a
//! start time" is not a value this type can hold — the compiler enforces
//! what a boolean-plus-field struct would have to assert at runtime.

use std::time::Instant;

use thiserror::Error;

use crate::maybe::Maybe;
use crate::tagged_union;

tagged_union! {
    #[derive(Debug, Clone, PartialEq)]
    pub enum TaskState {
        Stopped,
        Running { started_at: Instant },
    }
}

/// A transition requested from the wrong state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("task is already running")]
    AlreadyRunning,
    #[error("task is already stopped")]
    AlreadyStopped,
}

impl TaskState {
    /// Stopped → Running, recording `now`. The only transition out of
    /// `Stopped`.
    pub fn start(self, now: Instant) -> Result<TaskState, TransitionError> {
        match self {
            TaskState::Stopped => Ok(TaskState::Running { started_at: now }),
            TaskState::Running { .. } => Err(TransitionError::AlreadyRunning),
        }
    }

    /// Running → Stopped, dropping the timestamp with the variant.
    pub fn stop(self) -> Result<TaskState, TransitionError> {
        match self {
            TaskState::Running { .. } => Ok(TaskState::Stopped),
            TaskState::Stopped => Err(TransitionError::AlreadyStopped),
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, TaskState::Running { .. })
    }

    /// The start time while running; `Absent` otherwise. There is no way to
    /// read a timestamp out of a stopped task.
    pub fn started_at(&self) -> Maybe<Instant> {
        match self {
            TaskState::Running { started_at } => Maybe::Present(*started_at),
            TaskState::Stopped => Maybe::Absent,
        }
    }
}
