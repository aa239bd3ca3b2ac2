use thiserror::Error;

use crate::core::LifecycleState;

/// Errors surfaced by the scene lifecycle
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SceneError {
    /// The mount container is absent; construction cannot proceed.
    #[error("mount container '{id}' not found")]
    MissingContainer { id: String },

    /// An operation was attempted from a state that does not allow it.
    #[error("cannot {operation} while {state:?}")]
    InvalidState {
        operation: &'static str,
        state: LifecycleState,
    },
}

pub type Result<T> = std::result::Result<T, SceneError>;
