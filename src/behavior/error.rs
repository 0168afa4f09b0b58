//! Invocation errors for action behaviors.

use std::fmt;
use thiserror::Error;

/// Boxed error type user callbacks report failures with.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Outcome of running a single action.
pub type ActionResult = Result<(), ActionError>;

/// Lifecycle event an action is bound to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Entry,
    Exit,
    Deactivate,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Entry => f.write_str("entry"),
            Self::Exit => f.write_str("exit"),
            Self::Deactivate => f.write_str("deactivate"),
        }
    }
}

/// Errors that can occur while running actions.
#[derive(Debug, Error)]
pub enum ActionError {
    /// A blocking call reached an action that can only be awaited.
    /// Nothing ran; the configuration is untouched.
    #[error(
        "Cannot execute asynchronous {kind} action '{action}' for '{state}' state. \
         Use the asynchronous path (execute_async) instead"
    )]
    InvalidInvocation {
        kind: ActionKind,
        state: String,
        action: String,
    },

    /// Failure reported by a user callback. Behaviors return it exactly as
    /// the callback produced it.
    #[error("Action callback failed: {0}")]
    Callback(#[source] BoxError),
}

impl ActionError {
    /// Wrap an arbitrary error for returning from a callback.
    pub fn callback<E>(error: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self::Callback(error.into())
    }

    pub fn is_invalid_invocation(&self) -> bool {
        matches!(self, Self::InvalidInvocation { .. })
    }
}
