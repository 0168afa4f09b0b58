//! Build errors for action behaviors and per-state action registries.

use crate::behavior::ActionKind;
use crate::core::Timing;
use thiserror::Error;

/// Errors raised while configuring action behaviors.
///
/// Always reported at construction time, never on first use.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    #[error("{kind} action description not specified. Pass a MethodDescriptor when building the behavior")]
    MissingDescriptor { kind: ActionKind },

    #[error("{kind} action '{action}' is {found} but was bound as a {expected} behavior")]
    TimingMismatch {
        kind: ActionKind,
        action: String,
        expected: Timing,
        found: Timing,
    },

    #[error("{kind} action '{action}' belongs to state '{found}', expected '{expected}'")]
    StateMismatch {
        kind: ActionKind,
        action: String,
        expected: String,
        found: String,
    },
}
