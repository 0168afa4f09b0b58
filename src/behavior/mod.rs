//! Action behaviors bound to state lifecycle events.
//!
//! Every behavior exposes the same pair of operations:
//!
//! - `execute` runs the action to completion on the calling thread, or fails
//!   with [`ActionError::InvalidInvocation`] when the action can only be awaited
//! - `execute_async` returns an [`ActionFuture`]. Blocking actions have already
//!   run by the time it returns and hand back a resolved future. Async actions
//!   hand back the callback's own future.
//!
//! Behaviors are immutable once built and hold no per-call state, so one
//! configuration can be shared across any number of machines.

mod deactivate;
mod entry;
mod error;
mod exit;

pub use deactivate::DeactivateActionBehavior;
pub use entry::{AsyncEntryAction, EntryActionBehavior, SyncEntryAction};
pub use error::{ActionError, ActionKind, ActionResult, BoxError};
pub use exit::ExitActionBehavior;

use crate::builder::BuildError;
use crate::core::{MethodDescriptor, State, Timing};
use futures_util::future::{ready, BoxFuture, Either, Ready};
use std::sync::Arc;
use tracing::{debug, trace};

/// Future returned by `execute_async`.
///
/// The left side is the already-completed result of a blocking action; the
/// right side is an async callback's future, untouched.
pub type ActionFuture = Either<Ready<ActionResult>, BoxFuture<'static, ActionResult>>;

/// Blocking callback for exit and deactivate actions.
pub type SyncAction = Arc<dyn Fn() -> ActionResult + Send + Sync>;

/// Async callback for exit and deactivate actions.
pub type AsyncAction = Arc<dyn Fn() -> BoxFuture<'static, ActionResult> + Send + Sync>;

/// Validate a descriptor against the variant being built.
pub(crate) fn checked_descriptor(
    kind: ActionKind,
    description: Option<MethodDescriptor>,
    expected: Timing,
) -> Result<MethodDescriptor, BuildError> {
    let description = description.ok_or(BuildError::MissingDescriptor { kind })?;

    if description.timing() != expected {
        return Err(BuildError::TimingMismatch {
            kind,
            action: description.name().to_string(),
            expected,
            found: description.timing(),
        });
    }

    Ok(description)
}

pub(crate) fn invalid_invocation<S: State>(
    kind: ActionKind,
    state: &S,
    description: &MethodDescriptor,
) -> ActionError {
    debug!(
        %kind,
        state = state.name(),
        action = %description,
        "blocking call reached an async-only action"
    );
    ActionError::InvalidInvocation {
        kind,
        state: state.name().to_string(),
        action: description.name().to_string(),
    }
}

/// Callback of an action scoped to a single state (exit, deactivate).
#[derive(Clone)]
pub(crate) enum ScopedAction {
    Sync(SyncAction),
    Async(AsyncAction),
}

impl ScopedAction {
    fn timing(&self) -> Timing {
        match self {
            Self::Sync(_) => Timing::Synchronous,
            Self::Async(_) => Timing::Asynchronous,
        }
    }

    fn execute<S: State>(
        &self,
        kind: ActionKind,
        state: &S,
        description: &MethodDescriptor,
    ) -> ActionResult {
        match self {
            Self::Sync(action) => {
                trace!(%kind, state = state.name(), action = %description, "running action");
                action()
            }
            Self::Async(_) => Err(invalid_invocation(kind, state, description)),
        }
    }

    fn execute_async<S: State>(
        &self,
        kind: ActionKind,
        state: &S,
        description: &MethodDescriptor,
    ) -> ActionFuture {
        match self {
            Self::Sync(_) => Either::Left(ready(self.execute(kind, state, description))),
            Self::Async(action) => {
                trace!(%kind, state = state.name(), action = %description, "starting async action");
                Either::Right(action())
            }
        }
    }
}
