//! Actions run when a state is left.

use super::{checked_descriptor, ActionFuture, ActionKind, ActionResult, ScopedAction};
use crate::builder::BuildError;
use crate::core::{MethodDescriptor, State, Timing};
use futures_util::future::BoxFuture;
use std::fmt;
use std::sync::Arc;

/// Action bound to leaving `state`.
///
/// # Example
///
/// ```rust
/// use mindset_actions::behavior::ExitActionBehavior;
/// use mindset_actions::core::MethodDescriptor;
/// use mindset_actions::state_enum;
///
/// state_enum! {
///     enum Door {
///         Open,
///         Closed,
///     }
/// }
///
/// let exit = ExitActionBehavior::sync(
///     Door::Open,
///     || Ok(()),
///     Some(MethodDescriptor::synchronous("log_close")),
/// )
/// .unwrap();
///
/// assert!(exit.execute().is_ok());
/// ```
#[derive(Clone)]
pub struct ExitActionBehavior<S> {
    state: S,
    description: MethodDescriptor,
    action: ScopedAction,
}

impl<S: State> ExitActionBehavior<S> {
    /// Bind a blocking callback.
    pub fn sync<F>(
        state: S,
        action: F,
        description: Option<MethodDescriptor>,
    ) -> Result<Self, BuildError>
    where
        F: Fn() -> ActionResult + Send + Sync + 'static,
    {
        let description = checked_descriptor(ActionKind::Exit, description, Timing::Synchronous)?;

        Ok(Self {
            state,
            description,
            action: ScopedAction::Sync(Arc::new(action)),
        })
    }

    /// Bind a callback that must be awaited.
    pub fn asynchronous<F>(
        state: S,
        action: F,
        description: Option<MethodDescriptor>,
    ) -> Result<Self, BuildError>
    where
        F: Fn() -> BoxFuture<'static, ActionResult> + Send + Sync + 'static,
    {
        let description = checked_descriptor(ActionKind::Exit, description, Timing::Asynchronous)?;

        Ok(Self {
            state,
            description,
            action: ScopedAction::Async(Arc::new(action)),
        })
    }

    /// Run the action to completion.
    ///
    /// Async-only actions fail with an error naming the exited state
    /// and are never started.
    pub fn execute(&self) -> ActionResult {
        self.action
            .execute(ActionKind::Exit, &self.state, &self.description)
    }

    /// Run the action on the awaitable path.
    ///
    /// Blocking actions complete before this returns and hand back a resolved
    /// future; async actions hand back the callback's own future.
    pub fn execute_async(&self) -> ActionFuture {
        self.action
            .execute_async(ActionKind::Exit, &self.state, &self.description)
    }

    /// The state this action leaves.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Metadata of the bound callback.
    pub fn description(&self) -> &MethodDescriptor {
        &self.description
    }

    /// Whether the callback blocks or must be awaited.
    pub fn timing(&self) -> Timing {
        self.action.timing()
    }
}

impl<S: fmt::Debug> fmt::Debug for ExitActionBehavior<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExitActionBehavior")
            .field("state", &self.state)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}
