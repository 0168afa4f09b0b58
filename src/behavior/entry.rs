//! Actions run when a state is entered.

use super::{
    checked_descriptor, invalid_invocation, ActionFuture, ActionKind, ActionResult,
};
use crate::builder::BuildError;
use crate::core::{MethodDescriptor, State, Timing, Transition, Trigger};
use futures_util::future::{ready, BoxFuture, Either};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// Blocking entry callback, called with the transition and its arguments.
pub type SyncEntryAction<S, T> =
    Arc<dyn Fn(&Transition<S, T>, &[Value]) -> ActionResult + Send + Sync>;

/// Async entry callback. The returned future must own everything it uses.
pub type AsyncEntryAction<S, T> =
    Arc<dyn Fn(&Transition<S, T>, &[Value]) -> BoxFuture<'static, ActionResult> + Send + Sync>;

enum EntryAction<S, T> {
    Sync(SyncEntryAction<S, T>),
    /// Runs the blocking callback only for transitions caused by `trigger`.
    SyncFrom {
        trigger: T,
        action: SyncEntryAction<S, T>,
    },
    Async(AsyncEntryAction<S, T>),
}

impl<S, T: Clone> Clone for EntryAction<S, T> {
    fn clone(&self) -> Self {
        match self {
            Self::Sync(action) => Self::Sync(Arc::clone(action)),
            Self::SyncFrom { trigger, action } => Self::SyncFrom {
                trigger: trigger.clone(),
                action: Arc::clone(action),
            },
            Self::Async(action) => Self::Async(Arc::clone(action)),
        }
    }
}

/// Action bound to entering a state.
///
/// Entry actions are the only ones that see the transition, and the only
/// ones that can be scoped to a trigger with [`EntryActionBehavior::sync_from`].
/// A scoped action that sees a different trigger does nothing and still
/// succeeds, so callers can run every registered entry action unconditionally.
///
/// # Example
///
/// ```rust
/// use mindset_actions::behavior::EntryActionBehavior;
/// use mindset_actions::core::{MethodDescriptor, Transition};
/// use mindset_actions::state_enum;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
///
/// state_enum! {
///     enum Door {
///         Open,
///         Closed,
///     }
/// }
///
/// let pushes = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&pushes);
/// let entry = EntryActionBehavior::sync_from(
///     "push",
///     move |_, _| {
///         counter.fetch_add(1, Ordering::SeqCst);
///         Ok(())
///     },
///     Some(MethodDescriptor::synchronous("count_pushes")),
/// )
/// .unwrap();
///
/// entry.execute(&Transition::new(Door::Closed, Door::Open, "push")).unwrap();
/// entry.execute(&Transition::new(Door::Closed, Door::Open, "kick")).unwrap();
///
/// assert_eq!(pushes.load(Ordering::SeqCst), 1);
/// ```
pub struct EntryActionBehavior<S, T> {
    description: MethodDescriptor,
    action: EntryAction<S, T>,
}

impl<S: State, T: Trigger> EntryActionBehavior<S, T> {
    /// Bind a blocking callback run on every entry.
    pub fn sync<F>(action: F, description: Option<MethodDescriptor>) -> Result<Self, BuildError>
    where
        F: Fn(&Transition<S, T>, &[Value]) -> ActionResult + Send + Sync + 'static,
    {
        let description =
            checked_descriptor(ActionKind::Entry, description, Timing::Synchronous)?;

        Ok(Self {
            description,
            action: EntryAction::Sync(Arc::new(action)),
        })
    }

    /// Bind a blocking callback run only on entries caused by `trigger`.
    pub fn sync_from<F>(
        trigger: T,
        action: F,
        description: Option<MethodDescriptor>,
    ) -> Result<Self, BuildError>
    where
        F: Fn(&Transition<S, T>, &[Value]) -> ActionResult + Send + Sync + 'static,
    {
        let description =
            checked_descriptor(ActionKind::Entry, description, Timing::Synchronous)?;

        Ok(Self {
            description,
            action: EntryAction::SyncFrom {
                trigger,
                action: Arc::new(action),
            },
        })
    }

    /// Bind a callback that must be awaited.
    pub fn asynchronous<F>(action: F, description: Option<MethodDescriptor>) -> Result<Self, BuildError>
    where
        F: Fn(&Transition<S, T>, &[Value]) -> BoxFuture<'static, ActionResult>
            + Send
            + Sync
            + 'static,
    {
        let description =
            checked_descriptor(ActionKind::Entry, description, Timing::Asynchronous)?;

        Ok(Self {
            description,
            action: EntryAction::Async(Arc::new(action)),
        })
    }

    /// Run the action for `transition` to completion.
    ///
    /// Async-only actions fail with an error naming the destination state
    /// and are never started.
    pub fn execute(&self, transition: &Transition<S, T>) -> ActionResult {
        match &self.action {
            EntryAction::Sync(action) => self.run(action, transition),
            EntryAction::SyncFrom { trigger, action } => {
                if transition.trigger() == trigger {
                    self.run(action, transition)
                } else {
                    trace!(
                        action = %self.description,
                        expected = ?trigger,
                        actual = ?transition.trigger(),
                        "entry action skipped for trigger"
                    );
                    Ok(())
                }
            }
            EntryAction::Async(_) => Err(invalid_invocation(
                ActionKind::Entry,
                transition.destination(),
                &self.description,
            )),
        }
    }

    /// Run the action for `transition` on the awaitable path.
    ///
    /// Blocking actions complete before this returns; the future they hand
    /// back is already resolved.
    pub fn execute_async(&self, transition: &Transition<S, T>) -> ActionFuture {
        match &self.action {
            EntryAction::Async(action) => {
                trace!(
                    action = %self.description,
                    state = transition.destination().name(),
                    trigger = ?transition.trigger(),
                    "starting async entry action"
                );
                Either::Right(action(transition, transition.args()))
            }
            _ => Either::Left(ready(self.execute(transition))),
        }
    }

    fn run(&self, action: &SyncEntryAction<S, T>, transition: &Transition<S, T>) -> ActionResult {
        trace!(
            action = %self.description,
            state = transition.destination().name(),
            trigger = ?transition.trigger(),
            "running entry action"
        );
        action(transition, transition.args())
    }

    /// Metadata of the bound callback.
    pub fn description(&self) -> &MethodDescriptor {
        &self.description
    }

    /// Whether the callback blocks or must be awaited.
    pub fn timing(&self) -> Timing {
        match self.action {
            EntryAction::Async(_) => Timing::Asynchronous,
            _ => Timing::Synchronous,
        }
    }

    /// Trigger the action is scoped to, if any.
    pub fn trigger(&self) -> Option<&T> {
        match &self.action {
            EntryAction::SyncFrom { trigger, .. } => Some(trigger),
            _ => None,
        }
    }
}

impl<S, T: Clone> Clone for EntryActionBehavior<S, T> {
    fn clone(&self) -> Self {
        Self {
            description: self.description.clone(),
            action: self.action.clone(),
        }
    }
}

impl<S, T: fmt::Debug> fmt::Debug for EntryActionBehavior<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("EntryActionBehavior");
        debug.field("description", &self.description);
        if let EntryAction::SyncFrom { trigger, .. } = &self.action {
            debug.field("trigger", trigger);
        }
        debug.finish_non_exhaustive()
    }
}
