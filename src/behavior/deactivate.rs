//! Actions run when an active state is torn down.

use super::{checked_descriptor, ActionFuture, ActionKind, ActionResult, ScopedAction};
use crate::builder::BuildError;
use crate::core::{MethodDescriptor, State, Timing};
use futures_util::future::BoxFuture;
use std::fmt;
use std::sync::Arc;

/// Action bound to deactivating `state`.
///
/// Deactivation tears an active state down without leaving it, so the
/// callback takes no arguments beyond the state it is bound to.
///
/// # Example
///
/// ```rust
/// use futures_util::FutureExt;
/// use mindset_actions::behavior::DeactivateActionBehavior;
/// use mindset_actions::core::MethodDescriptor;
/// use mindset_actions::state_enum;
///
/// state_enum! {
///     enum Session {
///         Active,
///         Closed,
///     }
/// }
///
/// let deactivate = DeactivateActionBehavior::asynchronous(
///     Session::Active,
///     || async { Ok(()) }.boxed(),
///     Some(MethodDescriptor::asynchronous("release_lease")),
/// )
/// .unwrap();
///
/// let error = deactivate.execute().unwrap_err();
/// assert!(error.to_string().contains("'Active'"));
/// assert!(matches!(deactivate.execute_async().now_or_never(), Some(Ok(()))));
/// ```
#[derive(Clone)]
pub struct DeactivateActionBehavior<S> {
    state: S,
    description: MethodDescriptor,
    action: ScopedAction,
}

impl<S: State> DeactivateActionBehavior<S> {
    /// Bind a blocking callback.
    pub fn sync<F>(
        state: S,
        action: F,
        description: Option<MethodDescriptor>,
    ) -> Result<Self, BuildError>
    where
        F: Fn() -> ActionResult + Send + Sync + 'static,
    {
        let description =
            checked_descriptor(ActionKind::Deactivate, description, Timing::Synchronous)?;

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
        let description =
            checked_descriptor(ActionKind::Deactivate, description, Timing::Asynchronous)?;

        Ok(Self {
            state,
            description,
            action: ScopedAction::Async(Arc::new(action)),
        })
    }

    /// Run the action to completion.
    ///
    /// Async-only actions fail with an error naming the deactivated state
    /// and are never started.
    pub fn execute(&self) -> ActionResult {
        self.action
            .execute(ActionKind::Deactivate, &self.state, &self.description)
    }

    /// Run the action on the awaitable path.
    ///
    /// Blocking actions complete before this returns and hand back a resolved
    /// future; async actions hand back the callback's own future.
    pub fn execute_async(&self) -> ActionFuture {
        self.action
            .execute_async(ActionKind::Deactivate, &self.state, &self.description)
    }

    /// The state this action deactivates.
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

impl<S: fmt::Debug> fmt::Debug for DeactivateActionBehavior<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeactivateActionBehavior")
            .field("state", &self.state)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behavior::ActionError;
    use futures_util::FutureExt;
    use serde::{Deserialize, Serialize};
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Active,
        Idle,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Active => "Active",
                Self::Idle => "Idle",
            }
        }
    }

    fn flag_setter(flag: &Arc<AtomicBool>) -> DeactivateActionBehavior<TestState> {
        let flag = Arc::clone(flag);
        DeactivateActionBehavior::asynchronous(
            TestState::Active,
            move || {
                let flag = Arc::clone(&flag);
                async move {
                    tokio::task::yield_now().await;
                    flag.store(true, Ordering::SeqCst);
                    Ok(())
                }
                .boxed()
            },
            Some(MethodDescriptor::asynchronous("release_lease")),
        )
        .unwrap()
    }

    #[test]
    fn async_execute_names_deactivated_state() {
        let flag = Arc::new(AtomicBool::new(false));
        let deactivate = flag_setter(&flag);

        let error = deactivate.execute().unwrap_err();

        assert!(error.is_invalid_invocation());
        assert!(error.to_string().contains("Active"));
        assert!(error.to_string().contains("release_lease"));
        assert!(!flag.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn async_execute_async_sets_flag_after_await() {
        let flag = Arc::new(AtomicBool::new(false));
        let deactivate = flag_setter(&flag);

        let future = deactivate.execute_async();
        assert!(!flag.load(Ordering::SeqCst));

        future.await.unwrap();
        assert!(flag.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn sync_action_works_on_both_paths() {
        let counter = Arc::new(AtomicUsize::new(0));
        let inner = Arc::clone(&counter);
        let deactivate = DeactivateActionBehavior::sync(
            TestState::Idle,
            move || {
                inner.fetch_add(1, Ordering::SeqCst);
                Ok(())
            },
            Some(MethodDescriptor::synchronous("stop_timer")),
        )
        .unwrap();

        deactivate.execute().unwrap();
        deactivate.execute_async().await.unwrap();

        assert_eq!(counter.load(Ordering::SeqCst), 2);
        assert_eq!(deactivate.state(), &TestState::Idle);
        assert_eq!(deactivate.timing(), Timing::Synchronous);
    }

    #[test]
    fn sync_callback_failure_is_returned_as_is() {
        let deactivate = DeactivateActionBehavior::sync(
            TestState::Idle,
            || Err(ActionError::callback("timer already stopped")),
            Some(MethodDescriptor::synchronous("stop_timer")),
        )
        .unwrap();

        let error = deactivate.execute().unwrap_err();
        assert!(matches!(error, ActionError::Callback(_)));
        assert!(error.to_string().contains("timer already stopped"));
    }

    #[test]
    fn construction_rejects_sync_descriptor_for_async_action() {
        let result = DeactivateActionBehavior::asynchronous(
            TestState::Active,
            || async { Ok(()) }.boxed(),
            Some(MethodDescriptor::synchronous("wrong")),
        );

        assert!(matches!(
            result,
            Err(BuildError::TimingMismatch {
                kind: ActionKind::Deactivate,
                expected: Timing::Asynchronous,
                found: Timing::Synchronous,
                ..
            })
        ));
    }

    #[test]
    fn construction_requires_descriptor() {
        let result = DeactivateActionBehavior::asynchronous(
            TestState::Active,
            || async { Ok(()) }.boxed(),
            None,
        );

        assert!(matches!(
            result,
            Err(BuildError::MissingDescriptor {
                kind: ActionKind::Deactivate
            })
        ));
    }
}
