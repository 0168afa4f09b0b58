//! Per-state registry of entry, exit and deactivate actions.

use crate::behavior::{
    ActionKind, ActionResult, DeactivateActionBehavior, EntryActionBehavior, ExitActionBehavior,
};
use crate::builder::error::BuildError;
use crate::core::{MethodDescriptor, State, Timing, Transition, Trigger};
use futures_util::future::BoxFuture;
use serde_json::Value;
use tracing::debug;

/// Actions configured for one state, kept in registration order.
///
/// Immutable once built. Wrap it in an `Arc` to share one configuration
/// between independent machines.
pub struct StateActions<S, T> {
    state: S,
    entry: Vec<EntryActionBehavior<S, T>>,
    exit: Vec<ExitActionBehavior<S>>,
    deactivate: Vec<DeactivateActionBehavior<S>>,
}

impl<S: State, T: Trigger> StateActions<S, T> {
    /// Start configuring actions for `state`.
    pub fn builder(state: S) -> StateActionsBuilder<S, T> {
        StateActionsBuilder::new(state)
    }

    /// The state these actions belong to.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Entry actions in registration order.
    pub fn entry_actions(&self) -> &[EntryActionBehavior<S, T>] {
        &self.entry
    }

    /// Exit actions in registration order.
    pub fn exit_actions(&self) -> &[ExitActionBehavior<S>] {
        &self.exit
    }

    /// Deactivate actions in registration order.
    pub fn deactivate_actions(&self) -> &[DeactivateActionBehavior<S>] {
        &self.deactivate
    }

    /// Run every entry action for `transition`, stopping at the first error.
    ///
    /// Trigger-scoped actions are included and filter themselves.
    pub fn execute_entry(&self, transition: &Transition<S, T>) -> ActionResult {
        self.entry
            .iter()
            .try_for_each(|action| action.execute(transition))
    }

    /// Awaitable counterpart of [`StateActions::execute_entry`].
    ///
    /// Each action finishes before the next one starts.
    pub async fn execute_entry_async(&self, transition: &Transition<S, T>) -> ActionResult {
        for action in &self.entry {
            action.execute_async(transition).await?;
        }
        Ok(())
    }

    /// Run every exit action, stopping at the first error.
    pub fn execute_exit(&self) -> ActionResult {
        self.exit.iter().try_for_each(ExitActionBehavior::execute)
    }

    /// Awaitable counterpart of [`StateActions::execute_exit`].
    pub async fn execute_exit_async(&self) -> ActionResult {
        for action in &self.exit {
            action.execute_async().await?;
        }
        Ok(())
    }

    /// Run every deactivate action, stopping at the first error.
    pub fn execute_deactivate(&self) -> ActionResult {
        self.deactivate
            .iter()
            .try_for_each(DeactivateActionBehavior::execute)
    }

    /// Awaitable counterpart of [`StateActions::execute_deactivate`].
    pub async fn execute_deactivate_async(&self) -> ActionResult {
        for action in &self.deactivate {
            action.execute_async().await?;
        }
        Ok(())
    }
}

/// Builder for [`StateActions`] with a fluent API.
///
/// The closure shorthands describe each callback by its type. Use
/// [`StateActionsBuilder::entry`] and friends to register behaviors built
/// with an explicit [`MethodDescriptor`].
///
/// # Example
///
/// ```rust
/// use futures_util::FutureExt;
/// use mindset_actions::builder::StateActions;
/// use mindset_actions::core::Transition;
/// use mindset_actions::state_enum;
///
/// state_enum! {
///     enum Player {
///         Stopped,
///         Playing,
///     }
/// }
///
/// let actions = StateActions::builder(Player::Playing)
///     .on_entry(|_, _| Ok(()))
///     .on_entry_from("resume", |_, _| Ok(()))
///     .on_exit_async(|| async { Ok(()) }.boxed())
///     .build()
///     .unwrap();
///
/// assert_eq!(actions.entry_actions().len(), 2);
/// assert!(actions
///     .execute_entry(&Transition::new(Player::Stopped, Player::Playing, "play"))
///     .is_ok());
/// assert!(actions.execute_exit().is_err());
/// ```
pub struct StateActionsBuilder<S, T> {
    state: S,
    entry: Vec<EntryActionBehavior<S, T>>,
    exit: Vec<ExitActionBehavior<S>>,
    deactivate: Vec<DeactivateActionBehavior<S>>,
}

impl<S: State, T: Trigger> StateActionsBuilder<S, T> {
    /// Create a new builder.
    pub fn new(state: S) -> Self {
        Self {
            state,
            entry: Vec::new(),
            exit: Vec::new(),
            deactivate: Vec::new(),
        }
    }

    /// Add a blocking entry action.
    pub fn on_entry<F>(mut self, action: F) -> Self
    where
        F: Fn(&Transition<S, T>, &[Value]) -> ActionResult + Send + Sync + 'static,
    {
        let description = entry_descriptor::<F, S, T>(Timing::Synchronous);
        self.entry
            .push(EntryActionBehavior::sync(action, Some(description)).expect(DESCRIBED));
        self
    }

    /// Add a blocking entry action that only runs for `trigger`.
    pub fn on_entry_from<F>(mut self, trigger: T, action: F) -> Self
    where
        F: Fn(&Transition<S, T>, &[Value]) -> ActionResult + Send + Sync + 'static,
    {
        let description = entry_descriptor::<F, S, T>(Timing::Synchronous);
        self.entry.push(
            EntryActionBehavior::sync_from(trigger, action, Some(description)).expect(DESCRIBED),
        );
        self
    }

    /// Add an entry action that must be awaited.
    pub fn on_entry_async<F>(mut self, action: F) -> Self
    where
        F: Fn(&Transition<S, T>, &[Value]) -> BoxFuture<'static, ActionResult>
            + Send
            + Sync
            + 'static,
    {
        let description = entry_descriptor::<F, S, T>(Timing::Asynchronous);
        self.entry
            .push(EntryActionBehavior::asynchronous(action, Some(description)).expect(DESCRIBED));
        self
    }

    /// Add a blocking exit action.
    pub fn on_exit<F>(mut self, action: F) -> Self
    where
        F: Fn() -> ActionResult + Send + Sync + 'static,
    {
        let description = MethodDescriptor::of::<F>(Timing::Synchronous);
        self.exit.push(
            ExitActionBehavior::sync(self.state.clone(), action, Some(description))
                .expect(DESCRIBED),
        );
        self
    }

    /// Add an exit action that must be awaited.
    pub fn on_exit_async<F>(mut self, action: F) -> Self
    where
        F: Fn() -> BoxFuture<'static, ActionResult> + Send + Sync + 'static,
    {
        let description = MethodDescriptor::of::<F>(Timing::Asynchronous);
        self.exit.push(
            ExitActionBehavior::asynchronous(self.state.clone(), action, Some(description))
                .expect(DESCRIBED),
        );
        self
    }

    /// Add a blocking deactivate action.
    pub fn on_deactivate<F>(mut self, action: F) -> Self
    where
        F: Fn() -> ActionResult + Send + Sync + 'static,
    {
        let description = MethodDescriptor::of::<F>(Timing::Synchronous);
        self.deactivate.push(
            DeactivateActionBehavior::sync(self.state.clone(), action, Some(description))
                .expect(DESCRIBED),
        );
        self
    }

    /// Add a deactivate action that must be awaited.
    pub fn on_deactivate_async<F>(mut self, action: F) -> Self
    where
        F: Fn() -> BoxFuture<'static, ActionResult> + Send + Sync + 'static,
    {
        let description = MethodDescriptor::of::<F>(Timing::Asynchronous);
        self.deactivate.push(
            DeactivateActionBehavior::asynchronous(self.state.clone(), action, Some(description))
                .expect(DESCRIBED),
        );
        self
    }

    /// Add a pre-built entry action.
    pub fn entry(mut self, behavior: EntryActionBehavior<S, T>) -> Self {
        self.entry.push(behavior);
        self
    }

    /// Add a pre-built exit action. Must belong to this builder's state.
    pub fn exit(mut self, behavior: ExitActionBehavior<S>) -> Self {
        self.exit.push(behavior);
        self
    }

    /// Add a pre-built deactivate action. Must belong to this builder's state.
    pub fn deactivate(mut self, behavior: DeactivateActionBehavior<S>) -> Self {
        self.deactivate.push(behavior);
        self
    }

    /// Build the registry.
    /// Returns an error if a pre-built action is bound to another state.
    pub fn build(self) -> Result<StateActions<S, T>, BuildError> {
        for action in &self.exit {
            check_state(ActionKind::Exit, &self.state, action.state(), action.description())?;
        }
        for action in &self.deactivate {
            check_state(
                ActionKind::Deactivate,
                &self.state,
                action.state(),
                action.description(),
            )?;
        }

        debug!(
            state = self.state.name(),
            entry = self.entry.len(),
            exit = self.exit.len(),
            deactivate = self.deactivate.len(),
            "configured state actions"
        );

        Ok(StateActions {
            state: self.state,
            entry: self.entry,
            exit: self.exit,
            deactivate: self.deactivate,
        })
    }
}

const DESCRIBED: &str = "generated descriptor always matches its variant";

fn entry_descriptor<F, S, T>(timing: Timing) -> MethodDescriptor {
    MethodDescriptor::of::<F>(timing)
        .with_parameter_of::<Transition<S, T>>()
        .with_parameter_of::<[Value]>()
}

fn check_state<S: State>(
    kind: ActionKind,
    expected: &S,
    found: &S,
    description: &MethodDescriptor,
) -> Result<(), BuildError> {
    if expected == found {
        return Ok(());
    }

    Err(BuildError::StateMismatch {
        kind,
        action: description.name().to_string(),
        expected: expected.name().to_string(),
        found: found.name().to_string(),
    })
}
