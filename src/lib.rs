//! Mindset Actions: lifecycle action dispatch for state machines
//!
//! Binds user callbacks to the entry, exit and deactivation of states, and
//! runs them through one contract whether the callback blocks or must be
//! awaited. Calling an async-only action on the blocking path fails fast with
//! an error naming the state; it never runs partially or in the background.
//!
//! # Core Concepts
//!
//! - **MethodDescriptor**: Immutable metadata (name, timing, parameters) for a callback
//! - **Transition**: Read-only record of the state change being performed
//! - **Behaviors**: Entry, exit and deactivate actions, each sync or async
//! - **StateActions**: The ordered actions configured for one state
//!
//! # Example
//!
//! ```rust
//! use mindset_actions::builder::StateActions;
//! use mindset_actions::core::Transition;
//! use mindset_actions::state_enum;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//!
//! state_enum! {
//!     enum Turnstile {
//!         Locked,
//!         Unlocked,
//!     }
//! }
//!
//! let coins = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&coins);
//!
//! let unlocked = StateActions::builder(Turnstile::Unlocked)
//!     .on_entry_from("coin", move |_, _| {
//!         counter.fetch_add(1, Ordering::SeqCst);
//!         Ok(())
//!     })
//!     .build()
//!     .unwrap();
//!
//! let transition = Transition::new(Turnstile::Locked, Turnstile::Unlocked, "coin");
//! unlocked.execute_entry(&transition).unwrap();
//!
//! assert_eq!(coins.load(Ordering::SeqCst), 1);
//! ```

pub mod behavior;
pub mod builder;
pub mod core;

// Re-export commonly used types
pub use behavior::{
    ActionError, ActionFuture, ActionKind, ActionResult, DeactivateActionBehavior,
    EntryActionBehavior, ExitActionBehavior,
};
pub use builder::{BuildError, StateActions, StateActionsBuilder};
pub use core::{MethodDescriptor, State, Timing, Transition, Trigger};
