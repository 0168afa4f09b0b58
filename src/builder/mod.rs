//! Builder API for configuring state actions.
//!
//! Actions are configured once, before a machine processes events. Every
//! configuration mistake surfaces here as a [`BuildError`], never on first use.

pub mod actions;
pub mod error;
pub mod macros;

pub use actions::{StateActions, StateActionsBuilder};
pub use error::BuildError;
