//! Core value types of the dispatch layer.
//!
//! This module contains the immutable values behaviors are built from and
//! invoked with:
//! - States and triggers via the `State` and `Trigger` traits
//! - Callback metadata via `MethodDescriptor`
//! - The per-fire `Transition` record

mod descriptor;
mod state;
mod transition;

pub use descriptor::{MethodDescriptor, Timing};
pub use state::{State, Trigger};
pub use transition::Transition;
