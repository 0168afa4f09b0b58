//! State and trigger traits shared by every action behavior.
//!
//! Behaviors never inspect states beyond naming them in diagnostics, and
//! only compare triggers for equality, so both traits stay minimal.

use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// States are immutable values. The only thing the dispatch layer needs from
/// them is a stable display name for logging and error messages.
///
/// # Example
///
/// ```rust
/// use mindset_actions::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum DoorState {
///     Open,
///     Closed,
/// }
///
/// impl State for DoorState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///         }
///     }
/// }
///
/// assert_eq!(DoorState::Open.name(), "Open");
/// ```
pub trait State: Clone + PartialEq + Debug + Serialize + DeserializeOwned + Send + Sync {
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}

/// Trait for the stimuli that cause transitions.
///
/// Filtered entry behaviors compare the causing trigger against a bound
/// value, so triggers only need equality. Implemented for every type with
/// the required bounds.
pub trait Trigger: Clone + PartialEq + Debug + Send + Sync {}

impl<T> Trigger for T where T: Clone + PartialEq + Debug + Send + Sync {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Idle,
        Active,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Idle => "Idle",
                Self::Active => "Active",
            }
        }
    }

    fn assert_trigger<T: Trigger>(_: &T) {}

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(TestState::Idle.name(), "Idle");
        assert_eq!(TestState::Active.name(), "Active");
    }

    #[test]
    fn state_serializes_correctly() {
        let json = serde_json::to_string(&TestState::Active).unwrap();
        let deserialized: TestState = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, TestState::Active);
    }

    #[test]
    fn common_types_are_triggers() {
        assert_trigger(&"open");
        assert_trigger(&String::from("close"));
        assert_trigger(&42u32);
        assert_trigger(&TestState::Idle);
    }
}
