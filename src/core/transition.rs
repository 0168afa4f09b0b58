//! Transition record passed to entry behaviors.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Record of one state change: where it came from, where it goes, what
/// caused it and the arguments the trigger was fired with.
///
/// Created fresh for each fire operation and read-only to behaviors.
///
/// # Example
///
/// ```rust
/// use mindset_actions::core::Transition;
/// use serde_json::json;
///
/// let transition = Transition::new("Closed", "Open", "push").with_args(vec![json!(3)]);
///
/// assert_eq!(transition.source(), &"Closed");
/// assert_eq!(transition.destination(), &"Open");
/// assert_eq!(transition.trigger(), &"push");
/// assert_eq!(transition.args(), [json!(3)]);
/// assert!(!transition.is_reentry());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transition<S, T> {
    source: S,
    destination: S,
    trigger: T,
    #[serde(default)]
    args: Vec<Value>,
}

impl<S, T> Transition<S, T> {
    /// Create a transition without arguments.
    pub fn new(source: S, destination: S, trigger: T) -> Self {
        Self {
            source,
            destination,
            trigger,
            args: Vec::new(),
        }
    }

    /// Attach the arguments the trigger was fired with.
    pub fn with_args(mut self, args: Vec<Value>) -> Self {
        self.args = args;
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn destination(&self) -> &S {
        &self.destination
    }

    pub fn trigger(&self) -> &T {
        &self.trigger
    }

    pub fn args(&self) -> &[Value] {
        &self.args
    }
}

impl<S: PartialEq, T> Transition<S, T> {
    /// True when the transition leaves and re-enters the same state.
    pub fn is_reentry(&self) -> bool {
        self.source == self.destination
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_transition_has_no_args() {
        let transition = Transition::new(1u8, 2u8, "go");
        assert!(transition.args().is_empty());
    }

    #[test]
    fn args_keep_their_order() {
        let transition =
            Transition::new("A", "B", "move").with_args(vec![json!("x"), json!(2), json!(null)]);

        assert_eq!(transition.args(), [json!("x"), json!(2), json!(null)]);
    }

    #[test]
    fn reentry_detected_when_source_equals_destination() {
        assert!(Transition::new("Idle", "Idle", "tick").is_reentry());
        assert!(!Transition::new("Idle", "Busy", "tick").is_reentry());
    }

    #[test]
    fn transition_serializes_correctly() {
        let transition = Transition::new("Closed".to_string(), "Open".to_string(), 7u32)
            .with_args(vec![json!({"force": true})]);

        let json = serde_json::to_string(&transition).unwrap();
        let back: Transition<String, u32> = serde_json::from_str(&json).unwrap();

        assert_eq!(back, transition);
    }
}
