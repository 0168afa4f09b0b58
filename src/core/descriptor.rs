//! Metadata describing a bound callback.

use serde::{Deserialize, Serialize};
use std::any::type_name;
use std::fmt;

/// Execution mode a callback is bound to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timing {
    /// Callback completes before returning
    Synchronous,
    /// Callback returns a future that must be awaited
    Asynchronous,
}

impl Timing {
    /// True for callbacks that must be awaited.
    pub fn is_async(self) -> bool {
        matches!(self, Self::Asynchronous)
    }
}

impl fmt::Display for Timing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Synchronous => f.write_str("synchronous"),
            Self::Asynchronous => f.write_str("asynchronous"),
        }
    }
}

/// Immutable description of a bound callback.
///
/// Used for diagnostics, error messages and to enforce that a behavior's
/// variant agrees with the callback's timing.
///
/// # Example
///
/// ```rust
/// use mindset_actions::core::{MethodDescriptor, Timing};
///
/// let descriptor = MethodDescriptor::asynchronous("notify_audit_log")
///     .with_parameter("Transition")
///     .with_parameter_of::<u32>();
///
/// assert_eq!(descriptor.name(), "notify_audit_log");
/// assert!(descriptor.is_async());
/// assert_eq!(descriptor.parameters(), ["Transition", "u32"]);
/// assert_eq!(descriptor.timing(), Timing::Asynchronous);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDescriptor {
    name: String,
    timing: Timing,
    parameters: Vec<String>,
}

impl MethodDescriptor {
    /// Create a descriptor with no declared parameters.
    pub fn new(name: impl Into<String>, timing: Timing) -> Self {
        Self {
            name: name.into(),
            timing,
            parameters: Vec::new(),
        }
    }

    /// Create a descriptor for a blocking callback.
    pub fn synchronous(name: impl Into<String>) -> Self {
        Self::new(name, Timing::Synchronous)
    }

    /// Create a descriptor for a callback that must be awaited.
    pub fn asynchronous(name: impl Into<String>) -> Self {
        Self::new(name, Timing::Asynchronous)
    }

    /// Describe a callback by its type.
    ///
    /// Closures get compiler-generated names such as
    /// `my_crate::setup::{{closure}}`, which still point at the registration site.
    pub fn of<F>(timing: Timing) -> Self {
        Self::new(type_name::<F>(), timing)
    }

    /// Append an expected parameter type name.
    pub fn with_parameter(mut self, parameter: impl Into<String>) -> Self {
        self.parameters.push(parameter.into());
        self
    }

    /// Append an expected parameter, named after `T`.
    pub fn with_parameter_of<T: ?Sized>(self) -> Self {
        self.with_parameter(type_name::<T>())
    }

    /// Callback name used in logs and errors.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable description; currently the callback name.
    pub fn description(&self) -> &str {
        &self.name
    }

    /// Execution mode the callback is bound to.
    pub fn timing(&self) -> Timing {
        self.timing
    }

    /// True when the callback must be awaited.
    pub fn is_async(&self) -> bool {
        self.timing.is_async()
    }

    /// Expected parameter type names, in call order.
    pub fn parameters(&self) -> &[String] {
        &self.parameters
    }
}

impl fmt::Display for MethodDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
