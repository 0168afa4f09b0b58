//! Macros for ergonomic state declarations.

/// Generate a `State` implementation for a simple enum.
///
/// The state name is the variant name.
///
/// # Example
///
/// ```
/// use mindset_actions::core::State;
/// use mindset_actions::state_enum;
///
/// state_enum! {
///     pub enum Connection {
///         Disconnected,
///         Connecting,
///         Connected,
///     }
/// }
///
/// assert_eq!(Connection::Connecting.name(), "Connecting");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}
