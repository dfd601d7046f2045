//! Macros for declaring cyclic state enums.

/// Declare a state enum whose variants form a fixed cycle.
///
/// Generates the enum (with the derives every [`State`](crate::core::State)
/// needs), an `ALL` table in declaration order, a wrapping `next()` and the
/// `State` implementation.
///
/// # Example
///
/// ```
/// use montyhall::core::State;
/// use montyhall::cyclic_state_enum;
///
/// cyclic_state_enum! {
///     pub enum Light {
///         Red,
///         Green,
///         Yellow,
///     }
///     final: [Yellow]
/// }
///
/// assert_eq!(Light::Red.next(), Light::Green);
/// assert_eq!(Light::Yellow.next(), Light::Red);
/// assert!(Light::Yellow.is_final());
/// ```
#[macro_export]
macro_rules! cyclic_state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),+ $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),+
        }

        impl $name {
            /// Every state in cycle order.
            pub const ALL: &'static [$name] = &[$(Self::$variant),+];

            /// Position of this state within the cycle.
            pub fn position(&self) -> usize {
                *self as usize
            }

            /// The state that follows this one, wrapping after the last.
            pub fn next(&self) -> Self {
                Self::ALL[(self.position() + 1) % Self::ALL.len()]
            }
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),+
                }
            }

            #[allow(unreachable_patterns)]
            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    _ => false,
                }
            }
        }
    };
}
