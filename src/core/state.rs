//! Core State trait for state machine states.
//!
//! States are plain values describing where a machine currently sits.
//! Inspecting them never has side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// # Required Traits
///
/// - `Clone`: states are copied into transition history
/// - `PartialEq`: transition rules match on the current state
/// - `Debug`: states appear in logs and error messages
/// - `Serialize` + `Deserialize`: states are stored in checkpoints
///
/// # Example
///
/// ```rust
/// use montyhall::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Lamp {
///     Off,
///     On,
/// }
///
/// impl State for Lamp {
///     fn name(&self) -> &str {
///         match self {
///             Self::Off => "Off",
///             Self::On => "On",
///         }
///     }
/// }
///
/// assert_eq!(Lamp::On.name(), "On");
/// assert!(!Lamp::On.is_final());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this state closes a cycle.
    ///
    /// Cyclic machines keep running after a final state; the flag only
    /// marks where one pass ends and the next begins.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}
