//! Guard predicates for controlling state transitions.
//!
//! A guard inspects some context (for the game, the active round) and
//! decides whether a transition may fire. Guards never mutate what they
//! inspect.

use std::fmt;

/// Named predicate that determines if a transition can execute.
///
/// The description is what callers see when the guard refuses, so it
/// should read as the missing precondition.
///
/// # Example
///
/// ```rust
/// use montyhall::core::Guard;
///
/// let has_pick = Guard::new("a door must be selected", |pick: &Option<u8>| pick.is_some());
///
/// assert!(has_pick.check(&Some(1)));
/// assert!(!has_pick.check(&None));
/// assert_eq!(has_pick.description(), "a door must be selected");
/// ```
pub struct Guard<C> {
    description: &'static str,
    predicate: Box<dyn Fn(&C) -> bool + Send + Sync>,
}

impl<C> Guard<C> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and thread-safe (Send + Sync).
    pub fn new<F>(description: &'static str, predicate: F) -> Self
    where
        F: Fn(&C) -> bool + Send + Sync + 'static,
    {
        Guard {
            description,
            predicate: Box::new(predicate),
        }
    }

    /// Check if the guard allows a transition in this context.
    pub fn check(&self, context: &C) -> bool {
        (self.predicate)(context)
    }

    /// The precondition this guard enforces.
    pub fn description(&self) -> &'static str {
        self.description
    }
}

impl<C> fmt::Debug for Guard<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}
