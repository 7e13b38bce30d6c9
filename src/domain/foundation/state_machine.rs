//! State machine trait for tier and status enums.
//!
//! Provides a consistent interface for validating transitions between
//! the variants of a closed enum, so each lifecycle enum declares its
//! rules in one place and callers get validated transitions for free.

use super::ValidationError;

/// Trait for enums whose variants form a state machine.
///
/// Implementors define which transitions are allowed; the provided
/// methods add a validated, error-returning transition on top.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for MembershipTier {
///     fn can_transition_to(&self, target: &Self) -> bool {
///         matches!((self, target), (Free, Basic) | (Basic, Family) /* ... */)
///     }
///
///     fn valid_transitions(&self) -> Vec<Self> {
///         match self {
///             Free => vec![Basic, Family, Offline, Pro],
///             // ... etc
///         }
///     }
/// }
///
/// // Usage:
/// let tier = current.transition_to(MembershipTier::Family)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "state_transition",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
