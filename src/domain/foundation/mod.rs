//! Foundation module - Shared domain primitives.
//!
//! Contains the value objects, error types, and the state machine trait
//! that form the vocabulary of the subscription domain.

mod errors;
mod state_machine;
mod values;

pub use errors::ValidationError;
pub use state_machine::StateMachine;
pub use values::{PaymentCard, SubscriberEmail};
