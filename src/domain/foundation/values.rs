//! Subscriber identity value objects.
//!
//! A membership is identified by exactly two fields: the subscriber's
//! email and the payment card associated with the subscription. Both are
//! immutable after construction and carried unchanged across every tier
//! transition.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Subscriber email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubscriberEmail(String);

impl SubscriberEmail {
    /// Creates a new SubscriberEmail, validating basic shape.
    ///
    /// Rejects empty strings and addresses without an `@`. No
    /// deliverability checks are performed.
    pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into();
        if email.trim().is_empty() {
            return Err(ValidationError::empty_field("subscriber_email"));
        }
        if !email.contains('@') {
            return Err(ValidationError::invalid_format(
                "subscriber_email",
                "missing @ symbol",
            ));
        }
        Ok(Self(email))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubscriberEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Payment card identifier associated with the subscription.
///
/// Stored as an opaque string. Card validity and charging are handled
/// elsewhere; this type only guarantees the identifier is present.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentCard(String);

impl PaymentCard {
    /// Creates a new PaymentCard, returning error if empty.
    pub fn new(card: impl Into<String>) -> Result<Self, ValidationError> {
        let card = card.into();
        if card.trim().is_empty() {
            return Err(ValidationError::empty_field("payment_card"));
        }
        Ok(Self(card))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PaymentCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscriber_email_accepts_plain_address() {
        let email = SubscriberEmail::new("correo@prueba.cl").unwrap();
        assert_eq!(email.as_str(), "correo@prueba.cl");
    }

    #[test]
    fn subscriber_email_rejects_empty_string() {
        let result = SubscriberEmail::new("");
        match result {
            Err(ValidationError::EmptyField { field }) => assert_eq!(field, "subscriber_email"),
            other => panic!("Expected EmptyField error, got {:?}", other),
        }
    }

    #[test]
    fn subscriber_email_rejects_whitespace_only() {
        assert!(SubscriberEmail::new("   ").is_err());
    }

    #[test]
    fn subscriber_email_rejects_missing_at_symbol() {
        let result = SubscriberEmail::new("correo.prueba.cl");
        match result {
            Err(ValidationError::InvalidFormat { field, .. }) => {
                assert_eq!(field, "subscriber_email")
            }
            other => panic!("Expected InvalidFormat error, got {:?}", other),
        }
    }

    #[test]
    fn subscriber_email_displays_correctly() {
        let email = SubscriberEmail::new("correo@prueba.cl").unwrap();
        assert_eq!(format!("{}", email), "correo@prueba.cl");
    }

    #[test]
    fn subscriber_email_serializes_transparently() {
        let email = SubscriberEmail::new("correo@prueba.cl").unwrap();
        let json = serde_json::to_string(&email).unwrap();
        assert_eq!(json, "\"correo@prueba.cl\"");
    }

    #[test]
    fn payment_card_accepts_spaced_digits() {
        let card = PaymentCard::new("123 456 789").unwrap();
        assert_eq!(card.as_str(), "123 456 789");
    }

    #[test]
    fn payment_card_rejects_empty_string() {
        let result = PaymentCard::new("");
        match result {
            Err(ValidationError::EmptyField { field }) => assert_eq!(field, "payment_card"),
            other => panic!("Expected EmptyField error, got {:?}", other),
        }
    }

    #[test]
    fn payment_card_displays_correctly() {
        let card = PaymentCard::new("123 456 789").unwrap();
        assert_eq!(format!("{}", card), "123 456 789");
    }
}
