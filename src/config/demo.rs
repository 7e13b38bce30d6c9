//! Demo walkthrough configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Subscriber identity used by the demonstration binary
#[derive(Debug, Clone, Deserialize)]
pub struct DemoConfig {
    /// Email address for the walkthrough subscriber
    #[serde(default = "default_subscriber_email")]
    pub subscriber_email: String,

    /// Payment card identifier for the walkthrough subscriber
    #[serde(default = "default_payment_card")]
    pub payment_card: String,
}

impl DemoConfig {
    /// Validate demo configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.subscriber_email.trim().is_empty() {
            return Err(ValidationError::EmptyDemoEmail);
        }
        if self.payment_card.trim().is_empty() {
            return Err(ValidationError::EmptyDemoCard);
        }
        Ok(())
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            subscriber_email: default_subscriber_email(),
            payment_card: default_payment_card(),
        }
    }
}

fn default_subscriber_email() -> String {
    "correo@prueba.cl".to_string()
}

fn default_payment_card() -> String {
    "123 456 789".to_string()
}
