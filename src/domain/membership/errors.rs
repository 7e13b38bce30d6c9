//! Error types for the membership domain.

use thiserror::Error;

use super::MembershipTier;

/// Errors raised by membership operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MembershipError {
    /// Cancellation was requested on a membership that is already free.
    #[error("Free memberships have no subscription to cancel")]
    NothingToCancel,

    /// A tier-gated feature was invoked on a tier that does not include it.
    #[error("Feature '{feature}' is not included in the {tier} tier")]
    FeatureNotIncluded {
        feature: &'static str,
        tier: MembershipTier,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_to_cancel_displays_correctly() {
        assert_eq!(
            format!("{}", MembershipError::NothingToCancel),
            "Free memberships have no subscription to cancel"
        );
    }

    #[test]
    fn feature_not_included_names_feature_and_tier() {
        let err = MembershipError::FeatureNotIncluded {
            feature: "parental_controls",
            tier: MembershipTier::Basic,
        };
        assert_eq!(
            format!("{}", err),
            "Feature 'parental_controls' is not included in the Basic tier"
        );
    }
}
