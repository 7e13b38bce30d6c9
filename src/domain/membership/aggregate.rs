//! Membership aggregate entity.
//!
//! A Membership pairs a subscriber's identity with their current tier.
//! Tier changes are pure replacement: a successful request produces a new
//! instance at the target tier and the old one is discarded. No history
//! is retained.
//!
//! # Invariants
//!
//! - Identity is exactly two fields, `subscriber_email` and
//!   `payment_card`, immutable after construction
//! - Both fields are carried unchanged across every transition
//! - Rejected change requests return the current instance untouched

use crate::domain::foundation::{PaymentCard, StateMachine, SubscriberEmail};
use serde::{Deserialize, Serialize};

use super::{MembershipError, MembershipTier, TierBenefits};

/// Membership - a subscriber's current tier plus their identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Membership {
    subscriber_email: SubscriberEmail,
    payment_card: PaymentCard,
    tier: MembershipTier,
}

impl Membership {
    /// Creates the initial free membership for a subscriber.
    pub fn free(subscriber_email: SubscriberEmail, payment_card: PaymentCard) -> Self {
        Self {
            subscriber_email,
            payment_card,
            tier: MembershipTier::Free,
        }
    }

    /// Returns the subscriber's email address.
    pub fn subscriber_email(&self) -> &SubscriberEmail {
        &self.subscriber_email
    }

    /// Returns the payment card associated with the subscription.
    pub fn payment_card(&self) -> &PaymentCard {
        &self.payment_card
    }

    /// Returns the current tier.
    pub fn tier(&self) -> MembershipTier {
        self.tier
    }

    /// Returns the benefits table entry for the current tier.
    pub fn benefits(&self) -> TierBenefits {
        TierBenefits::for_tier(self.tier)
    }

    /// Monthly cost of the current tier in whole currency units.
    pub fn monthly_cost(&self) -> u32 {
        self.benefits().monthly_cost
    }

    /// Maximum simultaneous devices for the current tier.
    pub fn max_devices(&self) -> u32 {
        self.benefits().max_devices
    }

    /// Bonus days granted by the current tier, if any.
    pub fn bonus_days(&self) -> Option<u16> {
        self.benefits().bonus_days
    }

    /// Requests a transition to the tier mapped by `code`
    /// (1 = Basic, 2 = Family, 3 = Offline, 4 = Pro).
    ///
    /// Unknown codes and requests for the current tier are rejected by
    /// returning the membership unchanged. Callers that need to
    /// distinguish a rejection compare the tier before and after.
    pub fn change_subscription(self, code: u8) -> Self {
        let Some(target) = MembershipTier::from_change_code(code) else {
            return self;
        };
        if !self.tier.can_transition_to(&target) {
            return self;
        }
        self.switch_to(target)
    }

    /// Cancels a paid subscription, dropping back to the free tier.
    ///
    /// # Errors
    ///
    /// Returns [`MembershipError::NothingToCancel`] if the membership is
    /// already free.
    pub fn cancel_subscription(self) -> Result<Self, MembershipError> {
        if !self.tier.is_paid() {
            return Err(MembershipError::NothingToCancel);
        }
        Ok(self.switch_to(MembershipTier::Free))
    }

    /// Reserved: parental control configuration.
    ///
    /// Currently only validates that the tier includes the feature;
    /// the settings surface itself is not built yet.
    ///
    /// # Errors
    ///
    /// Returns [`MembershipError::FeatureNotIncluded`] for tiers without
    /// parental controls.
    pub fn configure_parental_controls(&self) -> Result<(), MembershipError> {
        if !self.benefits().parental_controls {
            return Err(MembershipError::FeatureNotIncluded {
                feature: "parental_controls",
                tier: self.tier,
            });
        }
        Ok(())
    }

    /// Reserved: offline download quota adjustment.
    ///
    /// Currently only validates that the tier includes the feature;
    /// the quota surface itself is not built yet.
    ///
    /// # Errors
    ///
    /// Returns [`MembershipError::FeatureNotIncluded`] for tiers without
    /// offline downloads.
    pub fn adjust_offline_quota(&self) -> Result<(), MembershipError> {
        if !self.benefits().offline_downloads {
            return Err(MembershipError::FeatureNotIncluded {
                feature: "offline_downloads",
                tier: self.tier,
            });
        }
        Ok(())
    }

    /// Rebuilds the membership at `tier`, carrying the identity over.
    fn switch_to(self, tier: MembershipTier) -> Self {
        Self {
            subscriber_email: self.subscriber_email,
            payment_card: self.payment_card,
            tier,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_email() -> SubscriberEmail {
        SubscriberEmail::new("correo@prueba.cl").unwrap()
    }

    fn test_card() -> PaymentCard {
        PaymentCard::new("123 456 789").unwrap()
    }

    fn free_membership() -> Membership {
        Membership::free(test_email(), test_card())
    }

    fn membership_at(tier: MembershipTier) -> Membership {
        let code = tier.change_code().expect("paid tier");
        free_membership().change_subscription(code)
    }

    fn assert_identity_intact(membership: &Membership) {
        assert_eq!(membership.subscriber_email().as_str(), "correo@prueba.cl");
        assert_eq!(membership.payment_card().as_str(), "123 456 789");
    }

    // Construction tests

    #[test]
    fn new_membership_starts_free() {
        let membership = free_membership();
        assert_eq!(membership.tier(), MembershipTier::Free);
        assert_identity_intact(&membership);
    }

    #[test]
    fn benefits_follow_current_tier() {
        let membership = membership_at(MembershipTier::Family);
        assert_eq!(membership.monthly_cost(), 5000);
        assert_eq!(membership.max_devices(), 5);
        assert_eq!(membership.bonus_days(), Some(7));
    }

    // Change subscription - accepted requests

    #[test]
    fn free_accepts_every_change_code() {
        for code in 1..=4 {
            let membership = free_membership().change_subscription(code);
            assert_eq!(membership.tier().change_code(), Some(code));
            assert_identity_intact(&membership);
        }
    }

    #[test]
    fn basic_can_upgrade_to_family() {
        let membership = membership_at(MembershipTier::Basic).change_subscription(2);
        assert_eq!(membership.tier(), MembershipTier::Family);
    }

    #[test]
    fn family_can_downgrade_to_basic() {
        let membership = membership_at(MembershipTier::Family).change_subscription(1);
        assert_eq!(membership.tier(), MembershipTier::Basic);
    }

    #[test]
    fn offline_can_switch_to_family() {
        let membership = membership_at(MembershipTier::Offline).change_subscription(2);
        assert_eq!(membership.tier(), MembershipTier::Family);
    }

    #[test]
    fn pro_can_downgrade_to_offline() {
        let membership = membership_at(MembershipTier::Pro).change_subscription(3);
        assert_eq!(membership.tier(), MembershipTier::Offline);
    }

    // Change subscription - rejected requests

    #[test]
    fn out_of_range_code_is_a_no_op() {
        let membership = free_membership().change_subscription(0);
        assert_eq!(membership.tier(), MembershipTier::Free);

        let membership = membership.change_subscription(5);
        assert_eq!(membership.tier(), MembershipTier::Free);
        assert_identity_intact(&membership);
    }

    #[test]
    fn requesting_current_tier_is_a_no_op() {
        for tier in [
            MembershipTier::Basic,
            MembershipTier::Family,
            MembershipTier::Offline,
            MembershipTier::Pro,
        ] {
            let code = tier.change_code().unwrap();
            let membership = membership_at(tier).change_subscription(code);
            assert_eq!(membership.tier(), tier, "self-request for {:?} should no-op", tier);
            assert_identity_intact(&membership);
        }
    }

    #[test]
    fn rejected_request_leaves_membership_equal() {
        let before = membership_at(MembershipTier::Pro);
        let after = before.clone().change_subscription(4);
        assert_eq!(before, after);
    }

    // Cancellation

    #[test]
    fn every_paid_tier_can_cancel_to_free() {
        for tier in [
            MembershipTier::Basic,
            MembershipTier::Family,
            MembershipTier::Offline,
            MembershipTier::Pro,
        ] {
            let membership = membership_at(tier).cancel_subscription().unwrap();
            assert_eq!(membership.tier(), MembershipTier::Free);
            assert_identity_intact(&membership);
        }
    }

    #[test]
    fn free_membership_cannot_cancel() {
        let result = free_membership().cancel_subscription();
        assert_eq!(result, Err(MembershipError::NothingToCancel));
    }

    // Reserved extension points

    #[test]
    fn parental_controls_available_on_family_and_pro() {
        assert!(membership_at(MembershipTier::Family)
            .configure_parental_controls()
            .is_ok());
        assert!(membership_at(MembershipTier::Pro)
            .configure_parental_controls()
            .is_ok());
    }

    #[test]
    fn parental_controls_rejected_elsewhere() {
        let result = membership_at(MembershipTier::Basic).configure_parental_controls();
        assert_eq!(
            result,
            Err(MembershipError::FeatureNotIncluded {
                feature: "parental_controls",
                tier: MembershipTier::Basic,
            })
        );
        assert!(free_membership().configure_parental_controls().is_err());
        assert!(membership_at(MembershipTier::Offline)
            .configure_parental_controls()
            .is_err());
    }

    #[test]
    fn offline_quota_available_on_offline_and_pro() {
        assert!(membership_at(MembershipTier::Offline)
            .adjust_offline_quota()
            .is_ok());
        assert!(membership_at(MembershipTier::Pro).adjust_offline_quota().is_ok());
    }

    #[test]
    fn offline_quota_rejected_elsewhere() {
        assert!(free_membership().adjust_offline_quota().is_err());
        assert!(membership_at(MembershipTier::Basic)
            .adjust_offline_quota()
            .is_err());
        assert!(membership_at(MembershipTier::Family)
            .adjust_offline_quota()
            .is_err());
    }

    // Serialization

    #[test]
    fn membership_round_trips_through_json() {
        let membership = membership_at(MembershipTier::Pro);
        let json = serde_json::to_string(&membership).unwrap();
        let restored: Membership = serde_json::from_str(&json).unwrap();
        assert_eq!(membership, restored);
    }
}
