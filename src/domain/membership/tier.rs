//! Membership tier definitions and transition rules.
//!
//! The tier set is closed: Free plus four paid tiers. Paid tiers are
//! addressed by a fixed numeric change code (1 = Basic, 2 = Family,
//! 3 = Offline, 4 = Pro); Free has no code because it is only ever a
//! starting point or the result of cancellation, never a change target.

use crate::domain::foundation::StateMachine;
use serde::{Deserialize, Serialize};

/// Membership subscription tier.
///
/// Determines monthly cost, device limits, and feature access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MembershipTier {
    /// Free tier - single device, no paid features.
    Free,

    /// Basic paid tier - two devices.
    Basic,

    /// Family tier - five devices, parental controls.
    Family,

    /// Offline tier - two devices, offline downloads.
    Offline,

    /// Pro tier - six devices, parental controls and offline downloads.
    Pro,
}

impl MembershipTier {
    /// Maps a numeric change code to its paid tier.
    ///
    /// Codes outside 1-4 have no tier and return `None`.
    pub fn from_change_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(MembershipTier::Basic),
            2 => Some(MembershipTier::Family),
            3 => Some(MembershipTier::Offline),
            4 => Some(MembershipTier::Pro),
            _ => None,
        }
    }

    /// Returns the numeric change code for this tier, `None` for Free.
    pub fn change_code(&self) -> Option<u8> {
        match self {
            MembershipTier::Free => None,
            MembershipTier::Basic => Some(1),
            MembershipTier::Family => Some(2),
            MembershipTier::Offline => Some(3),
            MembershipTier::Pro => Some(4),
        }
    }

    /// Returns true if this tier is a paid tier.
    pub fn is_paid(&self) -> bool {
        !matches!(self, MembershipTier::Free)
    }

    /// Returns the display name for this tier.
    pub fn display_name(&self) -> &'static str {
        match self {
            MembershipTier::Free => "Free",
            MembershipTier::Basic => "Basic",
            MembershipTier::Family => "Family",
            MembershipTier::Offline => "Offline",
            MembershipTier::Pro => "Pro",
        }
    }
}

impl std::fmt::Display for MembershipTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl StateMachine for MembershipTier {
    /// A subscriber may move to any paid tier other than the current one.
    /// Free is never a transition target here; it is reached only through
    /// cancellation on the aggregate.
    fn can_transition_to(&self, target: &Self) -> bool {
        use MembershipTier::*;
        matches!(
            (self, target),
            // From FREE
            (Free, Basic)
                | (Free, Family)
                | (Free, Offline)
                | (Free, Pro)
            // From BASIC
                | (Basic, Family)
                | (Basic, Offline)
                | (Basic, Pro)
            // From FAMILY
                | (Family, Basic)
                | (Family, Offline)
                | (Family, Pro)
            // From OFFLINE
                | (Offline, Basic)
                | (Offline, Family)
                | (Offline, Pro)
            // From PRO
                | (Pro, Basic)
                | (Pro, Family)
                | (Pro, Offline)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use MembershipTier::*;
        match self {
            Free => vec![Basic, Family, Offline, Pro],
            Basic => vec![Family, Offline, Pro],
            Family => vec![Basic, Offline, Pro],
            Offline => vec![Basic, Family, Pro],
            Pro => vec![Basic, Family, Offline],
        }
    }
}
