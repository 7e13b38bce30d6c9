//! Per-tier pricing and feature table.
//!
//! Every value here is fixed per tier. The table is the single source of
//! truth for costs, device caps, bonus-day grants, and feature flags;
//! membership instances never store these values themselves.

use super::MembershipTier;
use serde::{Deserialize, Serialize};

/// Pricing and features for a membership tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierBenefits {
    /// The tier these benefits apply to.
    pub tier: MembershipTier,
    /// Monthly subscription cost in whole currency units.
    pub monthly_cost: u32,
    /// Maximum simultaneous devices.
    pub max_devices: u32,
    /// Grace-period days granted on signup. None = no grant.
    pub bonus_days: Option<u16>,
    /// Whether parental control configuration is included.
    pub parental_controls: bool,
    /// Whether offline downloads are included.
    pub offline_downloads: bool,
}

impl TierBenefits {
    /// Get the benefits for a specific tier.
    ///
    /// # Tier Configuration
    ///
    /// | Tier | Cost | Devices | Bonus days | Parental | Offline |
    /// |------|------|---------|------------|----------|---------|
    /// | Free | 0 | 1 | - | No | No |
    /// | Basic | 3000 | 2 | - | No | No |
    /// | Family | 5000 | 5 | 7 | Yes | No |
    /// | Offline | 3500 | 2 | 7 | No | Yes |
    /// | Pro | 7000 | 6 | 15 | Yes | Yes |
    pub fn for_tier(tier: MembershipTier) -> Self {
        match tier {
            MembershipTier::Free => Self {
                tier,
                monthly_cost: 0,
                max_devices: 1,
                bonus_days: None,
                parental_controls: false,
                offline_downloads: false,
            },
            MembershipTier::Basic => Self {
                tier,
                monthly_cost: 3000,
                max_devices: 2,
                bonus_days: None,
                parental_controls: false,
                offline_downloads: false,
            },
            MembershipTier::Family => Self {
                tier,
                monthly_cost: 5000,
                max_devices: 5,
                bonus_days: Some(7),
                parental_controls: true,
                offline_downloads: false,
            },
            MembershipTier::Offline => Self {
                tier,
                monthly_cost: 3500,
                max_devices: 2, // device cap carried over from Basic
                bonus_days: Some(7),
                parental_controls: false,
                offline_downloads: true,
            },
            MembershipTier::Pro => Self {
                tier,
                monthly_cost: 7000,
                max_devices: 6,
                bonus_days: Some(15),
                parental_controls: true,
                offline_downloads: true,
            },
        }
    }

    /// Check if a device count exceeds this tier's cap.
    pub fn device_limit_reached(&self, active_devices: u32) -> bool {
        active_devices >= self.max_devices
    }
}
