//! Plan Shift - Membership tier transition model
//!
//! This crate models the subscription tiers of a streaming-style service
//! and the rules for moving between them: upgrades and downgrades by
//! numeric change code, and cancellation back to the free tier.

pub mod config;
pub mod domain;
