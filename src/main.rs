//! Demonstration driver for the membership tier model.
//!
//! Walks one subscriber through the full tier chain and prints the tier
//! after each step: Free, Basic, Family, Offline, Pro, then back to Free
//! via cancellation.

use plan_shift::config::AppConfig;
use plan_shift::domain::foundation::{PaymentCard, SubscriberEmail};
use plan_shift::domain::membership::Membership;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    let email = SubscriberEmail::new(config.demo.subscriber_email)?;
    let card = PaymentCard::new(config.demo.payment_card)?;

    info!(subscriber = %email, "starting tier walkthrough");

    let membership = Membership::free(email, card);
    println!("{}", membership.tier());

    let membership = membership.change_subscription(1);
    println!("{}", membership.tier());

    let membership = membership.change_subscription(2);
    println!("{}", membership.tier());

    let membership = membership.change_subscription(3);
    println!("{}", membership.tier());

    let membership = membership.change_subscription(4);
    println!("{}", membership.tier());

    let membership = membership.cancel_subscription()?;
    println!("{}", membership.tier());

    info!(tier = %membership.tier(), "walkthrough complete");
    Ok(())
}
