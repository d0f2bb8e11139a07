//! Order Discount
//!
//! A percentage off the whole order subtotal.

use tracing::debug;

use crate::{
    cart::Cart,
    configuration::PercentageConfiguration,
    discounts::{ApplicationStrategy, Decision, DiscountTarget},
};

use super::{DiscountFunction, percentage_off};

/// Percentage off the order subtotal, with no variants excluded.
#[derive(Debug, Copy, Clone, Default)]
pub struct OrderDiscount;

impl DiscountFunction for OrderDiscount {
    type Configuration = PercentageConfiguration;

    const STRATEGY: ApplicationStrategy = ApplicationStrategy::First;

    fn evaluate(configuration: &PercentageConfiguration, cart: &Cart) -> Decision {
        debug!(subtotal = ?cart.subtotal(), "discounting order subtotal");

        percentage_off::single_target(configuration, Self::STRATEGY, DiscountTarget::order_subtotal)
    }
}
