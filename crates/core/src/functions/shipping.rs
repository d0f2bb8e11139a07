//! Shipping Discount
//!
//! A percentage off the shipping of the cart's first delivery group.

use crate::{
    cart::{Cart, DeliveryGroup},
    configuration::PercentageConfiguration,
    discounts::{ApplicationStrategy, DEFAULT_DELIVERY_GROUP_ID, Decision, DiscountTarget},
};

use super::{DiscountFunction, percentage_off};

/// Percentage off shipping for a single delivery group.
#[derive(Debug, Copy, Clone, Default)]
pub struct ShippingDiscount;

impl ShippingDiscount {
    /// The delivery group to discount: the cart's first, or the default group
    /// when the host lists none.
    pub fn target(cart: &Cart) -> DiscountTarget {
        let id = cart
            .delivery_groups()
            .first()
            .map_or(DEFAULT_DELIVERY_GROUP_ID, DeliveryGroup::id);

        DiscountTarget::delivery_group(id)
    }
}

impl DiscountFunction for ShippingDiscount {
    type Configuration = PercentageConfiguration;

    const STRATEGY: ApplicationStrategy = ApplicationStrategy::First;

    fn evaluate(configuration: &PercentageConfiguration, cart: &Cart) -> Decision {
        percentage_off::single_target(configuration, Self::STRATEGY, || Self::target(cart))
    }
}
