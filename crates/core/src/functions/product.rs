//! Product Volume Discount
//!
//! A percentage off every Nth product variant line in the cart. Positions are
//! counted over product variant lines only, in cart order; line quantities do
//! not contribute.

use smallvec::SmallVec;
use tracing::{debug, warn};

use crate::{
    cart::{
        Cart,
        selection::{every_nth, product_variant_ids},
    },
    configuration::VolumeConfiguration,
    discounts::{ApplicationStrategy, Decision, Discount, DiscountTarget},
};

use super::DiscountFunction;

/// Percentage off every Nth product variant line.
#[derive(Debug, Copy, Clone, Default)]
pub struct ProductVolumeDiscount;

impl DiscountFunction for ProductVolumeDiscount {
    type Configuration = VolumeConfiguration;

    const STRATEGY: ApplicationStrategy = ApplicationStrategy::Maximum;

    fn evaluate(configuration: &VolumeConfiguration, cart: &Cart) -> Decision {
        let Some((quantity, percentage)) = configuration.usable() else {
            debug!(?configuration, "volume discount not configured");

            return Self::empty();
        };

        let targets: SmallVec<_> = every_nth(product_variant_ids(cart.lines()), quantity)
            .map(DiscountTarget::product_variant)
            .collect();

        match Discount::new(percentage, targets, None) {
            Ok(discount) => Decision::single(Self::STRATEGY, discount),
            Err(error) => {
                warn!(
                    %error,
                    eligible_lines = product_variant_ids(cart.lines()).count(),
                    units = cart.lines().iter().map(|line| u64::from(line.quantity())).sum::<u64>(),
                    quantity = quantity.get(),
                    "no cart lines qualify for volume discount"
                );

                Self::empty()
            }
        }
    }
}
