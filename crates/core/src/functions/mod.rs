//! Discount Functions
//!
//! Each function reads its configuration from the input's metafield, decides
//! which parts of the cart to discount, and returns a decision. Evaluation is
//! pure: the same input always yields the same decision.

use crate::{
    cart::{Cart, Input},
    configuration::{self, FromFields},
    discounts::{ApplicationStrategy, Decision},
};

pub mod order;
pub mod percentage_off;
pub mod product;
pub mod shipping;

pub use order::OrderDiscount;
pub use product::ProductVolumeDiscount;
pub use shipping::ShippingDiscount;

/// A discount function invoked once per cart or checkout event.
pub trait DiscountFunction {
    /// Configuration record read from the metafield
    type Configuration: FromFields;

    /// Strategy reported with every decision, including the empty one.
    const STRATEGY: ApplicationStrategy;

    /// Evaluate an already-parsed configuration against the cart.
    fn evaluate(configuration: &Self::Configuration, cart: &Cart) -> Decision;

    /// Parse the input's configuration and evaluate it.
    fn run(input: &Input) -> Decision {
        let configuration = configuration::parse(input.configuration());

        Self::evaluate(&configuration, input.cart())
    }

    /// The decision returned whenever there is nothing to discount.
    fn empty() -> Decision {
        Decision::empty(Self::STRATEGY)
    }
}
