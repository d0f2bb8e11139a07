//! Tally prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartLine, DeliveryGroup, Input, Merchandise},
    configuration::{
        ConfigurationError, FromFields, PercentageConfiguration, VolumeConfiguration,
    },
    discounts::{
        ApplicationStrategy, DEFAULT_DELIVERY_GROUP_ID, Decision, Discount, DiscountError,
        DiscountTarget, DiscountValue, PercentageValue,
    },
    functions::{DiscountFunction, OrderDiscount, ProductVolumeDiscount, ShippingDiscount},
    output::OutputError,
};
