//! Discount Targets

use serde::Serialize;

/// Delivery group used when the host does not list any delivery groups.
pub const DEFAULT_DELIVERY_GROUP_ID: &str = "gid://shopify/CartDeliveryGroup/0";

/// The part of the order a discount attaches to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum DiscountTarget {
    /// The order subtotal, minus any excluded variants.
    OrderSubtotal {
        /// Variants excluded from the subtotal discount
        excluded_variant_ids: Vec<String>,
    },

    /// A product variant in the cart.
    ProductVariant {
        /// Variant ID
        id: String,
    },

    /// A delivery group's shipping rates.
    DeliveryGroup {
        /// Delivery group ID
        id: String,
    },
}

impl DiscountTarget {
    /// Target the whole order subtotal with nothing excluded.
    pub fn order_subtotal() -> Self {
        DiscountTarget::OrderSubtotal {
            excluded_variant_ids: Vec::new(),
        }
    }

    /// Target a product variant by ID.
    pub fn product_variant(id: impl Into<String>) -> Self {
        DiscountTarget::ProductVariant { id: id.into() }
    }

    /// Target a delivery group by ID.
    pub fn delivery_group(id: impl Into<String>) -> Self {
        DiscountTarget::DeliveryGroup { id: id.into() }
    }
}
