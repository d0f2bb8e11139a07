//! Cart
//!
//! A read-only snapshot of the cart or checkout that triggered an evaluation,
//! deserialized from the host's input query.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use serde_json::Value;

pub mod selection;

/// The input query handed to a discount function by the host.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Input {
    #[serde(default)]
    discount_node: Option<DiscountNode>,
    #[serde(default)]
    cart: Cart,
}

impl Input {
    /// Create an input from a raw configuration payload and a cart.
    pub fn new(configuration: Option<impl Into<String>>, cart: Cart) -> Self {
        Input {
            discount_node: Some(DiscountNode {
                metafield: configuration.map(|value| Metafield {
                    value: Some(value.into()),
                }),
            }),
            cart,
        }
    }

    /// The raw configuration payload, if the discount has one.
    pub fn configuration(&self) -> Option<&str> {
        self.discount_node
            .as_ref()?
            .metafield
            .as_ref()?
            .value
            .as_deref()
    }

    /// Return the cart
    pub fn cart(&self) -> &Cart {
        &self.cart
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct DiscountNode {
    #[serde(default)]
    metafield: Option<Metafield>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct Metafield {
    #[serde(default)]
    value: Option<String>,
}

/// Cart
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    #[serde(default)]
    lines: Vec<CartLine>,
    #[serde(default)]
    delivery_groups: Vec<DeliveryGroup>,
    #[serde(default, deserialize_with = "lenient")]
    cost: Option<CartCost>,
}

impl Cart {
    /// Create a cart with the given lines and no delivery groups.
    pub fn with_lines(lines: impl Into<Vec<CartLine>>) -> Self {
        Cart {
            lines: lines.into(),
            ..Cart::default()
        }
    }

    /// Add delivery groups to the cart.
    #[must_use]
    pub fn with_delivery_groups(mut self, delivery_groups: impl Into<Vec<DeliveryGroup>>) -> Self {
        self.delivery_groups = delivery_groups.into();
        self
    }

    /// Return the lines in cart order
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Return the delivery groups
    pub fn delivery_groups(&self) -> &[DeliveryGroup] {
        &self.delivery_groups
    }

    /// The cart subtotal, when the host provides it.
    pub fn subtotal(&self) -> Option<Decimal> {
        Some(self.cost.as_ref()?.subtotal_amount.as_ref()?.amount)
    }
}

/// Read an optional section that nothing depends on, treating a malformed one as absent.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;

    Ok(serde_json::from_value(value).ok())
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CartCost {
    #[serde(default)]
    subtotal_amount: Option<MoneyAmount>,
}

#[derive(Debug, Clone, Deserialize)]
struct MoneyAmount {
    amount: Decimal,
}

/// A single cart line.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CartLine {
    #[serde(default = "CartLine::default_quantity")]
    quantity: u32,
    merchandise: Merchandise,
}

impl CartLine {
    /// Create a cart line.
    pub fn new(merchandise: Merchandise, quantity: u32) -> Self {
        CartLine {
            quantity,
            merchandise,
        }
    }

    /// A single unit of a product variant.
    pub fn product_variant(id: impl Into<String>) -> Self {
        CartLine::new(Merchandise::ProductVariant { id: id.into() }, 1)
    }

    /// Return the quantity
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Return the merchandise
    pub fn merchandise(&self) -> &Merchandise {
        &self.merchandise
    }

    fn default_quantity() -> u32 {
        1
    }
}

/// What a cart line is for, discriminated by the host's `__typename`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "__typename")]
pub enum Merchandise {
    /// A product variant that can be targeted by product discounts.
    ProductVariant {
        /// Variant ID
        id: String,
    },

    /// Any other kind of merchandise.
    #[serde(other)]
    Other,
}

impl Merchandise {
    /// The variant ID if this is a product variant.
    pub fn product_variant_id(&self) -> Option<&str> {
        match self {
            Merchandise::ProductVariant { id } => Some(id),
            Merchandise::Other => None,
        }
    }
}

/// A delivery group in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeliveryGroup {
    id: String,
}

impl DeliveryGroup {
    /// Create a delivery group.
    pub fn new(id: impl Into<String>) -> Self {
        DeliveryGroup { id: id.into() }
    }

    /// Return the ID
    pub fn id(&self) -> &str {
        &self.id
    }
}
