//! Discounts
//!
//! The decision a discount function hands back to the host: which parts of the
//! cart are discounted, by how much, and how the host should combine the
//! result with other discounts.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use smallvec::SmallVec;
use thiserror::Error;

mod targets;

pub use targets::{DEFAULT_DELIVERY_GROUP_ID, DiscountTarget};

/// Errors specific to building discounts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiscountError {
    /// A discount must attach to at least one target.
    #[error("discount has no targets")]
    NoTargets,

    /// Percentages cannot be negative.
    #[error("percentage {0} is negative")]
    NegativePercentage(Decimal),
}

/// A percentage off, expressed in percent (`15` is 15% off).
///
/// Rendered as a normalised decimal string so the exact value crosses the
/// host boundary without binary float drift.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PercentageValue(Decimal);

impl PercentageValue {
    /// Create a percentage value.
    ///
    /// # Errors
    ///
    /// Returns `DiscountError::NegativePercentage` if `value` is below zero.
    pub fn new(value: Decimal) -> Result<Self, DiscountError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(DiscountError::NegativePercentage(value));
        }

        Ok(Self(value.normalize()))
    }

    /// Return the underlying decimal
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// The customer-facing label, e.g. `"15% off"`.
    pub fn message(&self) -> String {
        format!("{self}% off")
    }
}

impl fmt::Display for PercentageValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value(), f)
    }
}

impl Serialize for PercentageValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

/// The value of a discount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DiscountValue {
    /// Percentage off the targets
    Percentage {
        /// Percent off
        value: PercentageValue,
    },
}

impl From<PercentageValue> for DiscountValue {
    fn from(value: PercentageValue) -> Self {
        DiscountValue::Percentage { value }
    }
}

/// How the host combines the discounts it receives.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStrategy {
    /// Apply only the first eligible discount.
    First,

    /// Apply only the largest discount.
    Maximum,

    /// Apply every discount.
    All,
}

/// Discount targets; order and shipping discounts carry exactly one.
pub type Targets = SmallVec<[DiscountTarget; 1]>;

/// A single discount with at least one target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Discount {
    value: DiscountValue,
    targets: Targets,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl Discount {
    /// Create a new discount.
    ///
    /// # Errors
    ///
    /// Returns `DiscountError::NoTargets` if `targets` is empty.
    pub fn new(
        value: impl Into<DiscountValue>,
        targets: Targets,
        message: Option<String>,
    ) -> Result<Self, DiscountError> {
        if targets.is_empty() {
            return Err(DiscountError::NoTargets);
        }

        Ok(Self {
            value: value.into(),
            targets,
            message,
        })
    }

    /// Return the value
    pub fn value(&self) -> &DiscountValue {
        &self.value
    }

    /// Return the targets
    pub fn targets(&self) -> &[DiscountTarget] {
        &self.targets
    }

    /// Return the message, if any
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// The complete output of one evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Decision {
    discount_application_strategy: ApplicationStrategy,
    discounts: Vec<Discount>,
}

impl Decision {
    /// A decision that applies no discounts.
    pub fn empty(strategy: ApplicationStrategy) -> Self {
        Self {
            discount_application_strategy: strategy,
            discounts: Vec::new(),
        }
    }

    /// A decision applying a single discount.
    pub fn single(strategy: ApplicationStrategy, discount: Discount) -> Self {
        Self {
            discount_application_strategy: strategy,
            discounts: vec![discount],
        }
    }

    /// Return the application strategy
    pub fn strategy(&self) -> ApplicationStrategy {
        self.discount_application_strategy
    }

    /// Return the discounts
    pub fn discounts(&self) -> &[Discount] {
        &self.discounts
    }

    /// Whether this decision applies nothing.
    pub fn is_empty(&self) -> bool {
        self.discounts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use smallvec::smallvec;
    use testresult::TestResult;

    use super::*;

    fn percent(value: i64) -> Result<PercentageValue, DiscountError> {
        PercentageValue::new(Decimal::from(value))
    }

    #[test]
    fn percentage_rejects_negative_values() {
        assert_eq!(
            PercentageValue::new(Decimal::from(-3)),
            Err(DiscountError::NegativePercentage(Decimal::from(-3)))
        );
    }

    #[test]
    fn percentage_allows_zero_and_large_values() -> TestResult {
        assert_eq!(percent(0)?.to_string(), "0");
        assert_eq!(percent(250)?.to_string(), "250");

        Ok(())
    }

    #[test]
    fn percentage_renders_normalised() -> TestResult {
        assert_eq!(PercentageValue::new(Decimal::new(1500, 2))?.to_string(), "15");
        assert_eq!(PercentageValue::new(Decimal::new(1250, 2))?.to_string(), "12.5");
        assert_eq!(PercentageValue::new(Decimal::new(1250, 2))?.message(), "12.5% off");

        Ok(())
    }

    #[test]
    fn percentage_serializes_as_string() -> TestResult {
        let value = serde_json::to_value(PercentageValue::new(Decimal::new(333, 1))?)?;

        assert_eq!(value, json!("33.3"));

        Ok(())
    }

    #[test]
    fn discount_requires_targets() -> TestResult {
        let result = Discount::new(percent(10)?, SmallVec::new(), None);

        assert_eq!(result, Err(DiscountError::NoTargets));

        Ok(())
    }

    #[test]
    fn accessors_return_constructor_values() -> TestResult {
        let discount = Discount::new(
            percent(10)?,
            smallvec![DiscountTarget::order_subtotal()],
            Some("10% off".to_string()),
        )?;

        assert_eq!(
            discount.value(),
            &DiscountValue::Percentage { value: percent(10)? }
        );
        assert_eq!(discount.targets(), &[DiscountTarget::order_subtotal()]);
        assert_eq!(discount.message(), Some("10% off"));

        Ok(())
    }

    #[test]
    fn decision_serializes_to_host_schema() -> TestResult {
        let discount = Discount::new(
            percent(10)?,
            smallvec![DiscountTarget::order_subtotal()],
            Some("10% off".to_string()),
        )?;

        let decision = Decision::single(ApplicationStrategy::First, discount);

        assert_eq!(
            serde_json::to_value(&decision)?,
            json!({
                "discountApplicationStrategy": "FIRST",
                "discounts": [{
                    "value": { "percentage": { "value": "10" } },
                    "targets": [{ "orderSubtotal": { "excludedVariantIds": [] } }],
                    "message": "10% off"
                }]
            })
        );

        Ok(())
    }

    #[test]
    fn message_is_omitted_when_absent() -> TestResult {
        let discount = Discount::new(
            percent(5)?,
            smallvec![DiscountTarget::product_variant("gid://shopify/ProductVariant/1")],
            None,
        )?;

        let value = serde_json::to_value(Decision::single(ApplicationStrategy::Maximum, discount))?;

        assert_eq!(value["discountApplicationStrategy"], json!("MAXIMUM"));
        assert!(value["discounts"][0].get("message").is_none());

        Ok(())
    }

    #[test]
    fn empty_decision_keeps_strategy() -> TestResult {
        for (strategy, name) in [
            (ApplicationStrategy::First, "FIRST"),
            (ApplicationStrategy::Maximum, "MAXIMUM"),
            (ApplicationStrategy::All, "ALL"),
        ] {
            let decision = Decision::empty(strategy);

            assert!(decision.is_empty());
            assert_eq!(decision.strategy(), strategy);
            assert_eq!(
                serde_json::to_value(&decision)?,
                json!({ "discountApplicationStrategy": name, "discounts": [] })
            );
        }

        Ok(())
    }
}
