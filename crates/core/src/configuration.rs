//! Configuration
//!
//! Merchant configuration arrives as a free-form string stored in a metafield.
//! Parsing is total: anything that is not a JSON object yields a configuration
//! with every field absent. Whether a configuration is usable is decided
//! separately by each record's gate.

use std::{num::NonZeroUsize, str::FromStr};

use rust_decimal::{Decimal, prelude::ToPrimitive};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, warn};

use crate::discounts::PercentageValue;

/// Errors raised while reading a raw configuration payload.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// The payload was not valid JSON.
    #[error("configuration is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The payload was valid JSON but not an object.
    #[error("configuration must be a JSON object")]
    NotAnObject,
}

/// A configuration record that can be read from the fields of a JSON object.
pub trait FromFields: Default {
    /// Build the record from the object's fields, treating anything unreadable as absent.
    fn from_fields(fields: &Map<String, Value>) -> Self;
}

/// Read the raw payload into a JSON object.
///
/// An absent payload reads as the empty object.
///
/// # Errors
///
/// Returns an error if:
/// - the payload is not valid JSON (`ConfigurationError::Malformed`).
/// - the payload is valid JSON but not an object (`ConfigurationError::NotAnObject`).
pub fn try_fields(raw: Option<&str>) -> Result<Map<String, Value>, ConfigurationError> {
    let Some(raw) = raw else {
        return Ok(Map::new());
    };

    match serde_json::from_str(raw)? {
        Value::Object(fields) => Ok(fields),
        _ => Err(ConfigurationError::NotAnObject),
    }
}

/// Parse a raw configuration payload, never failing.
///
/// Malformed payloads are logged and normalised to the default (all fields absent).
pub fn parse<C: FromFields>(raw: Option<&str>) -> C {
    match try_fields(raw) {
        Ok(fields) => C::from_fields(&fields),
        Err(error) => {
            debug!(%error, "treating configuration as unset");

            C::default()
        }
    }
}

/// Configuration for the order and shipping percentage-off functions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PercentageConfiguration {
    /// Percentage off, if configured.
    pub percentage: Option<Decimal>,
}

impl PercentageConfiguration {
    /// Return the percentage if the configuration is usable.
    pub fn usable(&self) -> Option<PercentageValue> {
        positive_percentage(self.percentage)
    }
}

impl FromFields for PercentageConfiguration {
    fn from_fields(fields: &Map<String, Value>) -> Self {
        Self {
            percentage: decimal_field(fields, "percentage"),
        }
    }
}

/// Configuration for the "every Nth line" volume function.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VolumeConfiguration {
    /// Line interval, if configured.
    pub quantity: Option<Decimal>,

    /// Percentage off, if configured.
    pub percentage: Option<Decimal>,
}

impl VolumeConfiguration {
    /// Return the line interval and percentage if the configuration is usable.
    ///
    /// The interval must be a whole number of at least one. Intervals beyond
    /// `usize::MAX` saturate, since no cart can hold that many lines.
    pub fn usable(&self) -> Option<(NonZeroUsize, PercentageValue)> {
        let quantity = self
            .quantity
            .filter(|quantity| {
                quantity.is_integer() && quantity.is_sign_positive() && !quantity.is_zero()
            })
            .and_then(|quantity| NonZeroUsize::new(quantity.to_usize().unwrap_or(usize::MAX)))?;

        Some((quantity, positive_percentage(self.percentage)?))
    }
}

impl FromFields for VolumeConfiguration {
    fn from_fields(fields: &Map<String, Value>) -> Self {
        Self {
            quantity: decimal_field(fields, "quantity"),
            percentage: decimal_field(fields, "percentage"),
        }
    }
}

fn positive_percentage(percentage: Option<Decimal>) -> Option<PercentageValue> {
    percentage
        .filter(|percentage| percentage.is_sign_positive() && !percentage.is_zero())
        .and_then(|percentage| PercentageValue::new(percentage).ok())
}

fn decimal_field(fields: &Map<String, Value>, key: &str) -> Option<Decimal> {
    let decimal = fields.get(key).and_then(decimal_from_value);

    if decimal.is_none() && fields.contains_key(key) {
        debug!(key, "ignoring non-numeric configuration field");
    }

    decimal
}

/// Read a JSON number or numeric string as an exact decimal.
///
/// Numbers outside the 96-bit `Decimal` range read as absent.
fn decimal_from_value(value: &Value) -> Option<Decimal> {
    let text = match value {
        Value::Number(number) => number.to_string(),
        Value::String(text) => text.trim().to_owned(),
        _ => return None,
    };

    let decimal = Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok();

    if decimal.is_none() && value.is_number() {
        warn!(value = %text, "configuration number is outside the supported decimal range");
    }

    decimal.map(|decimal| decimal.normalize())
}
