//! Tally
//!
//! Tally evaluates merchant-configured percentage-off discounts for a cart or
//! checkout. Each evaluation reads a raw configuration string and an immutable
//! cart snapshot and deterministically produces a discount decision, falling
//! back to an empty decision rather than failing.

pub mod cart;
pub mod configuration;
pub mod discounts;
pub mod functions;
pub mod output;
pub mod prelude;
