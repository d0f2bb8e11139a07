//! Percentage Off
//!
//! Shared builder for functions that discount exactly one target by the
//! configured percentage.

use smallvec::smallvec;
use tracing::debug;

use crate::{
    configuration::PercentageConfiguration,
    discounts::{ApplicationStrategy, Decision, Discount, DiscountTarget},
};

/// Discount a single target by the configured percentage, labelled `"<n>% off"`.
///
/// Returns the empty decision for `strategy` if the configuration is not usable.
pub fn single_target(
    configuration: &PercentageConfiguration,
    strategy: ApplicationStrategy,
    target: impl FnOnce() -> DiscountTarget,
) -> Decision {
    let Some(percentage) = configuration.usable() else {
        debug!(?configuration, "percentage not configured");

        return Decision::empty(strategy);
    };

    match Discount::new(percentage, smallvec![target()], Some(percentage.message())) {
        Ok(discount) => Decision::single(strategy, discount),
        Err(error) => {
            debug!(%error, "discarding discount");

            Decision::empty(strategy)
        }
    }
}
