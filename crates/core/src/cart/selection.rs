//! Line Selection
//!
//! Composable, order-preserving selections over cart lines.

use std::num::NonZeroUsize;

use super::CartLine;

/// Product variant IDs of the lines that carry a product variant, in cart order.
///
/// Lines for any other kind of merchandise are skipped.
pub fn product_variant_ids<'a>(lines: &'a [CartLine]) -> impl Iterator<Item = &'a str> + 'a {
    lines
        .iter()
        .filter_map(|line| line.merchandise().product_variant_id())
}

/// Every item whose 1-based position is a multiple of `n`.
///
/// For `k` items this yields `k / n` of them, at positions `n, 2n, 3n, ...`.
pub fn every_nth<I: IntoIterator>(items: I, n: NonZeroUsize) -> impl Iterator<Item = I::Item> {
    items.into_iter().skip(n.get() - 1).step_by(n.get())
}
