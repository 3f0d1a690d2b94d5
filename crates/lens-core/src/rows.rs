//! Deterministic ordering for the listing table.

use std::cmp::Ordering;

use crate::models::Listing;
use crate::numeric::coerce;

/// Sort the filtered listings into display order: descending by price, with
/// missing or unparsable prices treated as negative infinity so they land at
/// the bottom.
///
/// The sort is stable — listings with equal (or equally missing) prices keep
/// their relative order from the filtered input. Formatting of individual
/// fields is the renderer's concern; this only fixes the row sequence.
pub fn build_rows(filtered: &[Listing]) -> Vec<Listing> {
    let mut rows = filtered.to_vec();
    rows.sort_by(|a, b| {
        sort_price(b)
            .partial_cmp(&sort_price(a))
            .unwrap_or(Ordering::Equal)
    });
    rows
}

fn sort_price(listing: &Listing) -> f64 {
    let price = coerce(&listing.price);
    if price.is_finite() {
        price
    } else {
        f64::NEG_INFINITY
    }
}
