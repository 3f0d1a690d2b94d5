//! Fetch-time summary statistics.
//!
//! Computed once over the full (unfiltered) listing set at ingestion and
//! displayed verbatim by the summary panel. The charts recompute their own
//! aggregates from the filtered subset instead of reusing these.

use chrono::{DateTime, Utc};
use lens_core::aggregate::{bedroom_histogram, median};
use lens_core::models::{Listing, Summary, SummarySource};
use lens_core::numeric::coerce;

/// Build the summary for a freshly fetched listing set.
pub fn build_summary(
    listings: &[Listing],
    suburb: &str,
    property_type: Option<&str>,
    source: SummarySource,
    fetched_at: DateTime<Utc>,
) -> Summary {
    let prices: Vec<f64> = listings.iter().map(|l| coerce(&l.price)).collect();
    let per_sqm: Vec<f64> = listings.iter().map(|l| coerce(&l.price_per_sqm)).collect();
    let dom: Vec<f64> = listings.iter().map(|l| coerce(&l.days_on_market)).collect();

    // Unlike the chart histogram, the summary mix only counts listings whose
    // bedroom count is known.
    let bedroom_mix: Vec<(String, usize)> = bedroom_histogram(listings)
        .into_iter()
        .filter(|(label, _)| label != "Unknown")
        .collect();

    let type_mix = count_hist(listings.iter().filter_map(|l| l.property_type.clone()));

    Summary {
        count: listings.len(),
        median_price: median(&prices),
        median_price_per_sqm: median(&per_sqm),
        median_dom: median(&dom),
        bedroom_mix,
        type_mix,
        suburb: suburb.to_string(),
        property_type: property_type.map(str::to_string),
        source,
        fetched_at_utc: fetched_at,
    }
}

/// Count occurrences per label, first-appearance order.
fn count_hist(labels: impl Iterator<Item = String>) -> Vec<(String, usize)> {
    let mut order: Vec<String> = Vec::new();
    let mut counts: std::collections::HashMap<String, usize> = std::collections::HashMap::new();
    for label in labels {
        if !counts.contains_key(&label) {
            order.push(label.clone());
        }
        *counts.entry(label).or_insert(0) += 1;
    }
    order
        .into_iter()
        .filter_map(|label| counts.remove(&label).map(|count| (label, count)))
        .collect()
}
