//! Chart view-model builders.
//!
//! Each builder is a pure function from the filtered listing set to a
//! `{labels, values}` (or scatter-point) structure that a renderer can paint
//! without further computation. Missing values are excluded here, per chart,
//! so renderers never see NaN.

use std::cmp::Ordering;

use crate::aggregate;
use crate::models::Listing;
use crate::numeric::coerce;
use crate::scale::normalize_scale;

/// Parallel label/value arrays for a bar or doughnut chart.
///
/// `labels` hold the shortened axis form; `full_labels` keep the untruncated
/// text for tooltips and detail lines.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BarSeries {
    pub labels: Vec<String>,
    pub full_labels: Vec<String>,
    pub values: Vec<f64>,
}

/// One point of the price-vs-land scatter.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    pub label: String,
}

/// Scatter-chart view-model. Points carry no inherent order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScatterSeries {
    pub points: Vec<ScatterPoint>,
}

/// Price-per-sqm bars: strictly positive finite values, sorted descending,
/// rescaled through the unit-normalization heuristic.
pub fn price_per_sqm_series(filtered: &[Listing]) -> BarSeries {
    let items = labelled_values(filtered, |l| coerce(&l.price_per_sqm), |v| v > 0.0);
    let values: Vec<f64> = items.iter().map(|(_, v)| *v).collect();
    let scaled = normalize_scale(&values);

    BarSeries {
        labels: items.iter().map(|(full, _)| short_label(full)).collect(),
        full_labels: items.into_iter().map(|(full, _)| full).collect(),
        values: scaled.scaled_values,
    }
}

/// Days-on-market bars: values `>= 0`, sorted descending, no rescaling.
pub fn days_on_market_series(filtered: &[Listing]) -> BarSeries {
    let items = labelled_values(filtered, |l| coerce(&l.days_on_market), |v| v >= 0.0);

    BarSeries {
        labels: items.iter().map(|(full, _)| short_label(full)).collect(),
        values: items.iter().map(|(_, v)| *v).collect(),
        full_labels: items.into_iter().map(|(full, _)| full).collect(),
    }
}

/// Bedroom-mix doughnut: histogram counts in histogram key order.
pub fn bedroom_mix_series(filtered: &[Listing]) -> BarSeries {
    let hist = aggregate::bedroom_histogram(filtered);
    BarSeries {
        labels: hist.iter().map(|(label, _)| label.clone()).collect(),
        full_labels: hist.iter().map(|(label, _)| label.clone()).collect(),
        values: hist.into_iter().map(|(_, count)| count as f64).collect(),
    }
}

/// Median-price-by-bedrooms bars, ascending by bedroom count.
pub fn median_price_by_bedrooms_series(filtered: &[Listing]) -> BarSeries {
    let medians = aggregate::median_price_by_bedrooms(filtered);
    BarSeries {
        labels: medians.iter().map(|(beds, _)| beds.to_string()).collect(),
        full_labels: medians
            .iter()
            .map(|(beds, _)| format!("{beds} bedrooms"))
            .collect(),
        values: medians.into_iter().map(|(_, price)| price).collect(),
    }
}

/// Price-vs-land scatter: one point per listing where both land size and
/// price are strictly positive finite. Unsorted.
pub fn price_vs_land_series(filtered: &[Listing]) -> ScatterSeries {
    let points = filtered
        .iter()
        .filter_map(|listing| {
            let x = coerce(&listing.land_size_sqm);
            let y = coerce(&listing.price);
            (x.is_finite() && y.is_finite() && x > 0.0 && y > 0.0).then(|| ScatterPoint {
                x,
                y,
                label: listing.display_label().to_string(),
            })
        })
        .collect();
    ScatterSeries { points }
}

/// Shorten a full address label for a crowded axis.
///
/// Keeps the part before the first comma (dropping suburb/state), then the
/// last two whitespace-separated tokens; anything longer than 16 characters
/// is cut to 14 and given an ellipsis.
pub fn short_label(full: &str) -> String {
    let base = full.split(',').next().unwrap_or_default().trim();
    let tokens: Vec<&str> = base.split_whitespace().collect();
    let start = tokens.len().saturating_sub(2);
    let short = tokens[start..].join(" ");

    if short.chars().count() > 16 {
        let truncated: String = short.chars().take(14).collect();
        format!("{truncated}…")
    } else {
        short
    }
}

/// Shared shape of the two per-listing bar series: pick a value per listing,
/// keep the ones passing `keep`, sort descending (stable).
fn labelled_values(
    filtered: &[Listing],
    value_fn: impl Fn(&Listing) -> f64,
    keep: impl Fn(f64) -> bool,
) -> Vec<(String, f64)> {
    let mut items: Vec<(String, f64)> = filtered
        .iter()
        .filter_map(|listing| {
            let value = value_fn(listing);
            (value.is_finite() && keep(value))
                .then(|| (listing.display_label().to_string(), value))
        })
        .collect();
    items.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Address, RawNumber};

    fn listing(street: &str, field: &str, value: RawNumber) -> Listing {
        let mut l = Listing {
            address: Address {
                street: Some(street.to_string()),
                ..Address::default()
            },
            area_name: None,
            property_type: None,
            bedrooms: RawNumber::Absent,
            bathrooms: RawNumber::Absent,
            garage_spaces: RawNumber::Absent,
            price: RawNumber::Absent,
            land_size_sqm: RawNumber::Absent,
            price_per_sqm: RawNumber::Absent,
            price_per_bedroom: RawNumber::Absent,
            listing_date: None,
            days_on_market: RawNumber::Absent,
            coordinates: None,
            gnaf_pid: None,
        };
        match field {
            "price_per_sqm" => l.price_per_sqm = value,
            "days_on_market" => l.days_on_market = value,
            "bedrooms" => l.bedrooms = value,
            other => panic!("unexpected field {other}"),
        }
        l
    }

    // ── short_label ───────────────────────────────────────────────────────

    #[test]
    fn test_short_label_drops_suburb_and_number() {
        assert_eq!(
            short_label("3 Dalton Close, Belmont North NSW"),
            "Dalton Close"
        );
    }

    #[test]
    fn test_short_label_empty_input() {
        assert_eq!(short_label(""), "");
    }

    #[test]
    fn test_short_label_single_token() {
        assert_eq!(short_label("Belmont"), "Belmont");
    }

    #[test]
    fn test_short_label_truncates_long_names() {
        let label = short_label("1 Extraordinarily Longstreetname, Somewhere");
        assert_eq!(label, "Extraordinaril…");
        assert_eq!(label.chars().count(), 15);
    }

    // ── price_per_sqm_series ──────────────────────────────────────────────

    #[test]
    fn test_price_per_sqm_sorted_descending_and_scaled() {
        let listings = vec![
            listing("1 Low St", "price_per_sqm", RawNumber::Number(0.8)),
            listing("2 High St", "price_per_sqm", RawNumber::Number(1.5)),
        ];
        let series = price_per_sqm_series(&listings);
        // Max 1.5 < 20 → thousands-per-sqm, scaled by 1000.
        assert_eq!(series.values, vec![1500.0, 800.0]);
        assert_eq!(series.full_labels, vec!["2 High St", "1 Low St"]);
        assert_eq!(series.labels, vec!["High St", "Low St"]);
    }

    #[test]
    fn test_price_per_sqm_drops_nonpositive_and_missing() {
        let listings = vec![
            listing("1 A St", "price_per_sqm", RawNumber::Number(0.0)),
            listing("2 B St", "price_per_sqm", RawNumber::Number(-5.0)),
            listing("3 C St", "price_per_sqm", RawNumber::Absent),
            listing("4 D St", "price_per_sqm", RawNumber::Number(1200.0)),
        ];
        let series = price_per_sqm_series(&listings);
        assert_eq!(series.full_labels, vec!["4 D St"]);
        assert_eq!(series.values, vec![1200.0]);
    }

    // ── days_on_market_series ─────────────────────────────────────────────

    #[test]
    fn test_dom_keeps_zero_and_sorts_descending() {
        let listings = vec![
            listing("1 A St", "days_on_market", RawNumber::Number(0.0)),
            listing("2 B St", "days_on_market", RawNumber::Number(14.0)),
            listing("3 C St", "days_on_market", RawNumber::Number(-3.0)),
        ];
        let series = days_on_market_series(&listings);
        assert_eq!(series.values, vec![14.0, 0.0]);
        assert_eq!(series.full_labels, vec!["2 B St", "1 A St"]);
    }

    #[test]
    fn test_dom_is_not_unit_normalized() {
        // Small values would trip the currency heuristic if it were applied.
        let listings = vec![listing("1 A St", "days_on_market", RawNumber::Number(5.0))];
        let series = days_on_market_series(&listings);
        assert_eq!(series.values, vec![5.0]);
    }

    // ── bedroom_mix_series ────────────────────────────────────────────────

    #[test]
    fn test_bedroom_mix_parallel_arrays() {
        let listings = vec![
            listing("1 A St", "bedrooms", RawNumber::Number(3.0)),
            listing("2 B St", "bedrooms", RawNumber::Absent),
            listing("3 C St", "bedrooms", RawNumber::Number(3.0)),
        ];
        let series = bedroom_mix_series(&listings);
        assert_eq!(series.labels, vec!["3", "Unknown"]);
        assert_eq!(series.values, vec![2.0, 1.0]);
    }

    // ── median_price_by_bedrooms_series ───────────────────────────────────

    #[test]
    fn test_median_series_ascending_labels() {
        let mut a = listing("1 A St", "bedrooms", RawNumber::Number(4.0));
        a.price = RawNumber::Number(900_000.0);
        let mut b = listing("2 B St", "bedrooms", RawNumber::Number(3.0));
        b.price = RawNumber::Number(600_000.0);
        let series = median_price_by_bedrooms_series(&[a, b]);
        assert_eq!(series.labels, vec!["3", "4"]);
        assert_eq!(series.values, vec![600_000.0, 900_000.0]);
    }

    // ── price_vs_land_series ──────────────────────────────────────────────

    #[test]
    fn test_scatter_requires_both_axes_positive() {
        let mut good = listing("1 A St", "bedrooms", RawNumber::Absent);
        good.land_size_sqm = RawNumber::Number(607.0);
        good.price = RawNumber::Number(950_000.0);

        let mut no_land = listing("2 B St", "bedrooms", RawNumber::Absent);
        no_land.price = RawNumber::Number(500_000.0);

        let mut zero_land = listing("3 C St", "bedrooms", RawNumber::Absent);
        zero_land.land_size_sqm = RawNumber::Number(0.0);
        zero_land.price = RawNumber::Number(500_000.0);

        let series = price_vs_land_series(&[good, no_land, zero_land]);
        assert_eq!(series.points.len(), 1);
        assert_eq!(series.points[0].x, 607.0);
        assert_eq!(series.points[0].y, 950_000.0);
        assert_eq!(series.points[0].label, "1 A St");
    }

    #[test]
    fn test_scatter_coerces_string_fields() {
        let mut l = listing("1 A St", "bedrooms", RawNumber::Absent);
        l.land_size_sqm = RawNumber::Text("613".to_string());
        l.price = RawNumber::Text("925,000".to_string());
        let series = price_vs_land_series(&[l]);
        assert_eq!(series.points[0].x, 613.0);
        assert_eq!(series.points[0].y, 925_000.0);
    }

    // ── empty input ───────────────────────────────────────────────────────

    #[test]
    fn test_all_builders_accept_empty_input() {
        assert!(price_per_sqm_series(&[]).values.is_empty());
        assert!(days_on_market_series(&[]).values.is_empty());
        assert!(bedroom_mix_series(&[]).values.is_empty());
        assert!(median_price_by_bedrooms_series(&[]).values.is_empty());
        assert!(price_vs_land_series(&[]).points.is_empty());
    }
}
