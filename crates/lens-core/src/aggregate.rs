//! Statistical aggregation over the filtered listing set.

use std::collections::HashMap;
use std::hash::Hash;

use crate::models::Listing;
use crate::numeric::coerce;

/// Median of the finite values in `values`.
///
/// Non-finite entries are dropped before sorting; an empty (or all-NaN)
/// input yields `None`. For an even count the result is the arithmetic mean
/// of the two middle elements.
pub fn median(values: &[f64]) -> Option<f64> {
    let mut finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() {
        return None;
    }
    finite.sort_by(|a, b| a.partial_cmp(b).expect("finite values are ordered"));

    let mid = finite.len() / 2;
    if finite.len() % 2 == 1 {
        Some(finite[mid])
    } else {
        Some((finite[mid - 1] + finite[mid]) / 2.0)
    }
}

/// Group `items` by `key_fn`, preserving first-appearance order of keys and
/// insertion order within each group. Grouping implies no sorting.
pub fn group_by<T, K, F>(items: &[T], key_fn: F) -> Vec<(K, Vec<T>)>
where
    T: Clone,
    K: Eq + Hash + Clone,
    F: Fn(&T) -> K,
{
    let mut order: Vec<K> = Vec::new();
    let mut groups: HashMap<K, Vec<T>> = HashMap::new();

    for item in items {
        let key = key_fn(item);
        if !groups.contains_key(&key) {
            order.push(key.clone());
        }
        groups.entry(key).or_default().push(item.clone());
    }

    order
        .into_iter()
        .filter_map(|key| groups.remove(&key).map(|values| (key, values)))
        .collect()
}

/// Count listings per bedroom label.
///
/// The label is the bedroom count rendered as text when it coerces to a
/// finite number, else the literal `"Unknown"`. Labels appear in
/// first-appearance order.
pub fn bedroom_histogram(listings: &[Listing]) -> Vec<(String, usize)> {
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();

    for listing in listings {
        let beds = coerce(&listing.bedrooms);
        let label = if beds.is_finite() {
            format_count(beds)
        } else {
            "Unknown".to_string()
        };
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

/// Median price per bedroom count, ascending by bedroom count.
///
/// Only listings with both a finite price and a finite bedroom count
/// participate; groups whose prices all drop out are omitted. Unlike
/// [`group_by`], the result is sorted numerically because it is presented on
/// a numeric axis.
pub fn median_price_by_bedrooms(listings: &[Listing]) -> Vec<(u32, f64)> {
    let eligible: Vec<(u32, f64)> = listings
        .iter()
        .filter_map(|listing| {
            let beds = coerce(&listing.bedrooms);
            let price = coerce(&listing.price);
            (beds.is_finite() && price.is_finite()).then_some((beds as u32, price))
        })
        .collect();

    let mut result: Vec<(u32, f64)> = group_by(&eligible, |(beds, _)| *beds)
        .into_iter()
        .filter_map(|(beds, pairs)| {
            let prices: Vec<f64> = pairs.iter().map(|(_, price)| *price).collect();
            median(&prices).map(|m| (beds, m))
        })
        .collect();
    result.sort_by_key(|(beds, _)| *beds);
    result
}

/// Render a count-like float as text: `3.0` → `"3"`, `2.5` → `"2.5"`.
pub(crate) fn format_count(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
