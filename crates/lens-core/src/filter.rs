//! Free-text filtering of the listing set.

use crate::models::Listing;

/// Derive the filtered view of `raw` for a search query.
///
/// The query is trimmed and lowercased; an empty query returns a copy of
/// `raw` in its original order. Otherwise each listing's haystack is built
/// from street, property type, area name, suburb and state (absent fields
/// skipped) joined with single spaces and lowercased, and the listing is kept
/// iff the haystack contains the query as a substring.
///
/// Pure and deterministic: repeated calls with the same inputs yield the same
/// output, and filtering an already-filtered set again is a no-op.
pub fn apply_search(raw: &[Listing], query: &str) -> Vec<Listing> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return raw.to_vec();
    }

    raw.iter()
        .filter(|listing| haystack(listing).contains(&needle))
        .cloned()
        .collect()
}

fn haystack(listing: &Listing) -> String {
    [
        listing.address.street.as_deref(),
        listing.property_type.as_deref(),
        listing.area_name.as_deref(),
        listing.address.suburb.as_deref(),
        listing.address.state.as_deref(),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(" ")
    .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Address;

    fn listing(street: &str, property_type: &str, suburb: &str) -> Listing {
        Listing {
            address: Address {
                street: Some(street.to_string()),
                suburb: Some(suburb.to_string()),
                state: Some("NSW".to_string()),
                sa1: None,
            },
            area_name: Some(format!("{street}, {suburb}, NSW")),
            property_type: Some(property_type.to_string()),
            bedrooms: Default::default(),
            bathrooms: Default::default(),
            garage_spaces: Default::default(),
            price: Default::default(),
            land_size_sqm: Default::default(),
            price_per_sqm: Default::default(),
            price_per_bedroom: Default::default(),
            listing_date: None,
            days_on_market: Default::default(),
            coordinates: None,
            gnaf_pid: None,
        }
    }

    fn sample_set() -> Vec<Listing> {
        vec![
            listing("3 Dalton Close", "House", "Belmont North"),
            listing("10 Arlington Street", "Townhouse", "Belmont North"),
            listing("46 Patrick Street", "House", "Charlestown"),
        ]
    }

    // ── empty query ───────────────────────────────────────────────────────

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let raw = sample_set();
        let filtered = apply_search(&raw, "");
        assert_eq!(filtered, raw);
    }

    #[test]
    fn test_whitespace_query_is_treated_as_empty() {
        let raw = sample_set();
        assert_eq!(apply_search(&raw, "   ").len(), raw.len());
    }

    // ── matching ──────────────────────────────────────────────────────────

    #[test]
    fn test_match_on_street_is_case_insensitive() {
        let raw = sample_set();
        let filtered = apply_search(&raw, "DALTON");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].address.street.as_deref(), Some("3 Dalton Close"));
    }

    #[test]
    fn test_match_on_property_type() {
        let raw = sample_set();
        let filtered = apply_search(&raw, "townhouse");
        assert_eq!(filtered.len(), 1);
    }

    #[test]
    fn test_match_on_suburb_preserves_raw_order() {
        let raw = sample_set();
        let filtered = apply_search(&raw, "belmont");
        let streets: Vec<_> = filtered
            .iter()
            .map(|l| l.address.street.as_deref().unwrap())
            .collect();
        assert_eq!(streets, vec!["3 Dalton Close", "10 Arlington Street"]);
    }

    #[test]
    fn test_no_match_yields_empty() {
        let raw = sample_set();
        assert!(apply_search(&raw, "zebra").is_empty());
    }

    #[test]
    fn test_absent_fields_are_skipped_not_fatal() {
        let mut bare = listing("", "", "");
        bare.address.street = None;
        bare.property_type = None;
        bare.area_name = None;
        bare.address.suburb = None;
        bare.address.state = None;
        let filtered = apply_search(&[bare], "anything");
        assert!(filtered.is_empty());
    }

    // ── idempotence ───────────────────────────────────────────────────────

    #[test]
    fn test_filtering_is_idempotent() {
        let raw = sample_set();
        let once = apply_search(&raw, "house");
        let twice = apply_search(&once, "house");
        assert_eq!(once, twice);
    }
}
