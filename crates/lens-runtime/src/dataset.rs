//! The dataset state container.
//!
//! Replaces the original dashboard's ambient `RAW`/`FILTERED` globals with a
//! single owned value and three explicit transitions: `begin_fetch`,
//! `commit_fetch`/`fail_fetch`, and `set_query`. Everything downstream
//! (aggregates, view-models, rows) is recomputed from this state on each
//! pipeline run and has no lifetime of its own.

use lens_core::filter::apply_search;
use lens_core::models::{Listing, Summary};
use lens_data::client::FetchPayload;

/// The only long-lived mutable state in the application.
///
/// Invariants:
/// * `filtered` is always `apply_search(&raw, &query)` — a subset of `raw`
///   in `raw` order, recomputed wholesale on every fetch commit and query
///   change.
/// * Only the most recently *initiated* fetch may commit; results from
///   superseded in-flight fetches are discarded on arrival, which is what
///   keeps a slow stale response from overwriting a newer one.
#[derive(Debug, Default)]
pub struct Dataset {
    raw: Vec<Listing>,
    filtered: Vec<Listing>,
    query: String,
    summary: Option<Summary>,
    status: String,
    /// Sequence number of the most recently initiated fetch.
    latest_seq: u64,
    /// Whether a fetch is currently in flight.
    fetching: bool,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Fetch transitions ─────────────────────────────────────────────────

    /// Register a new fetch and return its sequence number. Any fetch issued
    /// earlier is superseded from this moment on, even if it is still
    /// running.
    pub fn begin_fetch(&mut self, description: &str) -> u64 {
        self.latest_seq += 1;
        self.fetching = true;
        self.status = format!("Fetching {description}…");
        tracing::debug!(seq = self.latest_seq, "fetch initiated");
        self.latest_seq
    }

    /// Commit a successful fetch result.
    ///
    /// Returns `false` (leaving all state untouched) when `seq` does not
    /// match the latest issued sequence number.
    pub fn commit_fetch(&mut self, seq: u64, payload: FetchPayload) -> bool {
        if seq != self.latest_seq {
            tracing::debug!(seq, latest = self.latest_seq, "discarding stale fetch result");
            return false;
        }

        let summary = payload.summary;
        self.status = format!(
            "Loaded {} listings for {}{} (source: {})",
            payload.listings.len(),
            summary.suburb,
            summary
                .property_type
                .as_deref()
                .map(|pt| format!(" · {pt}"))
                .unwrap_or_default(),
            summary.source,
        );
        self.raw = payload.listings;
        self.summary = Some(summary);
        self.fetching = false;
        self.refilter();

        tracing::debug!(seq, count = self.raw.len(), "fetch committed");
        true
    }

    /// Record a failed fetch: empty the dataset and surface one status
    /// message. Stale failures are discarded just like stale successes.
    pub fn fail_fetch(&mut self, seq: u64, message: &str) -> bool {
        if seq != self.latest_seq {
            tracing::debug!(seq, latest = self.latest_seq, "discarding stale fetch failure");
            return false;
        }

        self.raw.clear();
        self.filtered.clear();
        self.summary = None;
        self.fetching = false;
        self.status = format!("Error: {message}");

        tracing::warn!(seq, message, "fetch failed; dataset reset");
        true
    }

    // ── Query transition ──────────────────────────────────────────────────

    /// Change the search query and recompute the filtered view.
    ///
    /// Safe to call on every input event: each call is a pure function of
    /// the current raw set and the new query, with no state accumulated
    /// between calls.
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.refilter();
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn raw(&self) -> &[Listing] {
        &self.raw
    }

    pub fn filtered(&self) -> &[Listing] {
        &self.filtered
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn summary(&self) -> Option<&Summary> {
        self.summary.as_ref()
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn is_fetching(&self) -> bool {
        self.fetching
    }

    // ── Private ───────────────────────────────────────────────────────────

    fn refilter(&mut self) {
        self.filtered = apply_search(&self.raw, &self.query);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use lens_core::models::{Address, RawNumber, SummarySource};
    use lens_data::summary::build_summary;

    fn listing(street: &str, price: f64) -> Listing {
        Listing {
            address: Address {
                street: Some(street.to_string()),
                suburb: Some("Belmont North".to_string()),
                state: Some("NSW".to_string()),
                sa1: None,
            },
            area_name: None,
            property_type: Some("House".to_string()),
            bedrooms: RawNumber::Absent,
            bathrooms: RawNumber::Absent,
            garage_spaces: RawNumber::Absent,
            price: RawNumber::Number(price),
            land_size_sqm: RawNumber::Absent,
            price_per_sqm: RawNumber::Absent,
            price_per_bedroom: RawNumber::Absent,
            listing_date: None,
            days_on_market: RawNumber::Absent,
            coordinates: None,
            gnaf_pid: None,
        }
    }

    fn payload(listings: Vec<Listing>) -> FetchPayload {
        let now = Utc.with_ymd_and_hms(2025, 10, 10, 0, 0, 0).unwrap();
        let summary = build_summary(&listings, "Belmont North", None, SummarySource::Api, now);
        FetchPayload { listings, summary }
    }

    // ── commit / stale discard ────────────────────────────────────────────

    #[test]
    fn test_commit_latest_fetch() {
        let mut dataset = Dataset::new();
        let seq = dataset.begin_fetch("Belmont North");
        assert!(dataset.is_fetching());

        let committed = dataset.commit_fetch(seq, payload(vec![listing("a", 1.0)]));
        assert!(committed);
        assert_eq!(dataset.raw().len(), 1);
        assert_eq!(dataset.filtered().len(), 1);
        assert!(!dataset.is_fetching());
        assert!(dataset.status().contains("Loaded 1 listings"));
    }

    #[test]
    fn test_stale_fetch_result_is_discarded() {
        let mut dataset = Dataset::new();
        let stale_seq = dataset.begin_fetch("Belmont North");
        let fresh_seq = dataset.begin_fetch("Charlestown");

        // The newer fetch lands first.
        assert!(dataset.commit_fetch(fresh_seq, payload(vec![listing("fresh", 2.0)])));

        // The superseded fetch resolves afterwards and must not overwrite.
        assert!(!dataset.commit_fetch(stale_seq, payload(vec![listing("stale", 1.0)])));
        assert_eq!(dataset.raw().len(), 1);
        assert_eq!(dataset.raw()[0].address.street.as_deref(), Some("fresh"));
    }

    #[test]
    fn test_stale_failure_is_discarded() {
        let mut dataset = Dataset::new();
        let stale_seq = dataset.begin_fetch("a");
        let fresh_seq = dataset.begin_fetch("b");
        assert!(dataset.commit_fetch(fresh_seq, payload(vec![listing("kept", 1.0)])));

        assert!(!dataset.fail_fetch(stale_seq, "timed out"));
        assert_eq!(dataset.raw().len(), 1);
        assert!(!dataset.status().starts_with("Error:"));
    }

    // ── failure behaviour ─────────────────────────────────────────────────

    #[test]
    fn test_failure_empties_dataset_with_one_message() {
        let mut dataset = Dataset::new();
        let seq = dataset.begin_fetch("x");
        dataset.commit_fetch(seq, payload(vec![listing("a", 1.0)]));

        let seq = dataset.begin_fetch("x");
        assert!(dataset.fail_fetch(seq, "connection refused"));
        assert!(dataset.raw().is_empty());
        assert!(dataset.filtered().is_empty());
        assert!(dataset.summary().is_none());
        assert_eq!(dataset.status(), "Error: connection refused");
    }

    // ── query transitions ─────────────────────────────────────────────────

    #[test]
    fn test_set_query_recomputes_filtered_view() {
        let mut dataset = Dataset::new();
        let seq = dataset.begin_fetch("x");
        dataset.commit_fetch(
            seq,
            payload(vec![listing("3 Dalton Close", 1.0), listing("46 Patrick Street", 2.0)]),
        );

        dataset.set_query("dalton");
        assert_eq!(dataset.filtered().len(), 1);

        dataset.set_query("");
        assert_eq!(dataset.filtered().len(), 2);
    }

    #[test]
    fn test_query_survives_a_new_fetch() {
        let mut dataset = Dataset::new();
        dataset.set_query("patrick");

        let seq = dataset.begin_fetch("x");
        dataset.commit_fetch(
            seq,
            payload(vec![listing("3 Dalton Close", 1.0), listing("46 Patrick Street", 2.0)]),
        );

        // The committed fetch re-applies the standing query.
        assert_eq!(dataset.filtered().len(), 1);
        assert_eq!(
            dataset.filtered()[0].address.street.as_deref(),
            Some("46 Patrick Street")
        );
    }

    #[test]
    fn test_filtered_is_subset_in_raw_order() {
        let mut dataset = Dataset::new();
        let seq = dataset.begin_fetch("x");
        dataset.commit_fetch(
            seq,
            payload(vec![
                listing("1 House Rd", 1.0),
                listing("2 Villa Ct", 2.0),
                listing("3 House Ave", 3.0),
            ]),
        );
        dataset.set_query("house");

        let streets: Vec<_> = dataset
            .filtered()
            .iter()
            .map(|l| l.address.street.as_deref().unwrap())
            .collect();
        assert_eq!(streets, vec!["1 House Rd", "3 House Ave"]);
    }

    #[test]
    fn test_rapid_repeated_queries_are_idempotent() {
        let mut dataset = Dataset::new();
        let seq = dataset.begin_fetch("x");
        dataset.commit_fetch(seq, payload(vec![listing("a", 1.0), listing("b", 2.0)]));

        dataset.set_query("a");
        let first = dataset.filtered().to_vec();
        for _ in 0..100 {
            dataset.set_query("a");
        }
        assert_eq!(dataset.filtered(), &first[..]);
    }
}
