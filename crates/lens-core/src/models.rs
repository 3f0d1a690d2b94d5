use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::numeric;

/// Placeholder shown wherever a label or value is missing.
pub const MISSING_LABEL: &str = "—";

/// A numeric field exactly as it arrives on the wire.
///
/// The listings API reports numbers inconsistently: a real JSON number, a
/// delimited string such as `"1,234"` or `"613 m²"`, or `null`. `RawNumber`
/// preserves the raw shape so that each consumer can apply its own exclusion
/// rule; [`crate::numeric::coerce`] turns it into an `f64` (NaN for anything
/// unusable).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    /// A plain JSON number.
    Number(f64),
    /// A textual value that may or may not parse as a number.
    Text(String),
    /// `null` or a missing key.
    #[default]
    Absent,
}

impl RawNumber {
    /// Whether the value coerces to a finite number.
    pub fn is_finite(&self) -> bool {
        numeric::coerce(self).is_finite()
    }
}

impl From<f64> for RawNumber {
    fn from(value: f64) -> Self {
        RawNumber::Number(value)
    }
}

impl From<Option<f64>> for RawNumber {
    fn from(value: Option<f64>) -> Self {
        match value {
            Some(v) => RawNumber::Number(v),
            None => RawNumber::Absent,
        }
    }
}

/// Street-level address components. Any field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub suburb: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    /// SA1 statistical area code, when the API provides one.
    #[serde(default)]
    pub sa1: Option<String>,
}

/// WGS-84 coordinates as reported by the API.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// One property listing.
///
/// Listings are immutable snapshots: a fetch replaces the whole collection,
/// and no pipeline stage ever mutates a listing in place. Every numeric
/// field can be missing or unparsable; consumers exclude such records from
/// aggregates and sort them last rather than erroring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    #[serde(default)]
    pub address: Address,
    /// Full area label, used as the display fallback when `street` is absent.
    #[serde(default)]
    pub area_name: Option<String>,
    #[serde(default)]
    pub property_type: Option<String>,
    #[serde(default)]
    pub bedrooms: RawNumber,
    #[serde(default)]
    pub bathrooms: RawNumber,
    #[serde(default)]
    pub garage_spaces: RawNumber,
    #[serde(default)]
    pub price: RawNumber,
    #[serde(default)]
    pub land_size_sqm: RawNumber,
    #[serde(default)]
    pub price_per_sqm: RawNumber,
    #[serde(default)]
    pub price_per_bedroom: RawNumber,
    #[serde(default)]
    pub listing_date: Option<NaiveDate>,
    #[serde(default)]
    pub days_on_market: RawNumber,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
    /// G-NAF persistent identifier, when known.
    #[serde(default)]
    pub gnaf_pid: Option<String>,
}

impl Listing {
    /// Label for chart axes and tooltips: the street when present, otherwise
    /// the area name, otherwise the missing-value placeholder.
    pub fn display_label(&self) -> &str {
        self.address
            .street
            .as_deref()
            .or(self.area_name.as_deref())
            .unwrap_or(MISSING_LABEL)
    }
}

/// Where a fetch payload came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummarySource {
    /// The live suburb-properties API.
    Api,
    /// The built-in sample document.
    Sample,
}

impl std::fmt::Display for SummarySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SummarySource::Api => f.write_str("api"),
            SummarySource::Sample => f.write_str("sample"),
        }
    }
}

/// Aggregate statistics for one fetched listing set.
///
/// Produced by the ingestion layer over the *full* (unfiltered) set and
/// displayed verbatim; the charts recompute their own medians and histograms
/// from the filtered subset instead of reusing these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub count: usize,
    pub median_price: Option<f64>,
    pub median_price_per_sqm: Option<f64>,
    pub median_dom: Option<f64>,
    /// Listing count per bedroom label, first-appearance order.
    pub bedroom_mix: Vec<(String, usize)>,
    /// Listing count per property type, first-appearance order.
    pub type_mix: Vec<(String, usize)>,
    pub suburb: String,
    pub property_type: Option<String>,
    pub source: SummarySource,
    pub fetched_at_utc: DateTime<Utc>,
}
