//! Built-in sample listings for offline use.
//!
//! A trimmed capture of a real sandbox response for Belmont North, NSW.
//! Selected with `--sample`; never substituted automatically on a failed
//! fetch (a failed fetch empties the dataset instead).

use chrono::{DateTime, Utc};
use lens_core::error::Result;
use lens_core::models::SummarySource;

use crate::client::{decode_payload, FetchPayload};
use crate::wire::ApiPayload;

const SAMPLE_JSON: &str = r#"{
  "results": [
    {
      "address": {
        "sa1": "11101120615",
        "sal": "Belmont North",
        "state": "NSW",
        "street": "3 Dalton Close"
      },
      "area_level": "address",
      "area_name": "3 Dalton Close, Belmont North, NSW",
      "attributes": {
        "bathrooms": 1,
        "bedrooms": 3,
        "building_size": "nan",
        "garage_spaces": 2,
        "land_size": "607.0"
      },
      "coordinates": { "latitude": -33.01402088, "longitude": 151.67272249 },
      "gnaf_pid": "GANSW704082298",
      "listing_date": "2025-10-03",
      "price": 950000,
      "property_type": "House"
    },
    {
      "address": {
        "sa1": "11101120618",
        "sal": "Belmont North",
        "state": "NSW",
        "street": "10 Arlington Street"
      },
      "area_level": "address",
      "area_name": "10 Arlington Street, Belmont North, NSW",
      "attributes": {
        "bathrooms": 1,
        "bedrooms": 3,
        "building_size": "None",
        "garage_spaces": 2,
        "land_size": "613 m²"
      },
      "coordinates": { "latitude": -33.01594389, "longitude": 151.67347363 },
      "gnaf_pid": "GANSW704076595",
      "listing_date": "2025-09-17",
      "price": 925000,
      "property_type": "House"
    },
    {
      "address": {
        "sa1": "11101120609",
        "sal": "Belmont North",
        "state": "NSW",
        "street": "46 Patrick Street"
      },
      "area_level": "address",
      "area_name": "46 Patrick Street, Belmont North, NSW",
      "attributes": {
        "bathrooms": 1,
        "bedrooms": 4,
        "building_size": "nan",
        "garage_spaces": 4,
        "land_size": "466.0"
      },
      "coordinates": { "latitude": -33.02379398, "longitude": 151.66499999 },
      "gnaf_pid": "GANSW706667618",
      "listing_date": "2025-09-15",
      "price": 920000,
      "property_type": "House"
    }
  ]
}"#;

/// Decode the embedded sample into a [`FetchPayload`].
///
/// `suburb` and `property_type` are echoed into the summary so the header
/// reflects what the user asked for; the listings themselves are always the
/// Belmont North capture.
pub fn sample_payload(
    suburb: &str,
    property_type: Option<&str>,
    now: DateTime<Utc>,
) -> Result<FetchPayload> {
    let payload: ApiPayload = serde_json::from_str(SAMPLE_JSON)?;
    decode_payload(payload, suburb, property_type, SummarySource::Sample, now)
}
