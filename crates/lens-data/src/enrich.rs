//! Conversion of wire listings into the core model, with derived metrics.

use chrono::{DateTime, NaiveDate, Utc};
use lens_core::models::{Address, Coordinates, Listing, RawNumber};
use lens_core::numeric::coerce;
use regex::Regex;

use crate::wire::ApiListing;

/// Date format used by the listings API.
pub const DATE_FMT: &str = "%Y-%m-%d";

/// Parse a land-size value into square metres.
///
/// The API reports land size as a number, a bare decimal string (`"607.0"`),
/// a unit-suffixed string (`"613 m²"`), or one of the textual null markers
/// `"none"` / `"nan"` / `""`. The first number found in the text wins.
pub fn parse_land_size_sqm(raw: &RawNumber) -> Option<f64> {
    let text = match raw {
        RawNumber::Number(n) => return n.is_finite().then_some(*n),
        RawNumber::Text(t) => t.trim().to_lowercase(),
        RawNumber::Absent => return None,
    };
    if matches!(text.as_str(), "" | "none" | "nan") {
        return None;
    }

    let re = Regex::new(r"(\d+(?:\.\d+)?)").expect("regex is valid");
    re.captures(&text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Whole days elapsed since `listing_date`, measured against `now`.
///
/// Negative when the listing date lies in the future; the chart layer drops
/// negative values.
pub fn days_since(listing_date: NaiveDate, now: DateTime<Utc>) -> i64 {
    (now.date_naive() - listing_date).num_days()
}

/// Turn a wire listing into the core model, computing the derived metrics
/// the dashboard charts: days on market, price per sqm, price per bedroom.
///
/// `now` is injected so that day counts are reproducible in tests.
pub fn enrich_listing(wire: ApiListing, now: DateTime<Utc>) -> Listing {
    let price_value = coerce(&wire.price);
    let beds_value = coerce(&wire.attributes.bedrooms);
    let land = parse_land_size_sqm(&wire.attributes.land_size);

    let listing_date = wire
        .listing_date
        .as_deref()
        .and_then(|s| NaiveDate::parse_from_str(s, DATE_FMT).ok());

    let days_on_market: RawNumber = listing_date
        .map(|date| days_since(date, now) as f64)
        .into();

    let price_per_sqm = match land {
        Some(sqm) if price_value.is_finite() && sqm > 0.0 => {
            RawNumber::Number(price_value / sqm)
        }
        _ => RawNumber::Absent,
    };

    let price_per_bedroom = if price_value.is_finite() && beds_value.is_finite() && beds_value > 0.0
    {
        RawNumber::Number(price_value / beds_value)
    } else {
        RawNumber::Absent
    };

    let coordinates = wire.coordinates.and_then(|c| {
        Some(Coordinates {
            latitude: c.latitude?,
            longitude: c.longitude?,
        })
    });

    Listing {
        address: Address {
            street: wire.address.street,
            suburb: wire.address.sal,
            state: wire.address.state,
            sa1: wire.address.sa1,
        },
        area_name: wire.area_name,
        property_type: wire.property_type,
        bedrooms: wire.attributes.bedrooms,
        bathrooms: wire.attributes.bathrooms,
        garage_spaces: wire.attributes.garage_spaces,
        price: wire.price,
        land_size_sqm: land.into(),
        price_per_sqm,
        price_per_bedroom,
        listing_date,
        days_on_market,
        coordinates,
        gnaf_pid: wire.gnaf_pid,
    }
}
