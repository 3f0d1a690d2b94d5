//! Wire-format models for the suburb-properties API.
//!
//! These mirror the JSON exactly as the API sends it, loose typing included;
//! [`crate::enrich`] turns them into the core [`lens_core::models::Listing`]
//! shape.

use lens_core::models::RawNumber;
use serde::Deserialize;

/// Top-level response document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiPayload {
    #[serde(default)]
    pub results: Vec<ApiListing>,
    /// Explicit application-level error indicator. A 200 response carrying
    /// this field is still a failed fetch.
    #[serde(default)]
    pub error: Option<String>,
}

/// One listing as the API reports it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiListing {
    #[serde(default)]
    pub address: ApiAddress,
    #[serde(default)]
    pub area_level: Option<String>,
    #[serde(default)]
    pub area_name: Option<String>,
    #[serde(default)]
    pub attributes: ApiAttributes,
    #[serde(default)]
    pub coordinates: Option<ApiCoordinates>,
    #[serde(default)]
    pub gnaf_pid: Option<String>,
    #[serde(default)]
    pub listing_date: Option<String>,
    #[serde(default)]
    pub price: RawNumber,
    #[serde(default)]
    pub property_type: Option<String>,
}

/// Address block. `sal` is the suburb/locality name.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiAddress {
    #[serde(default)]
    pub sa1: Option<String>,
    #[serde(default)]
    pub sal: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub street: Option<String>,
}

/// Physical attributes. Every field may arrive as a number, a string such as
/// `"613 m²"` or `"nan"`, or not at all.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiAttributes {
    #[serde(default)]
    pub bathrooms: RawNumber,
    #[serde(default)]
    pub bedrooms: RawNumber,
    #[serde(default)]
    pub building_size: RawNumber,
    #[serde(default)]
    pub garage_spaces: RawNumber,
    #[serde(default)]
    pub land_size: RawNumber,
}

/// Coordinates as sent on the wire; either half may be missing.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ApiCoordinates {
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}
