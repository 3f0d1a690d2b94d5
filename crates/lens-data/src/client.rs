//! HTTP client for the suburb-properties API.

use std::time::Duration;

use chrono::{DateTime, Utc};
use lens_core::error::{LensError, Result};
use lens_core::models::{Listing, Summary, SummarySource};

use crate::enrich::enrich_listing;
use crate::summary::build_summary;
use crate::wire::ApiPayload;

/// Production endpoint for suburb property listings.
pub const DEFAULT_BASE_URL: &str =
    "https://www.microburbs.com.au/report_generator/api/suburb/properties";

/// Environment variable holding the API bearer token. The sandbox accepts
/// the literal `"test"`, which is also the default.
pub const TOKEN_ENV: &str = "MICROBURBS_ACCESS_TOKEN";

/// A successfully ingested listing set.
///
/// This is the only value the ingestion boundary hands to the runtime: a
/// well-formed (possibly empty) listing sequence plus its pre-computed
/// summary.
#[derive(Debug, Clone)]
pub struct FetchPayload {
    pub listings: Vec<Listing>,
    pub summary: Summary,
}

/// Async client for the listings endpoint.
pub struct ListingsClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl ListingsClient {
    /// Build a client with the given request timeout. The bearer token is
    /// read from [`TOKEN_ENV`], falling back to the sandbox token.
    pub fn new(timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LensError::Config(format!("failed to build HTTP client: {e}")))?;

        let token = std::env::var(TOKEN_ENV).unwrap_or_else(|_| "test".to_string());

        Ok(Self {
            http,
            base_url: DEFAULT_BASE_URL.to_string(),
            token,
        })
    }

    /// Override the endpoint URL (used by tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetch and decode the listing set for a suburb.
    ///
    /// Transport failures, non-success statuses, and explicit error payloads
    /// each map to their own [`LensError`] variant; callers treat all three
    /// identically (empty dataset plus one status message).
    pub async fn fetch(
        &self,
        suburb: &str,
        property_type: Option<&str>,
    ) -> Result<FetchPayload> {
        let mut params = vec![("suburb", suburb.to_string())];
        if let Some(pt) = property_type {
            params.push(("property_type", pt.to_string()));
        }

        tracing::debug!(suburb, ?property_type, "requesting listings");

        let response = self
            .http
            .get(&self.base_url)
            .bearer_auth(&self.token)
            .query(&params)
            .send()
            .await
            .map_err(|e| LensError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "listings request rejected");
            return Err(LensError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let payload: ApiPayload = response
            .json()
            .await
            .map_err(|e| LensError::Transport(e.to_string()))?;

        decode_payload(payload, suburb, property_type, SummarySource::Api, Utc::now())
    }
}

/// Decode a wire payload into a [`FetchPayload`]: reject explicit error
/// indicators, enrich each listing, and compute the summary.
pub fn decode_payload(
    payload: ApiPayload,
    suburb: &str,
    property_type: Option<&str>,
    source: SummarySource,
    now: DateTime<Utc>,
) -> Result<FetchPayload> {
    if let Some(message) = payload.error {
        return Err(LensError::Payload(message));
    }

    let listings: Vec<Listing> = payload
        .results
        .into_iter()
        .map(|wire| enrich_listing(wire, now))
        .collect();

    let summary = build_summary(&listings, suburb, property_type, source, now);

    tracing::debug!(count = listings.len(), %source, "decoded listing payload");

    Ok(FetchPayload { listings, summary })
}

/// Where fetches come from: the live API or the built-in sample.
pub enum ListingSource {
    Api(ListingsClient),
    Sample,
}

impl ListingSource {
    /// Fetch a listing set for `suburb` from this source.
    pub async fn fetch(
        &self,
        suburb: &str,
        property_type: Option<&str>,
    ) -> Result<FetchPayload> {
        match self {
            ListingSource::Api(client) => client.fetch(suburb, property_type).await,
            ListingSource::Sample => {
                crate::sample::sample_payload(suburb, property_type, Utc::now())
            }
        }
    }
}
