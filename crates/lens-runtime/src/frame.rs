//! Presentation frames.
//!
//! A [`DashboardFrame`] is the complete, render-ready output of one pipeline
//! run: the sorted table rows plus the five chart view-models, all derived
//! from the dataset's filtered view. Renderers consume frames through the
//! [`Renderer`] trait and never see the dataset itself, which keeps the core
//! decoupled from any particular presentation technology.

use lens_core::charts::{
    bedroom_mix_series, days_on_market_series, median_price_by_bedrooms_series,
    price_per_sqm_series, price_vs_land_series, BarSeries, ScatterSeries,
};
use lens_core::models::{Listing, Summary};
use lens_core::rows::build_rows;

use crate::dataset::Dataset;

/// Everything a renderer needs to paint one dashboard update.
#[derive(Debug, Clone, Default)]
pub struct DashboardFrame {
    /// Fetch summary, displayed verbatim; `None` renders as placeholders.
    pub summary: Option<Summary>,
    /// Human-readable status line (load confirmation or error message).
    pub status: String,
    /// The search query this frame was derived from.
    pub query: String,
    /// Size of the unfiltered set, for "showing n of m" displays.
    pub total_listings: usize,
    /// Table rows, sorted descending by price with missing prices last.
    pub rows: Vec<Listing>,
    pub price_per_sqm: BarSeries,
    pub days_on_market: BarSeries,
    pub bedroom_mix: BarSeries,
    pub median_by_bedrooms: BarSeries,
    pub price_vs_land: ScatterSeries,
}

/// Run the filter→aggregate→view-model pipeline over the current dataset.
///
/// Pure with respect to the dataset: calling it any number of times yields
/// identical frames and mutates nothing.
pub fn build_frame(dataset: &Dataset) -> DashboardFrame {
    let filtered = dataset.filtered();

    DashboardFrame {
        summary: dataset.summary().cloned(),
        status: dataset.status().to_string(),
        query: dataset.query().to_string(),
        total_listings: dataset.raw().len(),
        rows: build_rows(filtered),
        price_per_sqm: price_per_sqm_series(filtered),
        days_on_market: days_on_market_series(filtered),
        bedroom_mix: bedroom_mix_series(filtered),
        median_by_bedrooms: median_price_by_bedrooms_series(filtered),
        price_vs_land: price_vs_land_series(filtered),
    }
}

/// A presentation surface for dashboard frames.
///
/// Render calls are fire-and-forget: implementations expose nothing back to
/// the pipeline.
pub trait Renderer {
    fn render(&mut self, frame: &DashboardFrame);
}
