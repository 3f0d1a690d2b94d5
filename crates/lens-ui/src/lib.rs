//! Terminal UI layer for suburb-lens.
//!
//! Provides themes, the summary panel, the listing table, the five chart
//! panels, and the main application event loop built on top of [`ratatui`].
//! The UI consumes [`lens_runtime::frame::DashboardFrame`] values through the
//! runtime's `Renderer` trait and never reaches into the dataset directly.

pub mod app;
pub mod chart_view;
pub mod summary_view;
pub mod table_view;
pub mod themes;

pub use lens_core as core;
