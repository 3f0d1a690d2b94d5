//! Core data pipeline for suburb-lens.
//!
//! Turns a raw, loosely-typed listing collection into presentation-ready
//! aggregates and chart view-models: numeric coercion, the price-per-sqm
//! unit-normalization heuristic, free-text filtering, statistical
//! aggregation, and deterministic table sorting. Everything in this crate is
//! synchronous, pure, and free of I/O; ingestion and rendering live in the
//! `lens-data` and `lens-ui` crates.

pub mod aggregate;
pub mod charts;
pub mod error;
pub mod filter;
pub mod formatting;
pub mod models;
pub mod numeric;
pub mod rows;
pub mod scale;
pub mod settings;
