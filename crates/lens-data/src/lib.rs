//! Data ingestion layer for suburb-lens.
//!
//! Responsible for fetching listing payloads from the suburb-properties API,
//! decoding the loosely-typed wire format, enriching each listing with
//! derived metrics (days on market, price per sqm, price per bedroom),
//! computing the fetch summary, and providing the built-in offline sample.

pub mod client;
pub mod enrich;
pub mod sample;
pub mod summary;
pub mod wire;

pub use lens_core as core;
