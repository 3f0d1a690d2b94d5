//! Runtime orchestration layer for suburb-lens.
//!
//! Owns the dataset state container with its fetch-sequence discipline,
//! builds presentation frames from the current dataset, and coordinates
//! background fetch tasks with the UI event loop.

pub mod dataset;
pub mod frame;
pub mod orchestrator;

pub use lens_core as core;
pub use lens_data as data;
