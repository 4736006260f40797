//! Run export: CSV trajectory rows for plotting, JSON run summaries.

pub mod csv;
pub mod json;

pub use json::RunSummary;
