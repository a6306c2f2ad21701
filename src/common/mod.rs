//! Common infrastructure modules shared across chart generation
//!
//! This module provides reusable infrastructure for:
//! - Data structures for benchmark results
//! - Size category buckets and ASCII table formatting
//! - Plot styling and drawing helpers

pub mod buckets;
pub mod data_structures;
pub mod plots;

#[cfg(test)]
pub mod test_helpers;

// Re-export commonly used items
pub use data_structures::{Category, CostMatch, ResultRow};
pub use plots::{PlotError, PlotStyle};
