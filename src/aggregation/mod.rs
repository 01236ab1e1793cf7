//! Yearly aggregation for trip reports.
//!
//! This module contains the year-bucket accumulators and the extraction
//! strategies that decide what each record contributes to a bucket.

mod strategy;
mod yearly;
mod yearly_stat;

pub use strategy::{DataSource, ExtractionStrategy};
pub use yearly::YearlyAggregator;
pub use yearly_stat::YearlyStatAggregator;
