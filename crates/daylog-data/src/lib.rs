//! Data layer for the daily event analyzer.
//!
//! Responsible for locating and reading per-day `events.jsonl` files,
//! normalizing their records, aggregating statistics and running the
//! range analysis pipeline.

pub mod aggregator;
pub mod analysis;
pub mod reader;

pub use daylog_core as core;
