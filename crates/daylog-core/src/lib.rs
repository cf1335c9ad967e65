//! Core types for the daily event analyzer.
//!
//! Holds the event record model, the shared error type, `HHMM` / date
//! parsing, presentation helpers, persisted settings and logging setup.

pub mod error;
pub mod formatting;
pub mod logging;
pub mod models;
pub mod settings;
pub mod time_utils;

pub use error::{DaylogError, Result};
