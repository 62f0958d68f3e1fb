//! HealthKit Summary (hksummary) Library
//!
//! Turns a parsed Apple Health export (records and workouts) into a monthly
//! summary table: one row per calendar month, one column per metric.

pub mod dedupe;
pub mod models;
pub mod summary;
pub mod table;
