//! Data models
//!
//! Rust structs representing health samples as they arrive from the
//! export parser: point measurements (records) and timed sessions (workouts).

mod record;
mod time_range;
mod workout;

pub use record::{metric, Provenance, Record};
pub use time_range::{TimeRange, TimeRangeError};
pub use workout::{activity, Workout};
