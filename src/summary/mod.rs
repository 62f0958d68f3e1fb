//! Monthly summary builders
//!
//! One builder per metric family. Each builder owns the samples relevant to
//! its metric, groups them by the zoned month of their start date, and
//! reduces each group to at most one value per emitted column. Builders
//! never backfill zeros: a month without data simply has no entry, and the
//! orchestrator's join renders it as a blank cell.

mod body_fat;
mod distance_cycling;
mod mass;
mod nutrition;
mod orchestrator;
mod period;
mod steps;
mod vitals;
mod workout;

pub use body_fat::BodyFatPercentageBuilder;
pub use distance_cycling::DistanceCyclingBuilder;
pub use mass::MassBuilder;
pub use nutrition::NutritionBuilder;
pub use orchestrator::build_monthly_summary;
pub use period::{MonthKey, ParseMonthKeyError};
pub use steps::StepBuilder;
pub use vitals::VitalsBuilder;
pub use workout::WorkoutBuilder;

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use thiserror::Error;

use crate::dedupe::OverlapError;
use crate::table::{Column, DatasetError};

/// Summary error types
#[derive(Debug, Error)]
pub enum SummaryError {
    #[error(transparent)]
    Overlap(#[from] OverlapError),

    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

/// Result type for summary operations
pub type SummaryResult<T> = Result<T, SummaryError>;

/// A per-metric summary strategy.
///
/// Implementations are registered with the orchestrator in a fixed order;
/// the columns they emit appear in the output in that order.
pub trait MonthlySummaryBuilder {
    fn build_summary(&self) -> SummaryResult<Vec<Column<MonthKey>>>;
}

/// Group items into month buckets by a start instant observed in `zone`
fn group_by_month<T>(
    items: impl IntoIterator<Item = (DateTime<Utc>, T)>,
    zone: Tz,
) -> BTreeMap<MonthKey, Vec<T>> {
    let mut by_month: BTreeMap<MonthKey, Vec<T>> = BTreeMap::new();
    for (start, item) in items {
        by_month.entry(MonthKey::of(start, zone)).or_default().push(item);
    }
    by_month
}

/// Mean of a value list; `None` when empty
fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}
