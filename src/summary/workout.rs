//! Workout session summaries
//!
//! One builder instance per activity type. Emits a monthly distance column
//! and a monthly duration column, or duration only for activities where
//! distance is meaningless (strength training, HIIT). Sessions missing an
//! optional total are skipped for that column; a month where every session
//! lacks the total gets no cell rather than a zero.

use chrono_tz::Tz;

use super::{group_by_month, MonthKey, MonthlySummaryBuilder, SummaryResult};
use crate::models::Workout;
use crate::table::Column;

/// Monthly distance and duration totals for one workout activity type
pub struct WorkoutBuilder {
    workouts: Vec<Workout>,
    zone: Tz,
    label: String,
    include_distance: bool,
}

impl WorkoutBuilder {
    /// Builder emitting "<label> Distance" and "<label> Duration" columns
    pub fn new(workouts: Vec<Workout>, zone: Tz, label: impl Into<String>) -> Self {
        Self {
            workouts,
            zone,
            label: label.into(),
            include_distance: true,
        }
    }

    /// Builder emitting only a "<label> Duration" column
    pub fn duration_only(workouts: Vec<Workout>, zone: Tz, label: impl Into<String>) -> Self {
        Self {
            workouts,
            zone,
            label: label.into(),
            include_distance: false,
        }
    }

    fn sum_column(
        &self,
        header: String,
        field: impl Fn(&Workout) -> Option<f64>,
    ) -> Column<MonthKey> {
        let mut column = Column::new(header);
        let by_month = group_by_month(
            self.workouts.iter().map(|w| (w.start_date(), w)),
            self.zone,
        );
        for (month, workouts) in by_month {
            let values: Vec<f64> = workouts.iter().filter_map(|&w| field(w)).collect();
            if !values.is_empty() {
                column.insert(month, values.iter().sum());
            }
        }
        column
    }
}

impl MonthlySummaryBuilder for WorkoutBuilder {
    fn build_summary(&self) -> SummaryResult<Vec<Column<MonthKey>>> {
        let mut columns = Vec::new();
        if self.include_distance {
            columns.push(
                self.sum_column(format!("{} Distance", self.label), Workout::total_distance),
            );
        }
        columns.push(self.sum_column(format!("{} Duration", self.label), Workout::duration));
        Ok(columns)
    }
}
