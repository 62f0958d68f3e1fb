//! Distance cycling summary
//!
//! Aggregates the `DistanceCycling` record stream, which the watch logs
//! continuously; this is separate from the distance totals of explicitly
//! started cycling workouts.

use chrono_tz::Tz;

use super::{group_by_month, MonthKey, MonthlySummaryBuilder, SummaryResult};
use crate::models::Record;
use crate::table::Column;

/// Monthly cycled distance from passive distance records
pub struct DistanceCyclingBuilder {
    records: Vec<Record>,
    zone: Tz,
}

impl DistanceCyclingBuilder {
    pub fn new(records: Vec<Record>, zone: Tz) -> Self {
        Self { records, zone }
    }
}

impl MonthlySummaryBuilder for DistanceCyclingBuilder {
    fn build_summary(&self) -> SummaryResult<Vec<Column<MonthKey>>> {
        let mut column = Column::new("Distance Cycling");
        let by_month = group_by_month(
            self.records.iter().map(|r| (r.start_date(), r)),
            self.zone,
        );
        for (month, records) in by_month {
            let values: Vec<f64> = records.iter().filter_map(|r| r.parsed_value()).collect();
            if !values.is_empty() {
                column.insert(month, values.iter().sum());
            }
        }

        Ok(vec![column])
    }
}
