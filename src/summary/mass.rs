//! Body mass summary

use chrono_tz::Tz;

use super::{group_by_month, mean, MonthKey, MonthlySummaryBuilder, SummaryResult};
use crate::models::Record;
use crate::table::Column;

/// Monthly average body mass.
///
/// A point vital: readings within a month are averaged, not summed.
/// Unparsable values are excluded from the average rather than zeroed.
pub struct MassBuilder {
    records: Vec<Record>,
    zone: Tz,
}

impl MassBuilder {
    pub fn new(records: Vec<Record>, zone: Tz) -> Self {
        Self { records, zone }
    }
}

impl MonthlySummaryBuilder for MassBuilder {
    fn build_summary(&self) -> SummaryResult<Vec<Column<MonthKey>>> {
        let mut column = Column::new("Average Mass");
        let by_month = group_by_month(
            self.records.iter().map(|r| (r.start_date(), r)),
            self.zone,
        );
        for (month, records) in by_month {
            let values: Vec<f64> = records.iter().filter_map(|r| r.parsed_value()).collect();
            if let Some(average) = mean(&values) {
                column.insert(month, average);
            }
        }

        Ok(vec![column])
    }
}
