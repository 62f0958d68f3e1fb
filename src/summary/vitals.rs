//! Point vital summary
//!
//! Generic monthly average for point vitals such as heart rate. One
//! instance per vital stream, each emitting a single column.

use chrono_tz::Tz;

use super::{group_by_month, mean, MonthKey, MonthlySummaryBuilder, SummaryResult};
use crate::models::Record;
use crate::table::Column;

/// Monthly average of one point-vital record stream
pub struct VitalsBuilder {
    records: Vec<Record>,
    zone: Tz,
    header: String,
}

impl VitalsBuilder {
    pub fn new(records: Vec<Record>, zone: Tz, header: impl Into<String>) -> Self {
        Self {
            records,
            zone,
            header: header.into(),
        }
    }
}

impl MonthlySummaryBuilder for VitalsBuilder {
    fn build_summary(&self) -> SummaryResult<Vec<Column<MonthKey>>> {
        let mut column = Column::new(self.header.clone());
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
