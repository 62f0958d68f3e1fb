//! Step count summary
//!
//! Steps are recorded by both watch and phone, often over the same minutes,
//! so the samples run through the overlap resolver before the monthly sum.

use chrono_tz::Tz;

use super::{group_by_month, MonthKey, MonthlySummaryBuilder, SummaryResult};
use crate::dedupe::prioritize_overlaps;
use crate::models::Record;
use crate::table::Column;

/// Monthly step totals
pub struct StepBuilder {
    records: Vec<Record>,
    zone: Tz,
}

impl StepBuilder {
    pub fn new(records: Vec<Record>, zone: Tz) -> Self {
        Self { records, zone }
    }
}

impl MonthlySummaryBuilder for StepBuilder {
    fn build_summary(&self) -> SummaryResult<Vec<Column<MonthKey>>> {
        let deduped = prioritize_overlaps(self.records.clone())?;

        let mut column = Column::new("Steps");
        let by_month = group_by_month(deduped.into_iter().map(|r| (r.start_date(), r)), self.zone);
        for (month, records) in by_month {
            let total: f64 = records.iter().map(|r| r.numeric_value(0.0)).sum();
            column.insert(month, total);
        }

        Ok(vec![column])
    }
}
