//! Nutrition summary
//!
//! Monthly intake totals for the dietary record streams: energy consumed
//! and protein.

use chrono_tz::Tz;

use super::{group_by_month, MonthKey, MonthlySummaryBuilder, SummaryResult};
use crate::models::Record;
use crate::table::Column;

/// Monthly dietary energy and protein totals
pub struct NutritionBuilder {
    energy_records: Vec<Record>,
    protein_records: Vec<Record>,
    zone: Tz,
}

impl NutritionBuilder {
    pub fn new(energy_records: Vec<Record>, protein_records: Vec<Record>, zone: Tz) -> Self {
        Self {
            energy_records,
            protein_records,
            zone,
        }
    }

    fn sum_column(&self, header: &str, records: &[Record]) -> Column<MonthKey> {
        let mut column = Column::new(header);
        let by_month = group_by_month(records.iter().map(|r| (r.start_date(), r)), self.zone);
        for (month, records) in by_month {
            let values: Vec<f64> = records.iter().filter_map(|r| r.parsed_value()).collect();
            if !values.is_empty() {
                column.insert(month, values.iter().sum());
            }
        }
        column
    }
}

impl MonthlySummaryBuilder for NutritionBuilder {
    fn build_summary(&self) -> SummaryResult<Vec<Column<MonthKey>>> {
        Ok(vec![
            self.sum_column("Dietary Energy", &self.energy_records),
            self.sum_column("Dietary Protein", &self.protein_records),
        ])
    }
}
