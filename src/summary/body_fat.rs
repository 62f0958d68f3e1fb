//! Body fat percentage summary

use chrono_tz::Tz;

use super::{group_by_month, mean, MonthKey, MonthlySummaryBuilder, SummaryResult};
use crate::models::Record;
use crate::table::Column;

/// Monthly average body fat percentage
pub struct BodyFatPercentageBuilder {
    records: Vec<Record>,
    zone: Tz,
}

impl BodyFatPercentageBuilder {
    pub fn new(records: Vec<Record>, zone: Tz) -> Self {
        Self { records, zone }
    }
}

impl MonthlySummaryBuilder for BodyFatPercentageBuilder {
    fn build_summary(&self) -> SummaryResult<Vec<Column<MonthKey>>> {
        let mut column = Column::new("Average Body Fat %");
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{metric, Provenance, Record};
    use chrono::{TimeZone, Utc};

    fn body_fat_record(month: u32, day: u32, value: &str) -> Record {
        let start = Utc.with_ymd_and_hms(2023, month, day, 7, 0, 0).unwrap();
        Record::new(
            metric::BODY_FAT_PERCENTAGE,
            start,
            start,
            Provenance::new("Scale"),
        )
        .unwrap()
        .with_value(value)
        .with_unit("%")
    }

    #[test]
    fn test_monthly_average_per_month() {
        let records = vec![
            body_fat_record(1, 5, "0.25"),
            body_fat_record(1, 20, "0.75"),
            body_fat_record(2, 5, "0.5"),
        ];

        let columns = BodyFatPercentageBuilder::new(records, chrono_tz::UTC)
            .build_summary()
            .unwrap();
        assert_eq!(columns[0].header(), "Average Body Fat %");
        assert_eq!(columns[0].value_at(&MonthKey::new(2023, 1)), Some(0.5));
        assert_eq!(columns[0].value_at(&MonthKey::new(2023, 2)), Some(0.5));
    }
}
