//! Summary orchestration
//!
//! Computes the month universe across every record and workout, runs the
//! per-metric builders in their fixed registration order, and joins the
//! emitted columns into one wide dataset ordered by month descending.

use std::collections::{BTreeSet, HashMap};

use chrono_tz::Tz;

use super::{
    BodyFatPercentageBuilder, DistanceCyclingBuilder, MassBuilder, MonthKey,
    MonthlySummaryBuilder, NutritionBuilder, StepBuilder, SummaryResult, VitalsBuilder,
    WorkoutBuilder,
};
use crate::models::{activity, metric, Record, Workout};
use crate::table::Dataset;

/// Build the monthly summary dataset.
///
/// `records` is keyed by metric type and `workouts` by activity type, as
/// produced by the export parser. The key column covers every month any
/// record or workout starts in, so a metric without data in some month
/// still gets a row there (with a blank cell). Builder registration order
/// fixes the column order; a failing builder aborts the whole run.
pub fn build_monthly_summary(
    records: &HashMap<String, Vec<Record>>,
    workouts: &HashMap<String, Vec<Workout>>,
    zone: Tz,
) -> SummaryResult<Dataset<MonthKey>> {
    let record_months = records
        .values()
        .flatten()
        .map(|r| MonthKey::of(r.start_date(), zone));
    let workout_months = workouts
        .values()
        .flatten()
        .map(|w| MonthKey::of(w.start_date(), zone));
    let universe: BTreeSet<MonthKey> = record_months.chain(workout_months).collect();

    let records_for = |metric_type: &str| records.get(metric_type).cloned().unwrap_or_default();
    let workouts_for =
        |activity_type: &str| workouts.get(activity_type).cloned().unwrap_or_default();

    // Registration order is the output column order.
    let builders: Vec<Box<dyn MonthlySummaryBuilder>> = vec![
        Box::new(StepBuilder::new(records_for(metric::STEP_COUNT), zone)),
        Box::new(MassBuilder::new(records_for(metric::BODY_MASS), zone)),
        Box::new(BodyFatPercentageBuilder::new(
            records_for(metric::BODY_FAT_PERCENTAGE),
            zone,
        )),
        Box::new(WorkoutBuilder::new(
            workouts_for(activity::CYCLING),
            zone,
            "Cycling Workout",
        )),
        Box::new(DistanceCyclingBuilder::new(
            records_for(metric::DISTANCE_CYCLING),
            zone,
        )),
        Box::new(WorkoutBuilder::duration_only(
            workouts_for(activity::STRENGTH_TRAINING),
            zone,
            "Strength Training",
        )),
        Box::new(WorkoutBuilder::duration_only(
            workouts_for(activity::HIIT),
            zone,
            "HIIT",
        )),
        Box::new(WorkoutBuilder::new(
            workouts_for(activity::RUNNING),
            zone,
            "Running",
        )),
        Box::new(WorkoutBuilder::new(
            workouts_for(activity::WALKING),
            zone,
            "Walking",
        )),
        Box::new(NutritionBuilder::new(
            records_for(metric::DIETARY_ENERGY_CONSUMED),
            records_for(metric::DIETARY_PROTEIN),
            zone,
        )),
        Box::new(VitalsBuilder::new(
            records_for(metric::HEART_RATE),
            zone,
            "Average Heart Rate",
        )),
        Box::new(VitalsBuilder::new(
            records_for(metric::RESTING_HEART_RATE),
            zone,
            "Average Resting Heart Rate",
        )),
    ];

    let mut columns = Vec::new();
    for builder in &builders {
        columns.extend(builder.build_summary()?);
    }

    // Most recent month first.
    let keys: Vec<MonthKey> = universe.into_iter().rev().collect();

    tracing::debug!(
        months = keys.len(),
        columns = columns.len(),
        "assembled monthly summary"
    );

    Ok(Dataset::new(keys, columns)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Provenance, TimeRange};
    use crate::summary::SummaryError;
    use chrono::{DateTime, TimeZone, Utc};

    fn at(year: i32, month: u32, day: u32, h: u32) -> DateTime<Utc> {
        at_min(year, month, day, h, 0)
    }

    fn at_min(year: i32, month: u32, day: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, h, min, 0).unwrap()
    }

    fn step_record(source: &str, value: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> Record {
        Record::new(metric::STEP_COUNT, start, end, Provenance::new(source))
            .unwrap()
            .with_value(value)
    }

    fn records_map(entries: Vec<Record>) -> HashMap<String, Vec<Record>> {
        let mut map: HashMap<String, Vec<Record>> = HashMap::new();
        for record in entries {
            map.entry(record.metric_type().to_string())
                .or_default()
                .push(record);
        }
        map
    }

    fn workouts_map(entries: Vec<Workout>) -> HashMap<String, Vec<Workout>> {
        let mut map: HashMap<String, Vec<Workout>> = HashMap::new();
        for workout in entries {
            map.entry(workout.activity_type().to_string())
                .or_default()
                .push(workout);
        }
        map
    }

    #[test]
    fn test_fixed_header_order() {
        let dataset =
            build_monthly_summary(&HashMap::new(), &HashMap::new(), chrono_tz::UTC).unwrap();

        let headers: Vec<_> = dataset.headers().collect();
        assert_eq!(
            headers,
            vec![
                "Steps",
                "Average Mass",
                "Average Body Fat %",
                "Cycling Workout Distance",
                "Cycling Workout Duration",
                "Distance Cycling",
                "Strength Training Duration",
                "HIIT Duration",
                "Running Distance",
                "Running Duration",
                "Walking Distance",
                "Walking Duration",
                "Dietary Energy",
                "Dietary Protein",
                "Average Heart Rate",
                "Average Resting Heart Rate",
            ]
        );
        assert!(dataset.keys().is_empty());
    }

    #[test]
    fn test_rows_sorted_descending_by_month() {
        let records = records_map(vec![
            step_record("Phone", "100", at(2022, 12, 5, 10), at(2022, 12, 5, 11)),
            step_record("Phone", "200", at(2023, 3, 5, 10), at(2023, 3, 5, 11)),
            step_record("Phone", "300", at(2023, 1, 5, 10), at(2023, 1, 5, 11)),
        ]);

        let dataset =
            build_monthly_summary(&records, &HashMap::new(), chrono_tz::UTC).unwrap();
        assert_eq!(
            dataset.keys(),
            &[
                MonthKey::new(2023, 3),
                MonthKey::new(2023, 1),
                MonthKey::new(2022, 12),
            ]
        );
    }

    #[test]
    fn test_month_with_only_workout_data_still_gets_a_row() {
        // Steps exist only in January; a March workout must still produce a
        // March row, with the step cell blank rather than zero.
        let records = records_map(vec![step_record(
            "Phone",
            "100",
            at(2023, 1, 10, 10),
            at(2023, 1, 10, 11),
        )]);
        let workouts = workouts_map(vec![Workout::new(
            activity::RUNNING,
            "Watch",
            at(2023, 3, 10, 7),
            at(2023, 3, 10, 8),
        )
        .unwrap()
        .with_duration(60.0, "min")]);

        let dataset = build_monthly_summary(&records, &workouts, chrono_tz::UTC).unwrap();
        assert_eq!(dataset.keys().len(), 2);

        let steps = &dataset.columns()[0];
        assert_eq!(steps.header(), "Steps");
        assert_eq!(steps.value_at(&MonthKey::new(2023, 1)), Some(100.0));
        assert_eq!(steps.value_at(&MonthKey::new(2023, 3)), None);
    }

    #[test]
    fn test_join_completeness() {
        let records = records_map(vec![
            step_record("Phone", "100", at(2023, 1, 5, 10), at(2023, 1, 5, 11)),
            Record::new(
                metric::BODY_MASS,
                at(2023, 2, 5, 7),
                at(2023, 2, 5, 7),
                Provenance::new("Scale"),
            )
            .unwrap()
            .with_value("70.0"),
        ]);

        let dataset =
            build_monthly_summary(&records, &HashMap::new(), chrono_tz::UTC).unwrap();

        // One row per universe month, and every column key is in the universe.
        assert_eq!(dataset.keys().len(), 2);
        for column in dataset.columns() {
            for key in column.keys() {
                assert!(dataset.keys().contains(key));
            }
        }
    }

    #[test]
    fn test_overlap_resolution_flows_through_summary() {
        let records = records_map(vec![
            step_record("Phone", "100", at(2023, 1, 5, 10), at(2023, 1, 5, 11)),
            Record::new(
                metric::STEP_COUNT,
                at_min(2023, 1, 5, 10, 30),
                at_min(2023, 1, 5, 11, 30),
                Provenance::new("Watch"),
            )
            .unwrap()
            .with_value("150"),
        ]);

        let dataset =
            build_monthly_summary(&records, &HashMap::new(), chrono_tz::UTC).unwrap();
        let steps = &dataset.columns()[0];
        assert_eq!(steps.value_at(&MonthKey::new(2023, 1)), Some(150.0));
    }

    #[test]
    fn test_ambiguous_overlap_aborts_the_run() {
        let records = records_map(vec![
            step_record("Phone", "100", at(2023, 1, 5, 10), at(2023, 1, 5, 11)),
            step_record(
                "Tablet",
                "150",
                at_min(2023, 1, 5, 10, 30),
                at_min(2023, 1, 5, 11, 30),
            ),
        ]);

        let err =
            build_monthly_summary(&records, &HashMap::new(), chrono_tz::UTC).unwrap_err();
        assert!(matches!(err, SummaryError::Overlap(_)));
    }

    #[test]
    fn test_zone_assigns_month_rows() {
        // An instant late on Jan 31 in UTC is already February in Tokyo.
        let records = records_map(vec![step_record(
            "Phone",
            "100",
            at(2023, 1, 31, 20),
            at(2023, 1, 31, 21),
        )]);

        let utc = build_monthly_summary(&records, &HashMap::new(), chrono_tz::UTC).unwrap();
        assert_eq!(utc.keys(), &[MonthKey::new(2023, 1)]);

        let tokyo =
            build_monthly_summary(&records, &HashMap::new(), chrono_tz::Asia::Tokyo).unwrap();
        assert_eq!(tokyo.keys(), &[MonthKey::new(2023, 2)]);
    }

    #[test]
    fn test_ranges_survive_into_builder_input() {
        let record = step_record("Phone", "100", at(2023, 1, 5, 10), at(2023, 1, 5, 11));
        let expected = TimeRange::new(at(2023, 1, 5, 10), at(2023, 1, 5, 11)).unwrap();
        assert_eq!(record.range(), &expected);
    }
}
