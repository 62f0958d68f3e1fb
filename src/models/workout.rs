//! Workout model
//!
//! A timed activity session with optional duration, distance, and energy
//! totals as reported by the export. Optional fields stay `None` when the
//! export omits them; missing is never folded into zero.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::time_range::{TimeRange, TimeRangeError};

/// HealthKit workout activity type identifiers used by the summary builders
pub mod activity {
    pub const CYCLING: &str = "HKWorkoutActivityTypeCycling";
    pub const RUNNING: &str = "HKWorkoutActivityTypeRunning";
    pub const WALKING: &str = "HKWorkoutActivityTypeWalking";
    pub const STRENGTH_TRAINING: &str = "HKWorkoutActivityTypeTraditionalStrengthTraining";
    pub const HIIT: &str = "HKWorkoutActivityTypeHighIntensityIntervalTraining";
}

/// A timed activity session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    activity_type: String,
    source_name: String,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    creation_date: Option<DateTime<Utc>>,
    duration: Option<f64>,
    duration_unit: Option<String>,
    total_distance: Option<f64>,
    total_distance_unit: Option<String>,
    total_energy_burned: Option<f64>,
    total_energy_burned_unit: Option<String>,
    device: Option<String>,
}

impl Workout {
    /// Create a workout, rejecting an inverted date pair
    pub fn new(
        activity_type: impl Into<String>,
        source_name: impl Into<String>,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Result<Self, TimeRangeError> {
        // Validates the date pair; the range itself is derived on demand
        TimeRange::new(start_date, end_date)?;
        Ok(Self {
            activity_type: activity_type.into(),
            source_name: source_name.into(),
            start_date,
            end_date,
            creation_date: None,
            duration: None,
            duration_unit: None,
            total_distance: None,
            total_distance_unit: None,
            total_energy_burned: None,
            total_energy_burned_unit: None,
            device: None,
        })
    }

    pub fn with_duration(mut self, duration: f64, unit: impl Into<String>) -> Self {
        self.duration = Some(duration);
        self.duration_unit = Some(unit.into());
        self
    }

    pub fn with_total_distance(mut self, distance: f64, unit: impl Into<String>) -> Self {
        self.total_distance = Some(distance);
        self.total_distance_unit = Some(unit.into());
        self
    }

    pub fn with_total_energy_burned(mut self, energy: f64, unit: impl Into<String>) -> Self {
        self.total_energy_burned = Some(energy);
        self.total_energy_burned_unit = Some(unit.into());
        self
    }

    pub fn with_creation_date(mut self, creation_date: DateTime<Utc>) -> Self {
        self.creation_date = Some(creation_date);
        self
    }

    pub fn with_device(mut self, device: impl Into<String>) -> Self {
        self.device = Some(device.into());
        self
    }

    pub fn activity_type(&self) -> &str {
        &self.activity_type
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn start_date(&self) -> DateTime<Utc> {
        self.start_date
    }

    pub fn end_date(&self) -> DateTime<Utc> {
        self.end_date
    }

    pub fn creation_date(&self) -> Option<DateTime<Utc>> {
        self.creation_date
    }

    pub fn duration(&self) -> Option<f64> {
        self.duration
    }

    pub fn duration_unit(&self) -> Option<&str> {
        self.duration_unit.as_deref()
    }

    pub fn total_distance(&self) -> Option<f64> {
        self.total_distance
    }

    pub fn total_distance_unit(&self) -> Option<&str> {
        self.total_distance_unit.as_deref()
    }

    pub fn total_energy_burned(&self) -> Option<f64> {
        self.total_energy_burned
    }

    pub fn total_energy_burned_unit(&self) -> Option<&str> {
        self.total_energy_burned_unit.as_deref()
    }

    pub fn device(&self) -> Option<&str> {
        self.device.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_new_rejects_inverted_dates() {
        let start = Utc.with_ymd_and_hms(2023, 1, 15, 8, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2023, 1, 15, 7, 0, 0).unwrap();
        assert!(Workout::new(activity::CYCLING, "Watch", start, end).is_err());
    }

    #[test]
    fn test_optional_totals_default_to_none() {
        let start = Utc.with_ymd_and_hms(2023, 1, 15, 8, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2023, 1, 15, 9, 0, 0).unwrap();
        let workout = Workout::new(activity::STRENGTH_TRAINING, "Watch", start, end).unwrap();
        assert_eq!(workout.duration(), None);
        assert_eq!(workout.total_distance(), None);
        assert_eq!(workout.total_energy_burned(), None);
    }

    #[test]
    fn test_builder_setters() {
        let start = Utc.with_ymd_and_hms(2023, 1, 15, 8, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2023, 1, 15, 9, 0, 0).unwrap();
        let workout = Workout::new(activity::CYCLING, "Watch", start, end)
            .unwrap()
            .with_duration(60.0, "min")
            .with_total_distance(25.3, "km");
        assert_eq!(workout.duration(), Some(60.0));
        assert_eq!(workout.duration_unit(), Some("min"));
        assert_eq!(workout.total_distance(), Some(25.3));
        assert_eq!(workout.total_distance_unit(), Some("km"));
    }
}
