//! Record model
//!
//! A single point-in-time health measurement: a metric type, a raw value
//! and unit as reported by the export, a time range, and the provenance
//! of the recording source.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::time_range::{TimeRange, TimeRangeError};

/// HealthKit metric type identifiers used by the summary builders
pub mod metric {
    pub const STEP_COUNT: &str = "HKQuantityTypeIdentifierStepCount";
    pub const BODY_MASS: &str = "HKQuantityTypeIdentifierBodyMass";
    pub const BODY_FAT_PERCENTAGE: &str = "HKQuantityTypeIdentifierBodyFatPercentage";
    pub const DISTANCE_CYCLING: &str = "HKQuantityTypeIdentifierDistanceCycling";
    pub const DIETARY_ENERGY_CONSUMED: &str = "HKQuantityTypeIdentifierDietaryEnergyConsumed";
    pub const DIETARY_PROTEIN: &str = "HKQuantityTypeIdentifierDietaryProtein";
    pub const HEART_RATE: &str = "HKQuantityTypeIdentifierHeartRate";
    pub const RESTING_HEART_RATE: &str = "HKQuantityTypeIdentifierRestingHeartRate";
}

/// Where a sample came from.
///
/// Narrowed to the fields the summary core actually reads; the parser's
/// raw element stays upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provenance {
    /// Name of the recording source, e.g. "Robert's Apple Watch"
    pub source_name: String,
    /// Hardware description, when the export carries one
    pub device: Option<String>,
}

impl Provenance {
    pub fn new(source_name: impl Into<String>) -> Self {
        Self {
            source_name: source_name.into(),
            device: None,
        }
    }
}

/// A single metric observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    metric_type: String,
    range: TimeRange,
    creation_date: Option<DateTime<Utc>>,
    /// Raw value text; kept unparsed so categorical metrics survive intact
    value: Option<String>,
    unit: Option<String>,
    provenance: Provenance,
}

impl Record {
    /// Create a record, rejecting an inverted date pair
    pub fn new(
        metric_type: impl Into<String>,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
        provenance: Provenance,
    ) -> Result<Self, TimeRangeError> {
        Ok(Self {
            metric_type: metric_type.into(),
            range: TimeRange::new(start_date, end_date)?,
            creation_date: None,
            value: None,
            unit: None,
            provenance,
        })
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn with_creation_date(mut self, creation_date: DateTime<Utc>) -> Self {
        self.creation_date = Some(creation_date);
        self
    }

    pub fn metric_type(&self) -> &str {
        &self.metric_type
    }

    pub fn range(&self) -> &TimeRange {
        &self.range
    }

    pub fn start_date(&self) -> DateTime<Utc> {
        self.range.start()
    }

    pub fn end_date(&self) -> DateTime<Utc> {
        self.range.end()
    }

    pub fn creation_date(&self) -> Option<DateTime<Utc>> {
        self.creation_date
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }

    pub fn provenance(&self) -> &Provenance {
        &self.provenance
    }

    /// Parse the raw value as a number, if it is one
    pub fn parsed_value(&self) -> Option<f64> {
        self.value.as_deref().and_then(|v| v.parse().ok())
    }

    /// Parse the raw value as a number, falling back to `fallback` when the
    /// value is absent or not numeric.
    ///
    /// The fallback path is logged so a defaulted value can be told apart
    /// from a genuine reading in the output.
    pub fn numeric_value(&self, fallback: f64) -> f64 {
        match self.parsed_value() {
            Some(v) => v,
            None => {
                tracing::warn!(
                    metric_type = %self.metric_type,
                    raw_value = ?self.value,
                    fallback,
                    "non-numeric record value, using fallback"
                );
                fallback
            }
        }
    }
}
