//! Overlap deduplication
//!
//! Multiple recording sources (a watch and a phone, typically) can both log
//! the same metric over the same minutes, which would double-count the
//! metric when summed. This module resolves those conflicts by keeping the
//! sample from the prioritized source and discarding the other.

use thiserror::Error;

use crate::models::Record;

/// Substring identifying the prioritized recording source
pub const PRIORITY_SOURCE_MARKER: &str = "Watch";

/// Error resolving overlapping samples
#[derive(Debug, Error)]
pub enum OverlapError {
    #[error(
        "cannot choose between overlapping {metric_type} samples: \
         '{first_source}' over {first_range} and '{second_source}' over {second_range} \
         (expected exactly one source containing \"{marker}\")"
    )]
    AmbiguousSources {
        metric_type: String,
        first_source: String,
        first_range: String,
        second_source: String,
        second_range: String,
        marker: &'static str,
    },
}

fn ambiguous(current: &Record, next: &Record) -> OverlapError {
    OverlapError::AmbiguousSources {
        metric_type: current.metric_type().to_string(),
        first_source: current.provenance().source_name.clone(),
        first_range: current.range().to_string(),
        second_source: next.provenance().source_name.clone(),
        second_range: next.range().to_string(),
        marker: PRIORITY_SOURCE_MARKER,
    }
}

/// Deduplicate overlapping same-metric samples, preferring the prioritized
/// source.
///
/// Samples are sorted by start date, then scanned pairwise: whenever the
/// next sample starts strictly inside the current one's range, the sample
/// whose source name contains [`PRIORITY_SOURCE_MARKER`] is kept and the
/// other removed. The scan revisits the same index after a removal so newly
/// adjacent pairs are compared too. Overlaps of three or more samples are
/// resolved pairwise, left to right.
///
/// Returns the retained samples in ascending start order with no two
/// entries whose ranges overlap. If neither or both sides of an overlapping
/// pair match the marker, resolution is ambiguous and the call fails.
pub fn prioritize_overlaps(mut samples: Vec<Record>) -> Result<Vec<Record>, OverlapError> {
    samples.sort_by_key(Record::start_date);

    let mut i = 0;
    while i + 1 < samples.len() {
        let current = &samples[i];
        let next = &samples[i + 1];

        if !current.range().contains_instant(next.start_date()) {
            i += 1;
            continue;
        }

        let current_prioritized = current
            .provenance()
            .source_name
            .contains(PRIORITY_SOURCE_MARKER);
        let next_prioritized = next
            .provenance()
            .source_name
            .contains(PRIORITY_SOURCE_MARKER);

        let loser_index = match (current_prioritized, next_prioritized) {
            (true, false) => i + 1,
            (false, true) => i,
            _ => return Err(ambiguous(current, next)),
        };

        let loser = samples.remove(loser_index);
        tracing::debug!(
            metric_type = %loser.metric_type(),
            source = %loser.provenance().source_name,
            range = %loser.range(),
            "discarding overlapping sample from lower-priority source"
        );
        // Do not advance: the removal may expose a new overlap at this index
    }

    Ok(samples)
}
