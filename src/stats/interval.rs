use std::collections::BTreeMap;
use chrono::{NaiveDateTime, TimeDelta};
use crate::error::{AidError, Result};
use crate::models::Interaction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalStats {
    pub min: TimeDelta,
    pub max: TimeDelta,
    /// Total span divided by the number of gaps
    pub average: TimeDelta,
}

/// Interactions sharing one report key.
///
/// `records` holds every matching interaction in time order (one per target
/// for area effects). `occurrences` holds one interaction per distinct
/// timestamp, so an area effect counts as a single cast.
#[derive(Debug, Clone)]
pub struct ActionGroup<'a> {
    records: Vec<&'a Interaction>,
    occurrences: Vec<&'a Interaction>,
}

impl<'a> ActionGroup<'a> {
    pub fn new(mut records: Vec<&'a Interaction>) -> Self {
        // Input is expected in time order already; sorting keeps results stable if it isn't.
        records.sort_by_key(|interaction| interaction.timestamp);
        let occurrences = dedup_by_timestamp(&records);
        Self { records, occurrences }
    }

    pub fn records(&self) -> &[&'a Interaction] {
        &self.records
    }

    pub fn occurrences(&self) -> &[&'a Interaction] {
        &self.occurrences
    }

    /// Number of distinct timestamps.
    pub fn count(&self) -> usize {
        self.occurrences.len()
    }

    pub fn first(&self) -> Option<NaiveDateTime> {
        self.occurrences.first().map(|interaction| interaction.timestamp)
    }

    pub fn last(&self) -> Option<NaiveDateTime> {
        self.occurrences.last().map(|interaction| interaction.timestamp)
    }

    pub fn total_amount(&self) -> i64 {
        self.records.iter().map(|interaction| interaction.amount as i64).sum()
    }

    pub fn intervals(&self) -> Result<Option<IntervalStats>> {
        let timestamps: Vec<NaiveDateTime> = self.occurrences.iter().map(|interaction| interaction.timestamp).collect();
        interval_stats(&timestamps)
    }
}

/// Keeps the first interaction of each run of equal timestamps.
///
/// Input must be sorted by timestamp; the result is sorted and free of
/// duplicate timestamps, so applying it again changes nothing.
pub fn dedup_by_timestamp<'a>(sorted: &[&'a Interaction]) -> Vec<&'a Interaction> {
    let mut occurrences: Vec<&'a Interaction> = Vec::with_capacity(sorted.len());
    for &interaction in sorted {
        if occurrences.last().is_none_or(|last| last.timestamp != interaction.timestamp) {
            occurrences.push(interaction);
        }
    }
    occurrences
}

/// Min/max/average gap between consecutive timestamps.
///
/// Returns `None` for fewer than two timestamps. The average is
/// `(last - first) / (count - 1)` rather than a mean of the individual gaps.
pub fn interval_stats(timestamps: &[NaiveDateTime]) -> Result<Option<IntervalStats>> {
    let (Some(&first), Some(&last)) = (timestamps.first(), timestamps.last()) else {
        return Ok(None);
    };
    if timestamps.len() < 2 {
        return Ok(None);
    }

    let mut gaps = Vec::with_capacity(timestamps.len() - 1);
    for pair in timestamps.windows(2) {
        let gap = pair[1].signed_duration_since(pair[0]);
        if gap <= TimeDelta::zero() {
            return Err(AidError::IntegrityFault {
                at: pair[1],
                gap_ms: gap.num_milliseconds(),
            });
        }
        gaps.push(gap);
    }

    let gap_count = i32::try_from(gaps.len()).map_err(|_| AidError::IntegrityFault {
        at: last,
        gap_ms: 0,
    })?;
    let min = gaps.iter().copied().min().unwrap_or(TimeDelta::zero());
    let max = gaps.iter().copied().max().unwrap_or(TimeDelta::zero());
    let average = last.signed_duration_since(first) / gap_count;

    Ok(Some(IntervalStats { min, max, average }))
}

/// Groups countable interactions by `key_fn`.
///
/// Preparing casts and interactions without a resolved action are dropped
/// before the key function sees them; a `None` key drops the interaction too.
/// Only keys that received at least one interaction appear in the result.
pub fn aggregate<'a, K, I, F>(interactions: I, mut key_fn: F) -> BTreeMap<K, ActionGroup<'a>>
where
    K: Ord,
    I: IntoIterator<Item = &'a Interaction>,
    F: FnMut(&'a Interaction) -> Option<K>,
{
    let mut buckets: BTreeMap<K, Vec<&'a Interaction>> = BTreeMap::new();
    for interaction in interactions {
        if !interaction.is_countable() {
            continue;
        }
        if let Some(key) = key_fn(interaction) {
            buckets.entry(key).or_default().push(interaction);
        }
    }

    buckets
        .into_iter()
        .map(|(key, records)| (key, ActionGroup::new(records)))
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use super::*;
    use crate::models::CombatantId;

    fn at(millis: i64) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .and_then(|date| date.and_hms_opt(20, 0, 0))
            .map(|start| start + TimeDelta::milliseconds(millis))
            .unwrap()
    }

    fn cast(millis: i64) -> Interaction {
        Interaction::new(at(millis), CombatantId(1), "Protect")
    }

    #[test]
    fn fewer_than_two_timestamps_have_no_intervals() {
        assert_eq!(interval_stats(&[]).unwrap(), None);
        assert_eq!(interval_stats(&[at(0)]).unwrap(), None);
    }

    #[test]
    fn average_is_span_over_gap_count() {
        let stats = interval_stats(&[at(0), at(1_000), at(2_001)]).unwrap().unwrap();
        assert_eq!(stats.min, TimeDelta::milliseconds(1_000));
        assert_eq!(stats.max, TimeDelta::milliseconds(1_001));
        assert_eq!(stats.average, TimeDelta::microseconds(1_000_500));
    }

    #[test]
    fn repeated_timestamp_is_an_integrity_fault() {
        let result = interval_stats(&[at(0), at(0)]);
        assert!(matches!(result, Err(AidError::IntegrityFault { gap_ms: 0, .. })));
    }

    #[test]
    fn dedup_is_idempotent() {
        let casts = [cast(0), cast(0), cast(500), cast(500), cast(500), cast(900)];
        let sorted: Vec<&Interaction> = casts.iter().collect();

        let once = dedup_by_timestamp(&sorted);
        let twice = dedup_by_timestamp(&once);

        assert_eq!(once.len(), 3);
        assert_eq!(once, twice);
    }

    #[test]
    fn group_sorts_unordered_input() {
        let casts = [cast(3_000), cast(1_000), cast(2_000), cast(1_000)];
        let group = ActionGroup::new(casts.iter().collect());

        assert_eq!(group.count(), 3);
        assert_eq!(group.records().len(), 4);
        assert_eq!(group.first(), Some(at(1_000)));
        assert_eq!(group.last(), Some(at(3_000)));
        let stats = group.intervals().unwrap().unwrap();
        assert_eq!(stats.average, TimeDelta::seconds(1));
    }

    #[test]
    fn aggregate_skips_preparing_and_unresolved() {
        let mut preparing = cast(0);
        preparing.preparing = true;
        let mut unresolved = cast(100);
        unresolved.action_name = None;
        let mut blank = cast(200);
        blank.action_name = Some(String::new());
        let casts = [preparing, unresolved, blank, cast(300)];

        let groups = aggregate(&casts, |interaction| interaction.resolved_action().map(str::to_string));

        assert_eq!(groups.len(), 1);
        assert_eq!(groups["Protect"].count(), 1);
    }
}
