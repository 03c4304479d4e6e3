//! Ordered record of a run

use crate::error::ArcRunError;
use chrono::TimeDelta;
use std::collections::BTreeMap;
use std::fmt;

/// Identifies one Day Module; orders by year then day
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayKey {
    pub year: u16,
    pub day: u8,
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} day {:02}", self.year, self.day)
    }
}

/// Outcome of one part
#[derive(Debug, Clone)]
pub struct PartRecord {
    pub part: u8,
    pub answer: Result<String, ArcRunError>,
    pub duration: TimeDelta,
}

/// Outcome of one day: its parse and every selected part, in part order
#[derive(Debug, Clone)]
pub struct DayRecord {
    pub key: DayKey,
    pub parse: TimeDelta,
    pub parts: Vec<PartRecord>,
}

impl DayRecord {
    /// Record for the given part number, if it was selected
    pub fn part(&self, part: u8) -> Option<&PartRecord> {
        self.parts.iter().find(|p| p.part == part)
    }

    /// Parse time plus every part's time
    pub fn duration(&self) -> TimeDelta {
        self.parse + self.parts.iter().map(|p| p.duration).sum::<TimeDelta>()
    }

    pub fn failures(&self) -> impl Iterator<Item = (u8, &ArcRunError)> + '_ {
        self.parts.iter().filter_map(|p| p.answer.as_ref().err().map(|e| (p.part, e)))
    }

    pub fn has_failure(&self) -> bool {
        self.failures().next().is_some()
    }
}

/// Report of a Runner pass, ordered by [`DayKey`]
#[derive(Debug, Clone)]
pub struct Report {
    entries: BTreeMap<DayKey, DayRecord>,
    total: TimeDelta,
    halted_at: Option<DayKey>,
}

impl Default for Report {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
            total: TimeDelta::zero(),
            halted_at: None,
        }
    }
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a day's record, replacing any previous record for the same day
    pub fn insert(&mut self, record: DayRecord) {
        self.total += record.duration();
        if let Some(previous) = self.entries.insert(record.key, record) {
            self.total -= previous.duration();
        }
    }

    /// Mark the pass as stopped early at `key`
    pub fn halt_at(&mut self, key: DayKey) {
        self.halted_at = Some(key);
    }

    pub fn entries(&self) -> &BTreeMap<DayKey, DayRecord> {
        &self.entries
    }

    /// Sum of every recorded parse and part duration
    pub fn total(&self) -> TimeDelta {
        self.total
    }

    /// Day at which an aborting pass stopped
    pub fn halted_at(&self) -> Option<DayKey> {
        self.halted_at
    }

    /// Every failed part, in day then part order
    pub fn failures(&self) -> impl Iterator<Item = (DayKey, u8, &ArcRunError)> + '_ {
        self.entries
            .values()
            .flat_map(|record| record.failures().map(move |(part, e)| (record.key, part, e)))
    }

    /// Number of parts that produced an answer
    pub fn solved(&self) -> usize {
        self.entries
            .values()
            .flat_map(|record| &record.parts)
            .filter(|p| p.answer.is_ok())
            .count()
    }

    /// All failures folded into one error
    ///
    /// A day whose input or parse failed records the same error against each
    /// of its parts; it is only reported once here.
    pub fn error(&self) -> Option<ArcRunError> {
        let mut seen: Vec<&ArcRunError> = Vec::new();
        self.failures().fold(None, |acc, (_, _, e)| {
            if seen.iter().any(|s| std::ptr::eq(s.inner(), e.inner())) {
                return acc;
            }
            seen.push(e);
            Some(ArcRunError::combine_opt(acc, e.clone()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{InputError, RunError};
    use proptest::prelude::*;
    use std::path::PathBuf;

    fn ok_part(part: u8, micros: i64) -> PartRecord {
        PartRecord {
            part,
            answer: Ok(format!("answer {part}")),
            duration: TimeDelta::microseconds(micros),
        }
    }

    fn record(year: u16, day: u8, parse: i64, parts: Vec<PartRecord>) -> DayRecord {
        DayRecord {
            key: DayKey { year, day },
            parse: TimeDelta::microseconds(parse),
            parts,
        }
    }

    #[test]
    fn test_label() {
        assert_eq!(DayKey { year: 2024, day: 4 }.to_string(), "2024 day 04");
    }

    #[test]
    fn test_entries_ordered_by_key() {
        let mut report = Report::new();
        report.insert(record(2024, 1, 0, vec![]));
        report.insert(record(2015, 25, 0, vec![]));
        report.insert(record(2022, 10, 0, vec![]));
        let keys: Vec<String> = report.entries().keys().map(|k| k.to_string()).collect();
        assert_eq!(keys, ["2015 day 25", "2022 day 10", "2024 day 01"]);
    }

    #[test]
    fn test_shared_failure_reported_once() {
        let error: ArcRunError = RunError::InputUnavailable {
            year: 2024,
            day: 9,
            path: PathBuf::from("inputs/2024/day_09.txt"),
            source: InputError::Empty,
        }
        .into();
        let mut report = Report::new();
        report.insert(record(2024, 9, 0, vec![
            PartRecord {
                part: 1,
                answer: Err(error.clone()),
                duration: TimeDelta::zero(),
            },
            PartRecord {
                part: 2,
                answer: Err(error),
                duration: TimeDelta::zero(),
            },
        ]));

        assert_eq!(report.failures().count(), 2);
        assert_eq!(report.error().map(|e| e.count()), Some(1));
        assert_eq!(report.solved(), 0);
    }

    proptest! {
        #[test]
        fn prop_total_is_sum_of_durations(
            days in prop::collection::btree_map(1u8..=25, (0i64..10_000, 0i64..10_000, 0i64..10_000), 0..10)
        ) {
            let mut report = Report::new();
            let mut expected = 0;
            for (&day, &(parse, p1, p2)) in &days {
                report.insert(record(2024, day, parse, vec![ok_part(1, p1), ok_part(2, p2)]));
                expected += parse + p1 + p2;
            }
            prop_assert_eq!(report.total(), TimeDelta::microseconds(expected));
            prop_assert_eq!(report.entries().len(), days.len());
            prop_assert!(report.error().is_none());
        }

        #[test]
        fn prop_reinsert_keeps_total_consistent(first in 0i64..10_000, second in 0i64..10_000) {
            let mut report = Report::new();
            report.insert(record(2024, 1, first, vec![]));
            report.insert(record(2024, 1, second, vec![]));
            prop_assert_eq!(report.total(), TimeDelta::microseconds(second));
            prop_assert_eq!(report.entries().len(), 1);
        }
    }
}
