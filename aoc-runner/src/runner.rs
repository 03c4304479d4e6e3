//! Sequential Runner over the registered Day Modules

use crate::error::{ArcRunError, RunError};
use crate::inputs::InputStore;
use crate::report::{DayKey, DayRecord, PartRecord, Report};
use aoc_day::{DynSolver, FactoryInfo, SolverRegistry};
use chrono::{TimeDelta, Utc};
use std::ops::RangeInclusive;

/// Narrows a run to one year, day and/or part; `None` selects everything
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub year: Option<u16>,
    pub day: Option<u8>,
    pub part: Option<u8>,
}

impl Selection {
    /// Whether the Day Module described by `info` is selected
    pub fn matches(&self, info: &FactoryInfo) -> bool {
        self.year.is_none_or(|y| info.year == y) && self.day.is_none_or(|d| info.day == d)
    }

    /// Parts to run for a module with `max_parts` parts
    #[allow(clippy::reversed_empty_ranges)]
    pub fn parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.part {
            Some(p) if (1..=max_parts).contains(&p) => p..=p,
            Some(_) => 1..=0, // Empty range - intentional
            None => 1..=max_parts,
        }
    }
}

/// What to do once a day has recorded a failure
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Record the failure and move on to the next day
    #[default]
    Continue,
    /// Stop the pass after the failing day
    Abort,
}

/// Work item representing a Day Module to run
#[derive(Debug, Clone)]
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
    pub input: Option<&'static str>,
}

impl WorkItem {
    pub fn key(&self) -> DayKey {
        DayKey {
            year: self.year,
            day: self.day,
        }
    }
}

/// Runs every selected Day Module once, in year then day order
pub struct Runner<'r> {
    registry: &'r SolverRegistry,
    inputs: InputStore,
    selection: Selection,
    policy: FailurePolicy,
}

impl<'r> Runner<'r> {
    pub fn new(
        registry: &'r SolverRegistry,
        inputs: InputStore,
        selection: Selection,
        policy: FailurePolicy,
    ) -> Self {
        Self {
            registry,
            inputs,
            selection,
            policy,
        }
    }

    /// Collect work items by filtering from registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        self.registry
            .storage()
            .iter_info()
            .filter(|info| self.selection.matches(info))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: self.selection.parts(info.parts),
                input: info.input,
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Run the pass and return its Report
    pub fn run(&self) -> Report {
        self.run_with(|_| {})
    }

    /// Run the pass, handing each day's record to `on_day` as soon as it completes
    pub fn run_with<F>(&self, mut on_day: F) -> Report
    where
        F: FnMut(&DayRecord),
    {
        let mut report = Report::new();

        for work in self.collect_work_items() {
            let record = self.run_day(&work);
            on_day(&record);

            let failed = record.has_failure();
            report.insert(record);

            if failed && self.policy == FailurePolicy::Abort {
                log::warn!("stopping after failure in {}", work.key());
                report.halt_at(work.key());
                break;
            }
        }

        report
    }

    /// Load, parse and solve one day; every outcome ends up in the record
    fn run_day(&self, work: &WorkItem) -> DayRecord {
        let (year, day) = (work.year, work.day);
        log::debug!("running {} parts {:?}", work.key(), work.parts);

        let input = match self.inputs.load(year, day, work.input) {
            Ok(input) => input,
            Err(e) => return failed_day(work, e.into(), TimeDelta::zero()),
        };

        let parse_start = Utc::now();
        let mut solver = match self.registry.create_solver(year, day, &input) {
            Ok(solver) => solver,
            Err(source) => {
                let error = RunError::Solver { year, day, source }.into();
                return failed_day(work, error, Utc::now() - parse_start);
            }
        };

        let parts = work
            .parts
            .clone()
            .map(|part| solve_part(year, day, part, &mut *solver))
            .collect();

        DayRecord {
            key: work.key(),
            parse: solver.parse_duration(),
            parts,
        }
    }
}

/// Record `error` against every selected part of the day
fn failed_day(work: &WorkItem, error: ArcRunError, parse: TimeDelta) -> DayRecord {
    DayRecord {
        key: work.key(),
        parse,
        parts: work
            .parts
            .clone()
            .map(|part| PartRecord {
                part,
                answer: Err(error.clone()),
                duration: TimeDelta::zero(),
            })
            .collect(),
    }
}

/// Solve a single part
fn solve_part(year: u16, day: u8, part: u8, solver: &mut dyn DynSolver) -> PartRecord {
    let solve_start = Utc::now();
    match solver.solve(part) {
        Ok(result) => PartRecord {
            part,
            duration: result.duration(),
            answer: Ok(result.answer),
        },
        Err(e) => PartRecord {
            part,
            answer: Err(RunError::Solver {
                year,
                day,
                source: e.into(),
            }
            .into()),
            duration: Utc::now() - solve_start,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_day::{
        AocParser, ParseError, SolveError, Solver, SolverInstance, SolverRegistryBuilder,
    };
    use tempfile::TempDir;

    /// Part 1 counts lines, part 2 counts characters
    struct Lines;

    impl AocParser for Lines {
        type SharedData<'a> = Vec<&'a str>;

        fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
            if input.contains("bad") {
                return Err(ParseError::InvalidFormat("bad line".into()));
            }
            Ok(input.lines().collect())
        }
    }

    impl Solver for Lines {
        const PARTS: u8 = 2;

        fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
            match part {
                1 => Ok(shared.len().to_string()),
                2 => Ok(shared.iter().map(|l| l.len()).sum::<usize>().to_string()),
                _ => Err(SolveError::PartNotImplemented(part)),
            }
        }
    }

    /// Part 2 always fails
    struct Stuck;

    impl AocParser for Stuck {
        type SharedData<'a> = &'a str;

        fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
            Ok(input)
        }
    }

    impl Solver for Stuck {
        const PARTS: u8 = 2;

        fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
            match part {
                1 => Ok(shared.to_uppercase()),
                _ => Err(SolveError::failed(std::fmt::Error)),
            }
        }
    }

    fn bundled<S: Solver + 'static>(
        builder: SolverRegistryBuilder,
        year: u16,
        day: u8,
        input: &'static str,
    ) -> SolverRegistryBuilder {
        builder
            .register_factory(FactoryInfo::of::<S>(year, day).with_input(input), move |input: &str| {
                let solver: Box<dyn DynSolver + '_> = Box::new(SolverInstance::<S>::new(input)?);
                Ok(solver)
            })
            .unwrap()
    }

    fn registry() -> SolverRegistry {
        let builder = SolverRegistryBuilder::new();
        let builder = bundled::<Stuck>(builder, 2016, 2, "stuck");
        let builder = bundled::<Lines>(builder, 2015, 1, "a\nbb");
        let builder = bundled::<Lines>(builder, 2016, 1, "xyz");
        let builder = bundled::<Lines>(builder, 2015, 2, "bad");
        builder.build()
    }

    fn runner(registry: &SolverRegistry, selection: Selection, policy: FailurePolicy) -> Runner<'_> {
        Runner::new(registry, InputStore::new("does-not-exist".into()), selection, policy)
    }

    fn answers(report: &Report) -> Vec<(String, u8, Result<String, String>)> {
        report
            .entries()
            .values()
            .flat_map(|record| {
                record.parts.iter().map(move |p| {
                    (
                        record.key.to_string(),
                        p.part,
                        p.answer.clone().map_err(|e| e.to_string()),
                    )
                })
            })
            .collect()
    }

    #[test]
    fn test_selection_parts() {
        let all = Selection::default();
        assert_eq!(all.parts(2), 1..=2);

        let second = Selection {
            part: Some(2),
            ..Selection::default()
        };
        assert_eq!(second.parts(2), 2..=2);
        assert!(second.parts(1).is_empty());
    }

    #[test]
    fn test_work_items_follow_selection() {
        let registry = registry();

        let items = runner(&registry, Selection::default(), FailurePolicy::Continue).collect_work_items();
        let keys: Vec<_> = items.iter().map(|w| (w.year, w.day)).collect();
        assert_eq!(keys, vec![(2015, 1), (2015, 2), (2016, 1), (2016, 2)]);
        assert_eq!(items[0].input, Some("a\nbb"));

        let selection = Selection {
            year: Some(2016),
            part: Some(2),
            ..Selection::default()
        };
        let items = runner(&registry, selection, FailurePolicy::Continue).collect_work_items();
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|w| w.year == 2016 && w.parts == (2..=2)));
    }

    #[test]
    fn test_year_and_day_select_one_entry() {
        let registry = registry();
        let selection = Selection {
            year: Some(2016),
            day: Some(1),
            part: None,
        };
        let report = runner(&registry, selection, FailurePolicy::Continue).run();

        assert_eq!(report.entries().len(), 1);
        assert_eq!(
            answers(&report),
            vec![
                ("2016 day 01".to_string(), 1, Ok("1".to_string())),
                ("2016 day 01".to_string(), 2, Ok("3".to_string())),
            ]
        );
    }

    #[test]
    fn test_total_is_sum_of_recorded_durations() {
        let registry = registry();
        let report = runner(&registry, Selection::default(), FailurePolicy::Continue).run();

        let sum: TimeDelta = report
            .entries()
            .values()
            .map(|r| r.parse + r.parts.iter().map(|p| p.duration).sum::<TimeDelta>())
            .sum();
        assert_eq!(report.total(), sum);
    }

    #[test]
    fn test_failures_are_isolated_when_continuing() {
        let registry = registry();
        let report = runner(&registry, Selection::default(), FailurePolicy::Continue).run();

        assert_eq!(report.entries().len(), 4);
        assert_eq!(report.halted_at(), None);

        let day_1 = &report.entries()[&DayKey { year: 2015, day: 1 }];
        assert_eq!(day_1.part(1).unwrap().answer.as_deref().ok(), Some("2"));
        assert_eq!(day_1.part(2).unwrap().answer.as_deref().ok(), Some("3"));

        let failed: Vec<_> = report.failures().map(|(key, part, _)| (key.to_string(), part)).collect();
        assert_eq!(
            failed,
            vec![
                ("2015 day 02".to_string(), 1),
                ("2015 day 02".to_string(), 2),
                ("2016 day 02".to_string(), 2),
            ]
        );
        assert_eq!(report.solved(), 5);
        // The parse failure of 2015 day 02 counts once
        assert_eq!(report.error().map(|e| e.count()), Some(2));
    }

    #[test]
    fn test_abort_stops_after_first_failing_day() {
        let registry = registry();
        let report = runner(&registry, Selection::default(), FailurePolicy::Abort).run();

        let keys: Vec<_> = report.entries().keys().map(|k| k.to_string()).collect();
        assert_eq!(keys, ["2015 day 01", "2015 day 02"]);
        assert_eq!(report.halted_at(), Some(DayKey { year: 2015, day: 2 }));
        assert!(!report.entries()[&DayKey { year: 2015, day: 1 }].has_failure());
    }

    #[test]
    fn test_runs_are_idempotent() {
        let registry = registry();
        let runner = runner(&registry, Selection::default(), FailurePolicy::Continue);
        assert_eq!(answers(&runner.run()), answers(&runner.run()));
    }

    #[test]
    fn test_records_streamed_in_order() {
        let registry = registry();
        let mut seen = Vec::new();
        runner(&registry, Selection::default(), FailurePolicy::Continue).run_with(|r| seen.push(r.key.to_string()));
        assert_eq!(seen, ["2015 day 01", "2015 day 02", "2016 day 01", "2016 day 02"]);
    }

    #[test]
    fn test_missing_input_recorded_on_every_part() {
        let temp = TempDir::new().unwrap();
        let registry = SolverRegistryBuilder::new()
            .register::<Lines>(2024, 1)
            .unwrap()
            .build();
        let runner = Runner::new(
            &registry,
            InputStore::new(temp.path().to_path_buf()),
            Selection::default(),
            FailurePolicy::Continue,
        );

        let report = runner.run();
        let record = &report.entries()[&DayKey { year: 2024, day: 1 }];
        assert_eq!(record.failures().count(), 2);
        assert!(
            record
                .failures()
                .all(|(_, e)| matches!(e.inner(), RunError::InputUnavailable { .. }))
        );

        std::fs::create_dir_all(temp.path().join("2024")).unwrap();
        std::fs::write(temp.path().join("2024").join("day_01.txt"), "one\ntwo\n").unwrap();

        let report = runner.run();
        assert_eq!(
            answers(&report),
            vec![
                ("2024 day 01".to_string(), 1, Ok("2".to_string())),
                ("2024 day 01".to_string(), 2, Ok("6".to_string())),
            ]
        );
    }
}
