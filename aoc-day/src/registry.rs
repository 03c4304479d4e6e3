//! Registry of Day Modules, ordered by year then day

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use crate::solver::{Example, Solver};

// ============================================================================
// Slot layout
// ============================================================================

/// First puzzle year
pub const BASE_YEAR: u16 = 2015;
/// Number of years with a slot (2015-2034)
pub const MAX_YEARS: usize = 20;
/// Puzzle days per year
pub const DAYS_PER_YEAR: usize = 25;
/// Total number of slots
pub const CAPACITY: usize = MAX_YEARS * DAYS_PER_YEAR;

/// Slot of a year/day; `None` outside 2015-2034 or days 1-25
///
/// Slots grow with the year, then the day, so walking them in order
/// visits Day Modules in registration order.
#[inline]
fn slot(year: u16, day: u8) -> Option<usize> {
    let year = usize::from(year.checked_sub(BASE_YEAR)?);
    let day = usize::from(day.checked_sub(1)?);
    (year < MAX_YEARS && day < DAYS_PER_YEAR).then_some(year * DAYS_PER_YEAR + day)
}

// ============================================================================
// Factories
// ============================================================================

/// Parses an input into a ready-to-solve instance
pub type SolverFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError> + Send + Sync>;

/// What the registry knows about a Day Module without running it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactoryInfo {
    pub year: u16,
    pub day: u8,
    /// Number of parts, always at least 1
    pub parts: u8,
    /// Bundled example fixtures
    pub examples: &'static [Example],
    /// Bundled real input, for inputs short enough to embed
    pub input: Option<&'static str>,
}

impl FactoryInfo {
    /// Info with no bundled examples or input
    pub const fn new(year: u16, day: u8, parts: u8) -> Self {
        Self {
            year,
            day,
            parts,
            examples: &[],
            input: None,
        }
    }

    /// Info taken from the Day Module `S`
    pub fn of<S: Solver>(year: u16, day: u8) -> Self {
        Self {
            examples: S::EXAMPLES,
            input: S::INPUT,
            ..Self::new(year, day, S::PARTS)
        }
    }

    /// Replace the bundled real input
    pub const fn with_input(mut self, input: &'static str) -> Self {
        self.input = Some(input);
        self
    }
}

struct Entry {
    factory: SolverFactory,
    info: FactoryInfo,
}

// ============================================================================
// Storage
// ============================================================================

/// Read-only view of the registered Day Modules
pub struct SolverFactoryStorage {
    slots: Vec<Option<Entry>>,
}

impl SolverFactoryStorage {
    fn entry(&self, year: u16, day: u8) -> Option<&Entry> {
        self.slots.get(slot(year, day)?)?.as_ref()
    }

    /// Info of every registered Day Module, by year then day
    pub fn iter_info(&self) -> impl Iterator<Item = FactoryInfo> + '_ {
        self.slots.iter().flatten().map(|entry| entry.info)
    }

    pub fn get_info(&self, year: u16, day: u8) -> Option<FactoryInfo> {
        self.entry(year, day).map(|entry| entry.info)
    }

    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.entry(year, day).is_some()
    }

    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Collects Day Modules, then freezes them into a [`SolverRegistry`]
///
/// Each year/day can be registered once.
///
/// # Example
///
/// ```
/// use aoc_day::{AocParser, ParseError, SolveError, Solver, SolverRegistryBuilder};
///
/// struct Echo;
///
/// impl AocParser for Echo {
///     type SharedData<'a> = &'a str;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input)
///     }
/// }
///
/// impl Solver for Echo {
///     const PARTS: u8 = 1;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, _part: u8) -> Result<String, SolveError> {
///         Ok(shared.to_string())
///     }
/// }
///
/// let registry = SolverRegistryBuilder::new()
///     .register::<Echo>(2024, 1)
///     .unwrap()
///     .build();
///
/// let mut solver = registry.create_solver(2024, 1, "hello").unwrap();
/// assert_eq!(solver.solve(1).unwrap().answer, "hello");
/// ```
pub struct SolverRegistryBuilder {
    slots: Vec<Option<Entry>>,
}

impl SolverRegistryBuilder {
    pub fn new() -> Self {
        Self {
            slots: std::iter::repeat_with(|| None).take(CAPACITY).collect(),
        }
    }

    /// Register a factory under `info.year`/`info.day`
    pub fn register_factory<F>(mut self, info: FactoryInfo, factory: F) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>
            + Send
            + Sync
            + 'static,
    {
        let (year, day) = (info.year, info.day);
        let index = slot(year, day).ok_or(RegistrationError::InvalidYearDay(year, day))?;

        let target = &mut self.slots[index];
        if target.is_some() {
            return Err(RegistrationError::DuplicateSolver(year, day));
        }
        *target = Some(Entry {
            factory: Box::new(factory),
            info,
        });
        Ok(self)
    }

    /// Register the Day Module `S`
    pub fn register<S>(self, year: u16, day: u8) -> Result<Self, RegistrationError>
    where
        S: Solver + 'static,
    {
        self.register_factory(FactoryInfo::of::<S>(year, day), |input: &str| {
            let solver: Box<dyn DynSolver + '_> = Box::new(SolverInstance::<S>::new(input)?);
            Ok(solver)
        })
    }

    /// Register every plugin submitted through `inventory`
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_solver_plugins(|_| true)
    }

    /// Register the plugins accepted by `filter`
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use aoc_day::SolverRegistryBuilder;
    /// // Only the 2024 Day Modules tagged "grid"
    /// let registry = SolverRegistryBuilder::new()
    ///     .register_solver_plugins(|plugin| plugin.year == 2024 && plugin.tags.contains(&"grid"))
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_solver_plugins<F>(self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        inventory::iter::<SolverPlugin>()
            .filter(|plugin| filter(plugin))
            .try_fold(self, |builder, plugin| {
                plugin.solver.register_with(builder, plugin.year, plugin.day)
            })
    }

    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            storage: SolverFactoryStorage { slots: self.slots },
        }
    }
}

impl Default for SolverRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Registry
// ============================================================================

/// Immutable collection of Day Modules
pub struct SolverRegistry {
    storage: SolverFactoryStorage,
}

impl SolverRegistry {
    pub fn storage(&self) -> &SolverFactoryStorage {
        &self.storage
    }

    /// Parse `input` with the Day Module registered for year/day
    pub fn create_solver<'a>(
        &self,
        year: u16,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        slot(year, day).ok_or(SolverError::InvalidYearDay(year, day))?;
        let entry = self
            .storage
            .entry(year, day)
            .ok_or(SolverError::NotFound(year, day))?;

        Ok((entry.factory)(input)?)
    }
}

// ============================================================================
// Plugins
// ============================================================================

/// Registration hook without associated types, so plugins of different
/// Day Modules fit in one `inventory` collection
///
/// Every `Solver + Sync + 'static` gets it through a blanket impl.
pub trait RegisterableSolver: Sync {
    fn register_with(
        &self,
        builder: SolverRegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<SolverRegistryBuilder, RegistrationError>;
}

impl<S> RegisterableSolver for S
where
    S: Solver + Sync + 'static,
{
    fn register_with(
        &self,
        builder: SolverRegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<SolverRegistryBuilder, RegistrationError> {
        builder.register::<S>(year, day)
    }
}

/// A Day Module submitted for automatic registration
///
/// Usually submitted by `#[derive(AutoRegisterSolver)]`; by hand it reads:
///
/// ```no_run
/// use aoc_day::{AocParser, ParseError, SolveError, Solver, SolverPlugin};
///
/// struct Day1Solver;
///
/// impl AocParser for Day1Solver {
///     type SharedData<'a> = ();
///
///     fn parse(_: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(())
///     }
/// }
///
/// impl Solver for Day1Solver {
///     const PARTS: u8 = 1;
///
///     fn solve_part(_: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         Err(SolveError::PartNotImplemented(part))
///     }
/// }
///
/// inventory::submit! {
///     SolverPlugin {
///         year: 2023,
///         day: 1,
///         solver: &Day1Solver,
///         tags: &["2023", "easy"],
///     }
/// }
/// ```
pub struct SolverPlugin {
    pub year: u16,
    pub day: u8,
    pub solver: &'static dyn RegisterableSolver,
    /// Labels used to narrow a run, such as "grid" or "regex"
    pub tags: &'static [&'static str],
}

inventory::collect!(SolverPlugin);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AocParser, SolveError};

    struct Upper;

    impl AocParser for Upper {
        type SharedData<'a> = &'a str;

        fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
            Ok(input)
        }
    }

    impl Solver for Upper {
        const PARTS: u8 = 2;
        const EXAMPLES: &'static [Example] = &[Example::new(1, "ab", "AB")];

        fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
            match part {
                1 => Ok(shared.to_uppercase()),
                2 => Ok(shared.to_lowercase()),
                _ => Err(SolveError::PartNotImplemented(part)),
            }
        }
    }

    #[test]
    fn test_slot_bounds() {
        assert_eq!(slot(2015, 1), Some(0));
        assert_eq!(slot(2015, 25), Some(24));
        assert_eq!(slot(2016, 1), Some(25));
        assert_eq!(slot(2034, 25), Some(CAPACITY - 1));
        assert_eq!(slot(2014, 1), None);
        assert_eq!(slot(2035, 1), None);
        assert_eq!(slot(2024, 0), None);
        assert_eq!(slot(2024, 26), None);
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let result = SolverRegistryBuilder::new()
            .register::<Upper>(2024, 1)
            .unwrap()
            .register::<Upper>(2024, 1);
        assert!(matches!(
            result,
            Err(RegistrationError::DuplicateSolver(2024, 1))
        ));
    }

    #[test]
    fn test_out_of_range_registration_rejected() {
        let result = SolverRegistryBuilder::new().register::<Upper>(2024, 26);
        assert!(matches!(
            result,
            Err(RegistrationError::InvalidYearDay(2024, 26))
        ));
    }

    #[test]
    fn test_iter_info_is_ordered_by_year_then_day() {
        let registry = SolverRegistryBuilder::new()
            .register::<Upper>(2024, 5)
            .unwrap()
            .register::<Upper>(2015, 25)
            .unwrap()
            .register::<Upper>(2024, 1)
            .unwrap()
            .build();

        let keys: Vec<_> = registry
            .storage()
            .iter_info()
            .map(|info| (info.year, info.day))
            .collect();
        assert_eq!(keys, vec![(2015, 25), (2024, 1), (2024, 5)]);
        assert_eq!(registry.storage().len(), 3);
        assert!(!registry.storage().is_empty());
    }

    #[test]
    fn test_info_carries_solver_metadata() {
        let registry = SolverRegistryBuilder::new()
            .register::<Upper>(2022, 10)
            .unwrap()
            .build();

        let info = registry.storage().get_info(2022, 10).unwrap();
        assert_eq!(info.parts, 2);
        assert_eq!(info.examples, Upper::EXAMPLES);
        assert_eq!(info.input, None);
        assert!(registry.storage().get_info(2022, 11).is_none());
    }

    #[test]
    fn test_create_solver_errors() {
        let registry = SolverRegistryBuilder::new().build();
        assert!(registry.storage().is_empty());
        assert!(matches!(
            registry.create_solver(2024, 1, ""),
            Err(SolverError::NotFound(2024, 1))
        ));
        assert!(matches!(
            registry.create_solver(1999, 1, ""),
            Err(SolverError::InvalidYearDay(1999, 1))
        ));
    }

    #[test]
    fn test_register_factory_with_custom_info() {
        let info = FactoryInfo::new(2020, 2, 1).with_input("bundled");
        let registry = SolverRegistryBuilder::new()
            .register_factory(info, |input: &str| {
                let solver: Box<dyn DynSolver + '_> = Box::new(SolverInstance::<Upper>::new(input)?);
                Ok(solver)
            })
            .unwrap()
            .build();

        let info = registry.storage().get_info(2020, 2).unwrap();
        assert_eq!((info.parts, info.input), (1, Some("bundled")));
        let mut solver = registry.create_solver(2020, 2, "xy").unwrap();
        assert_eq!(solver.solve(1).unwrap().answer, "XY");
    }
}
