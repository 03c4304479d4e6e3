//! Day Modules with automatic registration
//!
//! This crate contains the puzzle solutions organized by year.
//! Each solution uses the `AutoRegisterSolver` derive macro for automatic
//! plugin registration with the Day Module framework, so linking the crate
//! is enough to make every day available to a registry.

#[cfg(feature = "my-solutions")]
pub mod my_solutions;

pub mod utils;

#[cfg(test)]
pub(crate) mod test_utils;
