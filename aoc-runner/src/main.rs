//! AOC runner - times the registered Day Modules and reports their answers

mod cli;
mod config;
mod error;
mod inputs;
mod output;
mod report;
mod runner;
mod verify;

// Import aoc-days to link the solver plugins
use aoc_days as _;

use aoc_day::{SolverRegistry, SolverRegistryBuilder};
use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use inputs::InputStore;
use output::{OutputFormatter, format_duration};
use runner::Runner;

fn main() {
    let args = Args::parse();
    init_logging(args.quiet);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Crates whose `info` logs are shown unless `--quiet` is given
const LOGGED_CRATES: [&str; 3] = ["aoc", "aoc_day", "aoc_days"];

/// Default level per crate; everything else stays at `warn`
fn log_levels(quiet: bool) -> [(&'static str, log::LevelFilter); 3] {
    let level = if quiet {
        log::LevelFilter::Warn
    } else {
        log::LevelFilter::Info
    };
    LOGGED_CRATES.map(|module| (module, level))
}

/// `RUST_LOG` overrides the defaults
fn init_logging(quiet: bool) {
    let mut builder = env_logger::builder();
    builder.filter_level(log::LevelFilter::Warn);
    for (module, level) in log_levels(quiet) {
        builder.filter_module(module, level);
    }
    builder.parse_default_env().init();
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args);

    // Build registry with tag filtering (only once)
    let registry = build_registry(&config.tags)?;

    if config.examples {
        verify::verify_examples(&registry, &config.selection, config.quiet)?;
        return Ok(());
    }

    let runner = Runner::new(
        &registry,
        InputStore::new(config.input_dir.clone()),
        config.selection,
        config.policy,
    );

    let work_items = runner.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }
    log::info!(
        "running {} day(s) with inputs from {}",
        work_items.len(),
        config.input_dir.display()
    );

    let report = runner.run_with(|record| {
        log::info!("{} done in {}", record.key, format_duration(record.duration()));
    });

    OutputFormatter::new(config.quiet).print_report(&report);

    match report.error() {
        Some(e) => {
            log::debug!("{} distinct failure(s)", e.count());
            Err(e.into())
        }
        None => Ok(()),
    }
}

/// Build registry with tag filtering
fn build_registry(tags: &[String]) -> Result<SolverRegistry, CliError> {
    let builder = SolverRegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_solver_plugins(|plugin| tags.iter().all(|tag| plugin.tags.contains(&tag.as_str())))?
    };

    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::LevelFilter;

    #[test]
    fn test_log_levels_name_each_crate() {
        let levels = log_levels(false);
        assert_eq!(levels.map(|(module, _)| module), ["aoc", "aoc_day", "aoc_days"]);
        assert!(levels.iter().all(|&(_, level)| level == LevelFilter::Info));
    }

    #[test]
    fn test_quiet_keeps_crates_at_warn() {
        assert!(log_levels(true).iter().all(|&(_, level)| level == LevelFilter::Warn));
    }
}
