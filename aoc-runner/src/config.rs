//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::runner::{FailurePolicy, Selection};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Environment variable consulted when `--input-dir` is absent
pub const INPUT_DIR_ENV: &str = "AOC_INPUT_DIR";

/// Input directory used when neither the flag nor the environment names one
pub const DEFAULT_INPUT_DIR: &str = "inputs";

/// Resolved runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Which days and parts to run
    pub selection: Selection,
    /// Tags to filter solvers
    pub tags: Vec<String>,
    /// Root of the `{year}/day_{dd}.txt` input tree
    pub input_dir: PathBuf,
    /// What to do after a day records a failure
    pub policy: FailurePolicy,
    /// Verify bundled examples instead of running real inputs
    pub examples: bool,
    /// Quiet mode
    pub quiet: bool,
}

impl Config {
    /// Build config from CLI args and the process environment
    pub fn from_args(args: Args) -> Self {
        let input_dir = resolve_input_dir(args.input_dir, std::env::var_os(INPUT_DIR_ENV));

        Config {
            selection: Selection {
                year: args.year,
                day: args.day,
                part: args.part,
            },
            tags: args.tags,
            input_dir,
            policy: if args.fail_fast {
                FailurePolicy::Abort
            } else {
                FailurePolicy::Continue
            },
            examples: args.examples,
            quiet: args.quiet,
        }
    }
}

/// Flag first, then environment, then the default; `~` expanded in all cases
fn resolve_input_dir(flag: Option<PathBuf>, env: Option<OsString>) -> PathBuf {
    let dir = flag
        .or_else(|| env.filter(|v| !v.is_empty()).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_DIR));
    expand_tilde(&dir)
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && (path_str.starts_with("~/") || path_str == "~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path_str.trim_start_matches('~').trim_start_matches('/'));
    }
    path.to_path_buf()
}
