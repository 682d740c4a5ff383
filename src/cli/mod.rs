//! Command-line interface layer.
//!
//! `run_cli` owns the whole run: argument handling, config discovery, the
//! sequential scan loop, and reporting. Scanning is strictly one file at a
//! time with no state carried across files, so a run is a pure function of
//! its input list and every invocation over unchanged files produces the
//! same report.

use std::env;

use anyhow::Result;

pub mod args;
pub mod exit_status;

pub use args::Arguments;
pub use exit_status::ExitStatus;

use crate::{
    config::load_config,
    issue::Issue,
    reporter::{print_report, print_success},
    scan::{FileKind, collect_targets, scan_file},
};

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose;

    let Some(args) = args.with_paths_or_usage() else {
        return Ok(ExitStatus::Success);
    };

    let config = load_config(&env::current_dir()?)?.config;
    let passes = args.rule_passes();
    let targets = collect_targets(&args.paths, &config.ignores, verbose);

    let mut issues: Vec<Issue> = Vec::new();
    let mut files_scanned = 0;
    for target in &targets {
        if FileKind::from_path(target).is_some() {
            files_scanned += 1;
        }
        issues.extend(scan_file(target, &config, &passes, verbose));
    }

    if issues.is_empty() {
        if verbose {
            print_success(files_scanned);
        }
        Ok(ExitStatus::Success)
    } else {
        print_report(&issues);
        Ok(ExitStatus::Failure)
    }
}
