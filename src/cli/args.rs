//! CLI argument definitions using clap.
//!
//! fraplint takes the files to check as positional arguments, the way
//! pre-commit hands a staged-file list to its hooks. There are no
//! subcommands; checking is the only operation.

use std::path::PathBuf;

use clap::{CommandFactory, Parser};

use crate::scan::RulePass;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Files or directories to check
    pub paths: Vec<PathBuf>,

    /// Rules to run (default: all)
    /// Can be specified multiple times: --rules naming --rules translations
    #[arg(long, value_enum)]
    pub rules: Vec<RulePass>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Arguments {
    /// Check if any paths were provided, otherwise print usage and return
    /// None. An empty invocation is a successful no-op, not an error.
    pub fn with_paths_or_usage(self) -> Option<Self> {
        if self.paths.is_empty() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Selected rule passes, defaulting to all of them.
    pub fn rule_passes(&self) -> Vec<RulePass> {
        if self.rules.is_empty() {
            RulePass::all()
        } else {
            self.rules.clone()
        }
    }
}
