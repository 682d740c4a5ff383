//! Scan-target collection and per-file dispatch.
//!
//! Files are processed strictly one at a time: read fully, scanned, then
//! dropped before the next target is considered. A file that cannot be
//! read, or whose extension is not recognized, contributes zero issues and
//! never aborts the run.

use std::{
    fs,
    path::{Path, PathBuf},
};

use clap::ValueEnum;
use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

use crate::{
    config::Config,
    issue::Issue,
    rules::{
        check_doctype_schema, check_javascript_naming, check_javascript_translations,
        check_python_naming, check_python_translations,
    },
};

/// Kind of source file, inferred purely from the extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    DoctypeSchema,
    Python,
    JavaScript,
}

impl FileKind {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Some(Self::DoctypeSchema),
            Some("py") => Some(Self::Python),
            Some("js") => Some(Self::JavaScript),
            _ => None,
        }
    }
}

/// Which rule families to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum RulePass {
    /// DocType, field and label naming conventions
    Naming,
    /// Translation-wrapper coverage of user-facing strings
    Translations,
}

impl RulePass {
    pub fn all() -> Vec<RulePass> {
        vec![RulePass::Naming, RulePass::Translations]
    }
}

/// Expand CLI paths into an ordered list of scan targets.
///
/// Explicit files keep their argument order; directories are walked
/// recursively with sorted entries so repeated runs are deterministic.
/// Missing paths are skipped silently (a note under `--verbose`), and
/// paths matching a configured ignore pattern are dropped.
pub fn collect_targets(paths: &[PathBuf], ignores: &[String], verbose: bool) -> Vec<PathBuf> {
    let patterns: Vec<Pattern> = ignores
        .iter()
        .filter_map(|p| Pattern::new(p).ok())
        .collect();

    let mut targets = Vec::new();
    for path in paths {
        if !path.exists() {
            if verbose {
                eprintln!(
                    "{} Skipping missing path: {}",
                    "warning:".bold().yellow(),
                    path.display()
                );
            }
            continue;
        }
        if path.is_dir() {
            for entry in WalkDir::new(path).sort_by_file_name() {
                let entry = match entry {
                    Ok(e) => e,
                    Err(e) => {
                        if verbose {
                            eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                        }
                        continue;
                    }
                };
                if !entry.file_type().is_file() {
                    continue;
                }
                let entry_path = entry.path();
                if FileKind::from_path(entry_path).is_none() {
                    continue;
                }
                if is_ignored(entry_path, &patterns) {
                    continue;
                }
                targets.push(entry_path.to_path_buf());
            }
        } else if !is_ignored(path, &patterns) {
            targets.push(path.clone());
        }
    }
    targets
}

fn is_ignored(path: &Path, patterns: &[Pattern]) -> bool {
    let path_str = path.to_string_lossy();
    patterns.iter().any(|p| p.matches(&path_str))
}

/// Scan a single file, running the selected rule passes for its kind.
///
/// Returns an empty list for unrecognized extensions and unreadable
/// content (missing file, permissions, invalid UTF-8).
pub fn scan_file(path: &Path, config: &Config, passes: &[RulePass], verbose: bool) -> Vec<Issue> {
    let Some(kind) = FileKind::from_path(path) else {
        return Vec::new();
    };
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            if verbose {
                eprintln!(
                    "{} Cannot read {}: {}",
                    "warning:".bold().yellow(),
                    path.display(),
                    err
                );
            }
            return Vec::new();
        }
    };

    let file_path = path.to_string_lossy();
    let naming = passes.contains(&RulePass::Naming);
    let translations = passes.contains(&RulePass::Translations);
    let mut issues = Vec::new();

    match kind {
        FileKind::DoctypeSchema => {
            if naming {
                issues.extend(check_doctype_schema(&file_path, &content));
            }
        }
        FileKind::Python => {
            if naming {
                issues.extend(check_python_naming(
                    &file_path,
                    &content,
                    &config.exempt_table_prefixes,
                ));
            }
            if translations {
                issues.extend(check_python_translations(
                    &file_path,
                    &content,
                    &config.ignore_texts,
                ));
            }
        }
        FileKind::JavaScript => {
            if naming {
                issues.extend(check_javascript_naming(&file_path, &content));
            }
            if translations {
                issues.extend(check_javascript_translations(
                    &file_path,
                    &content,
                    &config.ignore_texts,
                ));
            }
        }
    }

    issues
}
