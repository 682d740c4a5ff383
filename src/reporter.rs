//! Report formatting and printing.
//!
//! Rendering is separated from printing so the report format can be tested
//! as a plain string. The report shape is fixed: a failure header, one
//! indented line per issue, a static block of convention reminders, and a
//! closing count.

use colored::Colorize;

use crate::issue::Issue;

/// Success mark for consistent output formatting
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓
/// Failure mark for consistent output formatting
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

const CONVENTION_REMINDERS: &[&str] = &[
    "DocType names: Title Case with spaces ('Sales Order', 'Item Price')",
    "Field names: snake_case ('customer_name', 'item_code')",
    "Field labels: Title Case ('Customer Name', 'Item Code')",
    "User-facing strings: _('Your message') in Python, __('Your message') in JavaScript",
];

/// Render the failure report for a non-empty issue list.
///
/// Issues appear in scan order: CLI argument order, then line order within
/// each file. The caller is expected not to call this with zero issues.
pub fn render_report(issues: &[Issue]) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{} {}\n",
        FAILURE_MARK.red(),
        "Convention violations found:".bold()
    ));
    for issue in issues {
        out.push_str(&format!("  {}\n", issue));
    }

    out.push('\n');
    out.push_str(&format!("{}\n", "Conventions to follow:".bold()));
    for reminder in CONVENTION_REMINDERS {
        out.push_str(&format!("  {}\n", reminder.dimmed()));
    }

    out.push_str(&format!(
        "\n{} {} {}\n",
        FAILURE_MARK.red(),
        issues.len(),
        if issues.len() == 1 {
            "violation"
        } else {
            "violations"
        }
    ));

    out
}

pub fn print_report(issues: &[Issue]) {
    print!("{}", render_report(issues));
}

/// Print a success summary naming the number of files checked.
///
/// Only shown under `--verbose`; the default success path is silent so the
/// tool stays quiet in pre-commit hooks.
pub fn print_success(files_scanned: usize) {
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} {} - no violations found",
            files_scanned,
            if files_scanned == 1 { "file" } else { "files" }
        )
        .green()
    );
}
