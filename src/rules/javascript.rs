//! JavaScript source checks: DocType reference naming and translation
//! wrappers, mirroring the Python passes with browser-side call syntax.
//!
//! Differences from the Python pass: form event bindings replace document
//! fetches in the naming patterns, there is no internal-table-name
//! exemption, the wrapped form is `__()`, and no `%`-formatting suppression
//! applies.

use std::sync::LazyLock;

use regex::Regex;

use crate::{
    heuristics::is_javascript_comment_line,
    issue::Issue,
    rules::helpers::{is_exempt_text, is_wrapped},
    validators::is_valid_doctype_name,
};

/// Call sites whose first quoted argument is a DocType name.
static DOCTYPE_PATTERNS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        Regex::new(r#"frappe\.ui\.form\.on\s*\(\s*["']([^"']+)["']"#).unwrap(),
        Regex::new(r#"frappe\.db\.get_value\s*\(\s*["']([^"']+)["']"#).unwrap(),
        Regex::new(r#"frappe\.new_doc\s*\(\s*["']([^"']+)["']"#).unwrap(),
    ]
});

/// Contexts whose string literal is user-facing and must be wrapped in
/// `__()`.
static TRANSLATABLE_PATTERNS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    vec![
        (
            Regex::new(r#"frappe\.msgprint\s*\(\s*["']([^"']+)["']"#).unwrap(),
            "frappe.msgprint",
        ),
        (
            Regex::new(r#"frappe\.throw\s*\(\s*["']([^"']+)["']"#).unwrap(),
            "frappe.throw",
        ),
        (
            Regex::new(r#"alert\s*\(\s*["']([^"']+)["']"#).unwrap(),
            "alert",
        ),
        (
            Regex::new(r#"title:\s*["']([^"']+)["']"#).unwrap(),
            "title property",
        ),
        (
            Regex::new(r#"label:\s*["']([^"']+)["']"#).unwrap(),
            "label property",
        ),
    ]
});

/// Check hardcoded DocType references against the Title Case convention.
pub fn check_javascript_naming(file_path: &str, content: &str) -> Vec<Issue> {
    let mut issues = Vec::new();

    for (i, line) in content.lines().enumerate() {
        if is_javascript_comment_line(line) {
            continue;
        }
        for pattern in DOCTYPE_PATTERNS.iter() {
            for caps in pattern.captures_iter(line) {
                let name = &caps[1];
                if !is_valid_doctype_name(name) {
                    issues.push(Issue::doctype_reference(file_path, i + 1, name));
                }
            }
        }
    }

    issues
}

/// Check user-facing string literals for missing `__()` translation
/// wrappers.
pub fn check_javascript_translations(
    file_path: &str,
    content: &str,
    ignore_texts: &[String],
) -> Vec<Issue> {
    let mut issues = Vec::new();

    for (i, line) in content.lines().enumerate() {
        if is_javascript_comment_line(line) {
            continue;
        }
        for (pattern, context) in TRANSLATABLE_PATTERNS.iter() {
            for caps in pattern.captures_iter(line) {
                let text = &caps[1];
                if is_exempt_text(text, ignore_texts) {
                    continue;
                }
                if is_wrapped(line, text, "__") {
                    continue;
                }
                issues.push(Issue::missing_wrapper(file_path, i + 1, context, text));
            }
        }
    }

    issues
}
