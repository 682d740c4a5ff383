//! Python source checks: DocType reference naming and translation wrappers.
//!
//! Both passes are line-by-line regex extraction. Comment lines are skipped
//! wholesale; the translation pass additionally skips any line carrying a
//! docstring delimiter. Line numbers in issues are 1-indexed.

use std::sync::LazyLock;

use regex::Regex;

use crate::{
    heuristics::{has_docstring_marker, is_python_comment_line},
    issue::Issue,
    rules::helpers::{is_exempt_text, is_wrapped},
    validators::is_valid_doctype_name,
};

/// Call sites whose first quoted argument is a DocType name.
static DOCTYPE_PATTERNS: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    [
        Regex::new(r#"frappe\.get_doc\s*\(\s*["']([^"']+)["']"#).unwrap(),
        Regex::new(r#"frappe\.new_doc\s*\(\s*["']([^"']+)["']"#).unwrap(),
        Regex::new(r#"frappe\.db\.get_value\s*\(\s*["']([^"']+)["']"#).unwrap(),
        Regex::new(r#"frappe\.db\.set_value\s*\(\s*["']([^"']+)["']"#).unwrap(),
    ]
});

/// Contexts whose string literal is user-facing and must be wrapped in
/// `_()`. The optional trailing group on the call patterns captures
/// old-style `%` formatting, which disqualifies the match.
static TRANSLATABLE_PATTERNS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    vec![
        (
            Regex::new(r#"frappe\.msgprint\s*\(\s*["']([^"']+)["'](\s*%)?"#).unwrap(),
            "frappe.msgprint",
        ),
        (
            Regex::new(r#"frappe\.throw\s*\(\s*["']([^"']+)["'](\s*%)?"#).unwrap(),
            "frappe.throw",
        ),
        (
            Regex::new(r#"frappe\.log_error\s*\(\s*["']([^"']+)["'](\s*%)?"#).unwrap(),
            "frappe.log_error",
        ),
        (
            Regex::new(r#"return\s+["']([^"']{10,})["']"#).unwrap(),
            "return statement",
        ),
        (
            Regex::new(r#"title\s*=\s*["']([^"']+)["']"#).unwrap(),
            "title assignment",
        ),
        (
            Regex::new(r#"label\s*=\s*["']([^"']+)["']"#).unwrap(),
            "label assignment",
        ),
    ]
});

/// Check hardcoded DocType references against the Title Case convention.
///
/// Names starting with one of `exempt_prefixes` (internal table names such
/// as `tabSales Order`) are not checked. Every match on a line is reported
/// independently.
pub fn check_python_naming(
    file_path: &str,
    content: &str,
    exempt_prefixes: &[String],
) -> Vec<Issue> {
    let mut issues = Vec::new();

    for (i, line) in content.lines().enumerate() {
        if is_python_comment_line(line) {
            continue;
        }
        for pattern in DOCTYPE_PATTERNS.iter() {
            for caps in pattern.captures_iter(line) {
                let name = &caps[1];
                if is_valid_doctype_name(name) {
                    continue;
                }
                if exempt_prefixes.iter().any(|p| name.starts_with(p.as_str())) {
                    continue;
                }
                issues.push(Issue::doctype_reference(file_path, i + 1, name));
            }
        }
    }

    issues
}

/// Check user-facing string literals for missing `_()` translation wrappers.
///
/// A match is skipped when the string is exempt (short, code-like or
/// configured as ignored) or when the same line already contains the string
/// in wrapped form.
pub fn check_python_translations(
    file_path: &str,
    content: &str,
    ignore_texts: &[String],
) -> Vec<Issue> {
    let mut issues = Vec::new();

    for (i, line) in content.lines().enumerate() {
        if is_python_comment_line(line) || has_docstring_marker(line) {
            continue;
        }
        for (pattern, context) in TRANSLATABLE_PATTERNS.iter() {
            for caps in pattern.captures_iter(line) {
                // Old-style % formatting right after the literal
                if caps.get(2).is_some() {
                    continue;
                }
                let text = &caps[1];
                if is_exempt_text(text, ignore_texts) {
                    continue;
                }
                if is_wrapped(line, text, "_") {
                    continue;
                }
                issues.push(Issue::missing_wrapper(file_path, i + 1, context, text));
            }
        }
    }

    issues
}
