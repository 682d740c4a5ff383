//! Shared helpers for the translation-wrapper passes.

use regex::Regex;

use crate::heuristics::looks_like_code;

/// Strings shorter than this are too short to matter for translation.
pub const MIN_TRANSLATABLE_LEN: usize = 3;

/// Checks if `text` already appears on the same line wrapped by the given
/// translation call (`_` for Python, `__` for JavaScript).
///
/// The check is intentionally limited to the current physical line; a
/// wrapped call split across lines is not recognized.
pub fn is_wrapped(line: &str, text: &str, wrapper: &str) -> bool {
    let pattern = format!(r#"{}\s*\(\s*["']{}"#, wrapper, regex::escape(text));
    Regex::new(&pattern)
        .map(|re| re.is_match(line))
        .unwrap_or(false)
}

/// Checks if an extracted string should be exempt from the translation
/// pass: too short, code-like, or explicitly ignored by configuration.
pub fn is_exempt_text(text: &str, ignore_texts: &[String]) -> bool {
    text.chars().count() < MIN_TRANSLATABLE_LEN
        || looks_like_code(text)
        || ignore_texts.iter().any(|t| t == text)
}
