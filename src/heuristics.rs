//! Line-skip and code-likeness heuristics shared by the scanners.
//!
//! These are shallow, stateless tests over a single extracted string or a
//! single physical line. They carry no lexical state across lines, so a
//! string constant containing `//` or a multi-line docstring body can fool
//! them. That imprecision is part of the tool's contract and is covered by
//! the scanner tests.

/// Substrings that mark an extracted string as code rather than user text.
const CODE_INDICATORS: &[&str] = &[
    ".",  // member access
    "_",  // private names
    "==", "!=", ">=", "<=", // operators
    "true", "false", "null", // literals
    "function", "var", "let", "const", // JS keywords
    "def ", "class ", "import ", // Python keywords
];

/// Checks if an extracted string looks like code rather than user-facing
/// text. Matching is case-insensitive substring containment against a fixed
/// denylist; false positives and negatives are expected.
///
/// # Examples
///
/// ```
/// use fraplint::heuristics::looks_like_code;
///
/// assert!(looks_like_code("a.b"));
/// assert!(looks_like_code("item_code"));
/// assert!(looks_like_code("x == y"));
/// assert!(!looks_like_code("Please select a customer"));
/// ```
pub fn looks_like_code(text: &str) -> bool {
    let lowered = text.to_lowercase();
    CODE_INDICATORS
        .iter()
        .any(|indicator| lowered.contains(indicator))
}

/// Checks if a Python line is a comment and should be skipped entirely.
pub fn is_python_comment_line(line: &str) -> bool {
    line.trim().starts_with('#')
}

/// Checks if a Python line carries a docstring delimiter. The translation
/// pass skips such lines wholesale rather than tracking docstring state.
pub fn has_docstring_marker(line: &str) -> bool {
    line.contains("\"\"\"") || line.contains("'''")
}

/// Checks if a JavaScript line is a comment and should be skipped entirely.
pub fn is_javascript_comment_line(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with("//") || trimmed.starts_with("/*")
}
