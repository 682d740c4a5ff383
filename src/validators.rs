//! Naming-convention predicates.
//!
//! Three pure checks over a single candidate string: DocType names
//! (Title Case with spaces), field names (snake_case) and field labels
//! (Title Case per word). They take no configuration and never fail
//! except by returning `false`.

use std::sync::LazyLock;

use regex::Regex;

static DOCTYPE_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][a-zA-Z\s]*$").unwrap());

static FIELD_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9_]*$").unwrap());

/// Checks if a DocType name follows the Title Case with spaces convention.
///
/// Valid names start with an uppercase letter and contain only letters and
/// whitespace, with no underscores or hyphens anywhere.
///
/// # Examples
///
/// ```
/// use fraplint::validators::is_valid_doctype_name;
///
/// assert!(is_valid_doctype_name("Sales Order"));
/// assert!(is_valid_doctype_name("User"));
/// assert!(!is_valid_doctype_name("sales_order"));
/// assert!(!is_valid_doctype_name("Sales-Order"));
/// assert!(!is_valid_doctype_name(""));
/// ```
pub fn is_valid_doctype_name(name: &str) -> bool {
    if name.is_empty() {
        return false;
    }
    DOCTYPE_NAME_REGEX.is_match(name) && !name.contains('_') && !name.contains('-')
}

/// Checks if a field name follows the snake_case convention.
///
/// Valid names start with a lowercase letter and contain only lowercase
/// letters, digits and underscores.
///
/// # Examples
///
/// ```
/// use fraplint::validators::is_valid_field_name;
///
/// assert!(is_valid_field_name("customer_name"));
/// assert!(is_valid_field_name("item_code2"));
/// assert!(!is_valid_field_name("CustomerName"));
/// assert!(!is_valid_field_name("_private"));
/// assert!(!is_valid_field_name("2nd_item"));
/// ```
pub fn is_valid_field_name(fieldname: &str) -> bool {
    if fieldname.is_empty() {
        return false;
    }
    FIELD_NAME_REGEX.is_match(fieldname)
}

/// Checks if a field label follows the Title Case convention.
///
/// Every whitespace-delimited word must start with an uppercase character.
/// The first-character test is literal: a word starting with a digit or
/// punctuation fails it.
///
/// # Examples
///
/// ```
/// use fraplint::validators::is_valid_field_label;
///
/// assert!(is_valid_field_label("Customer Name"));
/// assert!(!is_valid_field_label("customer name"));
/// assert!(!is_valid_field_label("Customer name"));
/// assert!(!is_valid_field_label(""));
/// ```
pub fn is_valid_field_label(label: &str) -> bool {
    if label.is_empty() {
        return false;
    }
    label
        .split_whitespace()
        .all(|word| word.chars().next().is_some_and(|c| c.is_uppercase()))
}
