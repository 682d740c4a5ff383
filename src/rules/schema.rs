//! DocType schema checks.
//!
//! Validates the naming conventions inside a DocType definition file: the
//! document's own name, and the `fieldname`/`label` of every field entry.
//! This scanner works on the parsed document as a whole, so its issues
//! carry no line numbers.

use serde_json::Value;

use crate::{
    issue::Issue,
    validators::{is_valid_doctype_name, is_valid_field_label, is_valid_field_name},
};

/// Check a DocType definition file for naming-convention violations.
///
/// Only activates on a recognized document shape: a JSON object whose
/// `doctype` member is the string `"DocType"`. Anything else, including
/// unparseable content, yields no issues.
pub fn check_doctype_schema(file_path: &str, content: &str) -> Vec<Issue> {
    let Ok(document) = serde_json::from_str::<Value>(content) else {
        return Vec::new();
    };
    let Some(document) = document.as_object() else {
        return Vec::new();
    };
    if document.get("doctype").and_then(Value::as_str) != Some("DocType") {
        return Vec::new();
    }

    let mut issues = Vec::new();

    // A missing or non-string name validates as empty, which always fails.
    let name = document.get("name").and_then(Value::as_str).unwrap_or("");
    if !is_valid_doctype_name(name) {
        issues.push(Issue::doctype_name(file_path, name));
    }

    let fields = document
        .get("fields")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();
    for field in fields.iter().filter_map(Value::as_object) {
        if let Some(fieldname) = field.get("fieldname").and_then(Value::as_str)
            && !fieldname.is_empty()
            && !is_valid_field_name(fieldname)
        {
            issues.push(Issue::field_name(file_path, fieldname));
        }
        if let Some(label) = field.get("label").and_then(Value::as_str)
            && !label.is_empty()
            && !is_valid_field_label(label)
        {
            issues.push(Issue::field_label(file_path, label));
        }
    }

    issues
}
