use std::fmt;

/// Convention rule that produced an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    DoctypeName,
    FieldName,
    FieldLabel,
    DoctypeReference,
    TranslationWrapper,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::DoctypeName => write!(f, "doctype-name"),
            Rule::FieldName => write!(f, "field-name"),
            Rule::FieldLabel => write!(f, "field-label"),
            Rule::DoctypeReference => write!(f, "doctype-reference"),
            Rule::TranslationWrapper => write!(f, "translation-wrapper"),
        }
    }
}

/// A single convention violation.
///
/// `line` is 1-indexed and absent for whole-document checks (the DocType
/// schema scanner validates the parsed document, not individual lines).
/// Issues are immutable once created and are only consumed by the reporter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub file_path: String,
    pub line: Option<usize>,
    pub message: String,
    pub rule: Rule,
}

impl Issue {
    pub fn doctype_name(file_path: &str, name: &str) -> Self {
        Self {
            file_path: file_path.to_string(),
            line: None,
            message: format!(
                "DocType name '{}' should use Title Case with spaces (e.g., 'Sales Order')",
                name
            ),
            rule: Rule::DoctypeName,
        }
    }

    pub fn field_name(file_path: &str, fieldname: &str) -> Self {
        Self {
            file_path: file_path.to_string(),
            line: None,
            message: format!("Field '{}' should use snake_case naming", fieldname),
            rule: Rule::FieldName,
        }
    }

    pub fn field_label(file_path: &str, label: &str) -> Self {
        Self {
            file_path: file_path.to_string(),
            line: None,
            message: format!("Field label '{}' should use Title Case", label),
            rule: Rule::FieldLabel,
        }
    }

    pub fn doctype_reference(file_path: &str, line: usize, name: &str) -> Self {
        Self {
            file_path: file_path.to_string(),
            line: Some(line),
            message: format!("DocType '{}' should use Title Case with spaces", name),
            rule: Rule::DoctypeReference,
        }
    }

    pub fn missing_wrapper(file_path: &str, line: usize, context: &str, text: &str) -> Self {
        Self {
            file_path: file_path.to_string(),
            line: Some(line),
            message: format!("Missing translation wrapper in {}: '{}'", context, text),
            rule: Rule::TranslationWrapper,
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}: Line {}: {}", self.file_path, line, self.message),
            None => write!(f, "{}: {}", self.file_path, self.message),
        }
    }
}
