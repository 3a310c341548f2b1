use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::{self, Display};
use thiserror::Error as ThisError;

///
/// ErrorTree
/// Validation issues collected by field path.
///
/// Checking is non-failing at the field level: every violation is recorded
/// here and the whole set is surfaced at once, so an author fixes a record
/// in a single pass. Keys are ordered and message lists keep insertion
/// order, which makes reports stable across runs.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct ErrorTree {
    issues: BTreeMap<String, Vec<String>>,
}

impl ErrorTree {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            issues: BTreeMap::new(),
        }
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.issues
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    pub fn merge(&mut self, other: Self) {
        for (field, messages) in other.issues {
            self.issues.entry(field).or_default().extend(messages);
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Total number of recorded messages across all fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.issues.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.issues.contains_key(field)
    }

    #[must_use]
    pub const fn issues(&self) -> &BTreeMap<String, Vec<String>> {
        &self.issues
    }

    /// Collapse into a verdict: empty trees pass, anything else fails.
    pub fn result(self) -> Result<(), ValidateError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(ValidateError::ValidationFailed(self))
        }
    }
}

impl Display for ErrorTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.issues {
            for message in messages {
                if !first {
                    writeln!(f)?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }

        Ok(())
    }
}

///
/// ValidateError
/// The single failure kind of the schema layer. Malformed input and
/// constraint violations both land here; the caller decides whether to
/// skip the record, abort the build, or show the report to an author.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize, ThisError)]
pub enum ValidateError {
    #[error("validation failed\n{0}")]
    ValidationFailed(ErrorTree),
}

impl ValidateError {
    #[must_use]
    pub const fn issues(&self) -> &BTreeMap<String, Vec<String>> {
        match self {
            Self::ValidationFailed(tree) => tree.issues(),
        }
    }

    #[must_use]
    pub fn cites(&self, field: &str) -> bool {
        match self {
            Self::ValidationFailed(tree) => tree.contains(field),
        }
    }
}

/// Record a formatted issue against a field path.
#[macro_export]
macro_rules! err {
    ($errs:expr, $field:expr, $($arg:tt)*) => {
        $errs.add($field, format!($($arg)*))
    };
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tree_passes() {
        assert!(ErrorTree::new().result().is_ok());
    }

    #[test]
    fn populated_tree_fails_and_keeps_every_issue() {
        let mut errs = ErrorTree::new();
        err!(errs, "name", "required field is missing");
        err!(errs, "number", "{} must be >= {}", 0, 1);

        let err = errs.result().unwrap_err();
        assert!(err.cites("name"));
        assert!(err.cites("number"));
        assert!(!err.cites("description"));
        assert_eq!(err.issues().len(), 2);
    }

    #[test]
    fn display_renders_one_line_per_issue() {
        let mut errs = ErrorTree::new();
        errs.add("number", "0 must be >= 1");
        errs.add("name", "required field is missing");
        errs.add("name", "must be a non-empty string");

        let rendered = errs.to_string();
        assert_eq!(
            rendered,
            "name: required field is missing\nname: must be a non-empty string\nnumber: 0 must be >= 1"
        );
    }

    #[test]
    fn merge_concatenates_per_field() {
        let mut left = ErrorTree::new();
        left.add("a", "one");

        let mut right = ErrorTree::new();
        right.add("a", "two");
        right.add("b", "three");

        left.merge(right);
        assert_eq!(left.len(), 3);
        assert!(left.contains("b"));
    }
}
