use crate::{
    err,
    error::{ErrorTree, ValidateError},
};
use saga_types::{Date, Record, Value};

// Largest float that still identifies an integer exactly.
const F64_SAFE: f64 = (1i64 << 53) as f64;

const U32_MAX: i64 = u32::MAX as i64;

///
/// Check
/// Shared constraint reader over an untyped record.
///
/// Extractors never fail fast: each violation is recorded and a neutral
/// placeholder is returned so the remaining fields still get checked.
/// `result` rejects whenever any issue was recorded, so a placeholder can
/// never escape into a typed record.
///

#[must_use]
pub struct Check<'a> {
    record: &'a Record,
    errs: ErrorTree,
}

impl<'a> Check<'a> {
    pub const fn new(record: &'a Record) -> Self {
        Self {
            record,
            errs: ErrorTree::new(),
        }
    }

    /// Required non-empty text. The emptiness check does not trim:
    /// whitespace counts as content.
    pub fn text(&mut self, field: &str) -> String {
        match self.record.get(field) {
            None | Some(Value::Null) => {
                err!(self.errs, field, "required field is missing");
                String::new()
            }
            Some(Value::Text(s)) if s.is_empty() => {
                err!(self.errs, field, "must be a non-empty string");
                String::new()
            }
            Some(Value::Text(s)) => s.clone(),
            Some(other) => {
                err!(self.errs, field, "expected text, got {}", other.tag());
                String::new()
            }
        }
    }

    /// Optional text: absent or null is fine, and empty text is accepted.
    pub fn text_opt(&mut self, field: &str) -> Option<String> {
        match self.record.get(field) {
            None | Some(Value::Null) => None,
            Some(Value::Text(s)) => Some(s.clone()),
            Some(other) => {
                err!(self.errs, field, "expected text, got {}", other.tag());
                None
            }
        }
    }

    /// Required non-empty text under its canonical name, with a legacy
    /// alias accepted when the canonical field is absent. The issue, if
    /// any, lands on the field that was actually read.
    pub fn text_aliased(&mut self, field: &str, legacy: &str) -> String {
        if self.present(field) || !self.present(legacy) {
            self.text(field)
        } else {
            self.text(legacy)
        }
    }

    /// Non-negative integer.
    pub fn nat(&mut self, field: &str) -> u32 {
        self.int(field, 0)
    }

    /// Positive integer.
    pub fn pos(&mut self, field: &str) -> u32 {
        self.int(field, 1)
    }

    /// Calendar date: either ISO `YYYY-MM-DD` text or a native date value,
    /// normalized to the canonical representation.
    pub fn date(&mut self, field: &str) -> Date {
        match self.record.get(field) {
            None | Some(Value::Null) => {
                err!(self.errs, field, "required field is missing");
                Date::EPOCH
            }
            Some(Value::Date(d)) => *d,
            Some(Value::Text(s)) => match Date::parse(s) {
                Some(date) => date,
                None => {
                    err!(self.errs, field, "'{s}' is not a valid calendar date");
                    Date::EPOCH
                }
            },
            Some(other) => {
                err!(self.errs, field, "expected a date, got {}", other.tag());
                Date::EPOCH
            }
        }
    }

    /// Collapse into a verdict; rejects when any extractor recorded an issue.
    pub fn result(self) -> Result<(), ValidateError> {
        self.errs.result()
    }

    fn present(&self, field: &str) -> bool {
        !matches!(self.record.get(field), None | Some(Value::Null))
    }

    #[expect(clippy::cast_possible_truncation)]
    fn int(&mut self, field: &str, min: i64) -> u32 {
        let n = match self.record.get(field) {
            None | Some(Value::Null) => {
                err!(self.errs, field, "required field is missing");
                return 0;
            }
            Some(Value::Int(n)) => *n,
            // An integral float is an integer; fractional ones are not.
            Some(Value::Float(f)) if f.fract() == 0.0 && f.abs() <= F64_SAFE => *f as i64,
            Some(Value::Float(f)) => {
                err!(self.errs, field, "{f} is not an integer");
                return 0;
            }
            Some(other) => {
                err!(self.errs, field, "expected an integer, got {}", other.tag());
                return 0;
            }
        };

        if n < min {
            err!(self.errs, field, "{n} must be >= {min}");
            0
        } else if n > U32_MAX {
            err!(self.errs, field, "{n} must be <= {U32_MAX}");
            0
        } else {
            n as u32
        }
    }
}

///
/// TESTS
///
