//! Field validation for the project form.
//!
//! A [`Validatable`] pairs a raw value with an optional set of constraints.
//! [`Validator::validate`] is a pure predicate: it never errors and never
//! panics, it only answers whether every present constraint holds.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// How `min_length` / `max_length` are evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthBounds {
    /// Compare the trimmed character count against the bounds (inclusive).
    #[default]
    Enforced,
    /// Ignore length bounds entirely, matching the historical board where
    /// numeric length bounds never fired.
    Legacy,
}

/// A raw field value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

impl FieldValue {
    /// Numeric reading of the value. Text is parsed after trimming.
    fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse::<f64>().ok(),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<u32> for FieldValue {
    fn from(n: u32) -> Self {
        Self::Number(f64::from(n))
    }
}

/// A value together with the constraints it must satisfy.
#[derive(Debug, Clone, PartialEq)]
pub struct Validatable {
    pub value: FieldValue,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Validatable {
    /// A value with no constraints attached.
    pub fn new(value: impl Into<FieldValue>) -> Self {
        Self {
            value: value.into(),
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, len: usize) -> Self {
        self.min_length = Some(len);
        self
    }

    pub fn max_length(mut self, len: usize) -> Self {
        self.max_length = Some(len);
        self
    }

    /// Exclusive lower bound.
    pub fn min(mut self, bound: f64) -> Self {
        self.min = Some(bound);
        self
    }

    /// Exclusive upper bound.
    pub fn max(mut self, bound: f64) -> Self {
        self.max = Some(bound);
        self
    }
}

/// Evaluates [`Validatable`]s under a given length-bound mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator {
    length_bounds: LengthBounds,
}

impl Validator {
    pub fn new(length_bounds: LengthBounds) -> Self {
        Self { length_bounds }
    }

    pub fn length_bounds(&self) -> LengthBounds {
        self.length_bounds
    }

    /// Returns true iff every present constraint holds.
    pub fn validate(&self, input: &Validatable) -> bool {
        let text = input.value.to_string();
        let trimmed_len = text.trim().chars().count();

        if input.required && trimmed_len == 0 {
            return false;
        }

        if self.length_bounds == LengthBounds::Enforced {
            if input.min_length.is_some_and(|min| trimmed_len < min) {
                return false;
            }
            if input.max_length.is_some_and(|max| trimmed_len > max) {
                return false;
            }
        }

        if input.min.is_some() || input.max.is_some() {
            let Some(number) = input.value.as_number() else {
                return false;
            };
            // Strict bounds; NaN is unordered and fails both.
            if input.min.is_some_and(|min| number.partial_cmp(&min) != Some(Ordering::Greater)) {
                return false;
            }
            if input.max.is_some_and(|max| number.partial_cmp(&max) != Some(Ordering::Less)) {
                return false;
            }
        }

        true
    }
}

/// Validate with the default (enforced) length-bound mode.
pub fn validate(input: &Validatable) -> bool {
    Validator::default().validate(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_rejects_blank() {
        assert!(!validate(&Validatable::new("").required()));
        assert!(!validate(&Validatable::new("   \t").required()));
        assert!(validate(&Validatable::new("x").required()));
    }

    #[test]
    fn test_required_number_always_present() {
        assert!(validate(&Validatable::new(0.0).required()));
    }

    #[test]
    fn test_numeric_bounds_are_strict() {
        assert!(validate(&Validatable::new(3.0).min(1.0).max(5.0)));
        assert!(!validate(&Validatable::new(6.0).min(1.0).max(5.0)));
        assert!(!validate(&Validatable::new(5.0).min(1.0).max(5.0)));
        assert!(!validate(&Validatable::new(1.0).min(1.0).max(5.0)));
    }

    #[test]
    fn test_numeric_bounds_on_text() {
        let people = |v: &str| Validatable::new(v).required().min(1.0).max(5.0);
        assert!(validate(&people("2")));
        assert!(validate(&people(" 4 ")));
        assert!(!validate(&people("5")));
        assert!(!validate(&people("three")));
        assert!(!validate(&people("")));
    }

    #[test]
    fn test_length_bounds_enforced() {
        let title = |v: &str| Validatable::new(v).required().min_length(5);
        assert!(!validate(&title("API")));
        assert!(!validate(&title("  API   ")));
        assert!(validate(&title("Build")));
        assert!(validate(&title("Build API")));

        assert!(validate(&Validatable::new("abc").max_length(3)));
        assert!(!validate(&Validatable::new("abcd").max_length(3)));
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        assert!(validate(&Validatable::new("héllo").max_length(5)));
    }

    #[test]
    fn test_length_bounds_legacy_are_inert() {
        let legacy = Validator::new(LengthBounds::Legacy);
        assert!(legacy.validate(&Validatable::new("A").required().min_length(5)));
        assert!(legacy.validate(&Validatable::new("far too long").max_length(3)));
        assert!(!legacy.validate(&Validatable::new("").required().min_length(5)));
    }

    #[test]
    fn test_no_constraints_always_valid() {
        assert!(validate(&Validatable::new("")));
        assert!(validate(&Validatable::new(f64::NAN)));
    }

    #[test]
    fn test_nan_fails_numeric_bounds() {
        assert!(!validate(&Validatable::new(f64::NAN).min(1.0)));
    }
}
