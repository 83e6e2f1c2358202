//! Predicate evaluation of a single expression against a single card.

use std::cmp::Ordering;

use regex::Regex;

use crate::{Card, FieldValue};

use super::error::EvalError;
use super::expr::Comparator;

/// A compiled per-expression predicate.
///
/// Construction pre-compiles the pattern for the regex comparators, so an
/// invalid pattern is rejected once instead of per record. Values are
/// coerced per the field's actual type: integer fields compare numerically,
/// strings as given; an incomparable pairing is a [`EvalError::TypeMismatch`]
/// and the engine eliminates the record (fail-closed).
#[derive(Debug)]
pub struct Matcher<'a> {
    field: &'a str,
    comparator: Comparator,
    value: &'a str,
    pattern: Option<Regex>,
}

impl<'a> Matcher<'a> {
    /// Builds a matcher for one field expression.
    pub fn new(
        field: &'a str,
        comparator: Comparator,
        value: &'a str,
    ) -> Result<Self, EvalError> {
        let pattern = if comparator.is_regex() {
            let regex = Regex::new(value).map_err(|source| EvalError::BadPattern {
                pattern: value.to_string(),
                source,
            })?;
            Some(regex)
        } else {
            None
        };
        Ok(Self {
            field,
            comparator,
            value,
            pattern,
        })
    }

    /// Decides whether `card` survives this predicate.
    pub fn keep(&self, card: &Card) -> Result<bool, EvalError> {
        let Some(actual) = card.field(self.field) else {
            return Err(EvalError::missing_field(self.field));
        };

        match self.comparator {
            Comparator::Eq => self.equals(actual),
            Comparator::Ne => self.equals(actual).map(|eq| !eq),
            Comparator::Gt | Comparator::Lt | Comparator::Ge | Comparator::Le => {
                let ordering = self.compare(actual)?;
                Ok(self.comparator.eval_ordering(ordering))
            }
            Comparator::Contains => self.contains(actual),
            Comparator::NotContains => self.contains(actual).map(|found| !found),
            Comparator::Matches => self.matches(actual),
            Comparator::NotMatches => self.matches(actual).map(|found| !found),
        }
    }

    fn equals(&self, actual: &FieldValue) -> Result<bool, EvalError> {
        match actual {
            FieldValue::Int(n) => Ok(*n == self.parse_int(actual)?),
            FieldValue::Bool(b) => Ok(*b == self.parse_bool(actual)?),
            FieldValue::Str(s) => Ok(s == self.value),
            FieldValue::List(_) => Err(self.mismatch(actual)),
        }
    }

    fn compare(&self, actual: &FieldValue) -> Result<Ordering, EvalError> {
        match actual {
            FieldValue::Int(n) => Ok(n.cmp(&self.parse_int(actual)?)),
            FieldValue::Str(s) => Ok(s.as_str().cmp(self.value)),
            FieldValue::Bool(_) | FieldValue::List(_) => Err(self.mismatch(actual)),
        }
    }

    fn contains(&self, actual: &FieldValue) -> Result<bool, EvalError> {
        match actual {
            FieldValue::Str(s) => Ok(s.contains(self.value)),
            FieldValue::List(items) => Ok(items.iter().any(|item| item == self.value)),
            FieldValue::Int(_) | FieldValue::Bool(_) => Err(self.mismatch(actual)),
        }
    }

    fn matches(&self, actual: &FieldValue) -> Result<bool, EvalError> {
        let pattern = self
            .pattern
            .as_ref()
            .expect("regex comparators compile their pattern on construction");
        match actual {
            FieldValue::Str(s) => Ok(pattern.is_match(s)),
            FieldValue::List(items) => Ok(items.iter().any(|item| pattern.is_match(item))),
            FieldValue::Int(_) | FieldValue::Bool(_) => Err(self.mismatch(actual)),
        }
    }

    fn parse_int(&self, actual: &FieldValue) -> Result<i64, EvalError> {
        self.value.parse().map_err(|_| self.mismatch(actual))
    }

    fn parse_bool(&self, actual: &FieldValue) -> Result<bool, EvalError> {
        if self.value.eq_ignore_ascii_case("true") {
            Ok(true)
        } else if self.value.eq_ignore_ascii_case("false") {
            Ok(false)
        } else {
            Err(self.mismatch(actual))
        }
    }

    fn mismatch(&self, actual: &FieldValue) -> EvalError {
        EvalError::TypeMismatch {
            field: self.field.to_string(),
            found: actual.type_name(),
            literal: self.value.to_string(),
        }
    }
}
