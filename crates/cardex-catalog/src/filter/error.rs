//! Error types for filter parsing and evaluation.

use thiserror::Error;

/// A specialized Result type for expression parsing.
pub type FilterResult<T> = Result<T, FilterError>;

/// Errors from parsing a raw filter expression.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FilterError {
    /// The input contains no comparator token.
    #[error("no comparator in expression '{input}'")]
    NoComparator {
        /// The raw expression as given.
        input: String,
    },

    /// The input contains more than one comparator token, so the split into
    /// (field, comparator, value) would be ambiguous.
    #[error("ambiguous expression '{input}': more than one comparator")]
    Ambiguous {
        /// The raw expression as given.
        input: String,
    },

    /// Nothing precedes the comparator.
    #[error("expression '{input}' is missing a field before the comparator")]
    EmptyField {
        /// The raw expression as given.
        input: String,
    },

    /// Nothing follows the comparator.
    #[error("expression '{input}' is missing a value after the comparator")]
    EmptyValue {
        /// The raw expression as given.
        input: String,
    },
}

impl FilterError {
    /// Creates a no-comparator error.
    pub fn no_comparator(input: impl Into<String>) -> Self {
        FilterError::NoComparator {
            input: input.into(),
        }
    }

    /// Creates an ambiguous-expression error.
    pub fn ambiguous(input: impl Into<String>) -> Self {
        FilterError::Ambiguous {
            input: input.into(),
        }
    }

    /// Creates an empty-field error.
    pub fn empty_field(input: impl Into<String>) -> Self {
        FilterError::EmptyField {
            input: input.into(),
        }
    }

    /// Creates an empty-value error.
    pub fn empty_value(input: impl Into<String>) -> Self {
        FilterError::EmptyValue {
            input: input.into(),
        }
    }
}

/// Errors from evaluating one expression against one record.
///
/// The engine treats every variant as fail-closed: the record is eliminated
/// and the failure is kept as a diagnostic note.
#[derive(Debug, Error)]
pub enum EvalError {
    /// The record has no such field.
    #[error("field '{field}' not present on record")]
    MissingField {
        /// The field the expression asked for.
        field: String,
    },

    /// Field value and literal are not comparable under the comparator.
    #[error("cannot compare {found} field '{field}' with '{literal}'")]
    TypeMismatch {
        /// The field being compared.
        field: String,
        /// Type name of the record's value.
        found: &'static str,
        /// The literal from the expression.
        literal: String,
    },

    /// A `*`/`!*` literal failed to compile as a regular expression.
    #[error("invalid pattern '{pattern}': {source}")]
    BadPattern {
        /// The literal that failed to compile.
        pattern: String,
        /// The underlying regex error.
        #[source]
        source: regex::Error,
    },
}

impl EvalError {
    /// Creates a missing-field error.
    pub fn missing_field(field: impl Into<String>) -> Self {
        EvalError::MissingField {
            field: field.into(),
        }
    }
}
