//! Filter expression AST: comparators and parsed expressions.

use std::cmp::Ordering;
use std::fmt;

/// Comparison operator of a filter expression.
///
/// The token set is closed; evaluation is an exhaustive match over this enum
/// so a newly added comparator cannot silently become a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparator {
    /// `==` exact equality.
    Eq,
    /// `!=` inequality.
    Ne,
    /// `>>` greater than.
    Gt,
    /// `<<` less than.
    Lt,
    /// `>=` greater than or equal to.
    Ge,
    /// `<=` less than or equal to.
    Le,
    /// `~` containment: substring for strings, membership for lists.
    Contains,
    /// `!~` negated containment.
    NotContains,
    /// `*` regular-expression match.
    Matches,
    /// `!*` negated regular-expression match.
    NotMatches,
}

impl Comparator {
    /// All comparator tokens, two-character tokens first so a longest-match
    /// scan never splits `>=` into `>` `=` or `!~` into `!` `~`.
    pub const TOKENS: [(&'static str, Comparator); 10] = [
        ("==", Comparator::Eq),
        ("!=", Comparator::Ne),
        (">>", Comparator::Gt),
        ("<<", Comparator::Lt),
        (">=", Comparator::Ge),
        ("<=", Comparator::Le),
        ("!~", Comparator::NotContains),
        ("!*", Comparator::NotMatches),
        ("~", Comparator::Contains),
        ("*", Comparator::Matches),
    ];

    /// The literal token as written in an expression.
    pub fn token(self) -> &'static str {
        match self {
            Comparator::Eq => "==",
            Comparator::Ne => "!=",
            Comparator::Gt => ">>",
            Comparator::Lt => "<<",
            Comparator::Ge => ">=",
            Comparator::Le => "<=",
            Comparator::Contains => "~",
            Comparator::NotContains => "!~",
            Comparator::Matches => "*",
            Comparator::NotMatches => "!*",
        }
    }

    /// Short description, used by the syntax help text.
    pub fn describe(self) -> &'static str {
        match self {
            Comparator::Eq => "is",
            Comparator::Ne => "is not",
            Comparator::Gt => "greater than",
            Comparator::Lt => "less than",
            Comparator::Ge => "greater than or equal to",
            Comparator::Le => "less than or equal to",
            Comparator::Contains => "contains",
            Comparator::NotContains => "does not contain",
            Comparator::Matches => "matches regex",
            Comparator::NotMatches => "does not match regex",
        }
    }

    /// Resolves a comparator from its literal token.
    pub fn from_token(token: &str) -> Option<Comparator> {
        Comparator::TOKENS
            .into_iter()
            .find(|(t, _)| *t == token)
            .map(|(_, comparator)| comparator)
    }

    /// True for the order-based comparators `>>`/`<<`/`>=`/`<=`.
    pub fn is_ordering(self) -> bool {
        matches!(
            self,
            Comparator::Gt | Comparator::Lt | Comparator::Ge | Comparator::Le
        )
    }

    /// True for the regex comparators `*`/`!*`.
    pub fn is_regex(self) -> bool {
        matches!(self, Comparator::Matches | Comparator::NotMatches)
    }

    /// Evaluates an order-based comparator against a comparison result.
    ///
    /// Returns `false` for comparators that are not order-based.
    pub fn eval_ordering(self, ordering: Ordering) -> bool {
        match self {
            Comparator::Eq => ordering == Ordering::Equal,
            Comparator::Ne => ordering != Ordering::Equal,
            Comparator::Gt => ordering == Ordering::Greater,
            Comparator::Ge => ordering != Ordering::Less,
            Comparator::Lt => ordering == Ordering::Less,
            Comparator::Le => ordering != Ordering::Greater,
            _ => false,
        }
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// A parsed filter instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// `card==creature`: selects or deselects a whole category instead of
    /// filtering records within one.
    Category {
        /// The selector comparator; only `==`/`!=` are legal.
        comparator: Comparator,
        /// The category name as written by the user.
        target: String,
    },

    /// `Power>>3`: filters records of every category declaring the field.
    Field {
        /// The schema field name.
        field: String,
        /// The comparator to apply.
        comparator: Comparator,
        /// The literal right-hand side, coerced per field type at
        /// evaluation time.
        value: String,
    },
}

impl Expr {
    /// Creates a category selector expression.
    pub fn category(comparator: Comparator, target: impl Into<String>) -> Self {
        Expr::Category {
            comparator,
            target: target.into(),
        }
    }

    /// Creates a field filter expression.
    pub fn field(
        field: impl Into<String>,
        comparator: Comparator,
        value: impl Into<String>,
    ) -> Self {
        Expr::Field {
            field: field.into(),
            comparator,
            value: value.into(),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Category { comparator, target } => {
                write!(f, "card{comparator}{target}")
            }
            Expr::Field {
                field,
                comparator,
                value,
            } => write!(f, "{field}{comparator}{value}"),
        }
    }
}
