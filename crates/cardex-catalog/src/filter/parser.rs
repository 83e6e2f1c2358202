//! Expression parser: splits `key comparator value` strings.

use std::sync::LazyLock;

use regex::Regex;

use super::error::{FilterError, FilterResult};
use super::expr::{Comparator, Expr};
use super::schema::CATEGORY_KEY;

/// Single alternation over every comparator token, in [`Comparator::TOKENS`]
/// order (two-character tokens first). The regex engine prefers earlier
/// alternatives at the same position, which makes the scan longest-match:
/// `>=` is found as one token, never as `>` followed by `=`.
static COMPARATOR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let alternation = Comparator::TOKENS
        .iter()
        .map(|(token, _)| regex::escape(token))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&alternation).expect("comparator alternation is a valid pattern")
});

/// Parses a raw argument such as `"BP>>4"` into an [`Expr`].
///
/// The input must contain exactly one comparator token with non-empty text
/// on both sides; anything else is a [`FilterError`] rather than a guess. A
/// `card` key yields [`Expr::Category`]. Comparator legality per field is
/// the engine's concern, not the parser's.
pub fn parse_expr(input: &str) -> FilterResult<Expr> {
    let input = input.trim();

    let mut found = COMPARATOR_PATTERN.find_iter(input);
    let Some(token) = found.next() else {
        return Err(FilterError::no_comparator(input));
    };
    if found.next().is_some() {
        return Err(FilterError::ambiguous(input));
    }

    let comparator = Comparator::from_token(token.as_str())
        .expect("alternation only matches comparator tokens");
    let field = &input[..token.start()];
    let value = &input[token.end()..];
    if field.is_empty() {
        return Err(FilterError::empty_field(input));
    }
    if value.is_empty() {
        return Err(FilterError::empty_value(input));
    }

    if field == CATEGORY_KEY {
        Ok(Expr::category(comparator, value))
    } else {
        Ok(Expr::field(field, comparator, value))
    }
}
