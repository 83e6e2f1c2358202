//! Fuzzy field-name suggestions for schema violations.

use strsim::levenshtein;

use crate::Category;

use super::schema;

/// Maximum Levenshtein distance to consider a field name as a suggestion.
const MAX_SUGGESTION_DISTANCE: usize = 3;

/// Finds the declared field of `category` closest to `field`.
///
/// Distance is measured case-insensitively so a wrong-case spelling still
/// gets its properly-cased field suggested; an exact match is never a
/// suggestion.
pub fn similar_field(category: Category, field: &str) -> Option<&'static str> {
    let query = field.to_lowercase();

    let (best_match, best_distance) = schema::fields(category)
        .iter()
        .map(|(name, _)| (*name, levenshtein(&query, &name.to_lowercase())))
        .min_by_key(|(_, distance)| *distance)?;

    if best_match != field && best_distance <= MAX_SUGGESTION_DISTANCE {
        Some(best_match)
    } else {
        None
    }
}
