//! Applies a set of parsed expressions to a whole catalog.
//!
//! The engine is pure over an immutable catalog snapshot: it builds the
//! survivor set into a fresh [`Catalog`] instead of removing records from
//! the input while scanning it.

use crate::{Catalog, Category};

use super::error::EvalError;
use super::evaluator::Matcher;
use super::expr::{Comparator, Expr};
use super::schema;

/// A category excluded wholesale because an expression's field or comparator
/// is not legal for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exclusion {
    /// The excluded category.
    pub category: Category,
    /// The field of the violating expression.
    pub field: String,
    /// The comparator of the violating expression.
    pub comparator: Comparator,
}

/// One fail-closed evaluation failure, kept for verbose reporting.
#[derive(Debug)]
pub struct EvalNote {
    /// The category being filtered when evaluation failed.
    pub category: Category,
    /// Name of the eliminated record, or `None` when the whole pass failed
    /// before touching records (bad regex pattern).
    pub card: Option<String>,
    /// What went wrong.
    pub error: EvalError,
}

/// Outcome of a filter run: the reduced catalog plus everything that is only
/// observable as an absence.
#[derive(Debug, Default)]
pub struct FilterOutcome {
    /// Surviving categories with their surviving records. A category whose
    /// records were all eliminated stays present with an empty list.
    pub catalog: Catalog,
    /// Categories dropped by schema violations, in category order.
    pub excluded: Vec<Exclusion>,
    /// Category selectors skipped because their comparator is not legal for
    /// the `card` pseudo-field.
    pub skipped: Vec<Expr>,
    /// Records eliminated because evaluation failed rather than compared.
    pub notes: Vec<EvalNote>,
}

/// Filter engine: applies every expression, ANDed, to every record.
#[derive(Debug)]
pub struct FilterEngine<'a> {
    exprs: &'a [Expr],
}

impl<'a> FilterEngine<'a> {
    /// Creates an engine over a parsed expression set.
    pub fn new(exprs: &'a [Expr]) -> Self {
        Self { exprs }
    }

    /// Runs the filter over a catalog snapshot, producing a reduced copy.
    ///
    /// Category selectors apply first, left to right: `==` keeps only the
    /// named category (an unknown name keeps nothing), `!=` removes it.
    /// Field filters then run per surviving category; a field the category
    /// does not declare, or a comparator not legal for it, excludes the
    /// category from the output entirely.
    pub fn run(&self, catalog: &Catalog) -> FilterOutcome {
        let mut outcome = FilterOutcome::default();

        let mut surviving: Vec<Category> = catalog.sections.keys().copied().collect();
        for expr in self.exprs {
            let Expr::Category { comparator, target } = expr else {
                continue;
            };
            if !schema::category_key_comparators().contains(comparator) {
                outcome.skipped.push(expr.clone());
                continue;
            }
            let keep_named = *comparator == Comparator::Eq;
            surviving.retain(|c| c.as_str().eq_ignore_ascii_case(target) == keep_named);
        }

        for category in surviving {
            let Some(cards) = catalog.sections.get(&category) else {
                continue;
            };
            let mut kept = cards.clone();
            let mut violation = None;

            for expr in self.exprs {
                let Expr::Field {
                    field,
                    comparator,
                    value,
                } = expr
                else {
                    continue;
                };

                let legal = schema::legal_comparators(category, field)
                    .is_some_and(|ops| ops.contains(comparator));
                if !legal {
                    violation = Some(Exclusion {
                        category,
                        field: field.clone(),
                        comparator: *comparator,
                    });
                    break;
                }

                let matcher = match Matcher::new(field, *comparator, value) {
                    Ok(matcher) => matcher,
                    Err(error) => {
                        // Nothing can be compared against a broken pattern;
                        // every record of this pass fails closed.
                        kept.clear();
                        outcome.notes.push(EvalNote {
                            category,
                            card: None,
                            error,
                        });
                        continue;
                    }
                };

                kept.retain(|card| match matcher.keep(card) {
                    Ok(keep) => keep,
                    Err(error) => {
                        outcome.notes.push(EvalNote {
                            category,
                            card: Some(card.name().to_string()),
                            error,
                        });
                        false
                    }
                });
            }

            match violation {
                Some(exclusion) => outcome.excluded.push(exclusion),
                None => {
                    outcome.catalog.sections.insert(category, kept);
                }
            }
        }

        outcome
    }
}
