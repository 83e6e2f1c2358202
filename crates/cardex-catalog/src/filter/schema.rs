//! Static schema registry: which comparators are legal for which field.
//!
//! One constant table per category, built once into the binary. Lookups
//! return `None` for fields a category does not declare; the engine turns
//! that absence into a wholesale category exclusion.

use crate::Category;

use super::expr::Comparator;

use Comparator::{Contains, Eq, Ge, Gt, Le, Lt, Matches, Ne, NotContains, NotMatches};

/// Pseudo-field that selects whole categories instead of filtering records.
pub const CATEGORY_KEY: &str = "card";

/// Free-text identity fields, regex-searchable (`Name`, `Set`).
const TEXT_OPS: &[Comparator] = &[Eq, Ne, Contains, NotContains, NotMatches, Matches];

/// Rarity is matched by equality or containment only.
const RARITY_OPS: &[Comparator] = &[Eq, Ne, Contains, NotContains];

/// Numeric stats.
const STAT_OPS: &[Comparator] = &[Eq, Ne, Gt, Lt, Ge, Le];

/// Multi-valued or prose fields, containment only.
const MULTI_OPS: &[Comparator] = &[Contains, NotContains];

/// Boolean flags and fixed vocabularies.
const FLAG_OPS: &[Comparator] = &[Eq, Ne];

/// Loyalty carries a free-text restriction, regex-searchable.
const LOYAL_OPS: &[Comparator] = &[Eq, Ne, Matches, NotMatches];

const ATTACK: &[(&str, &[Comparator])] = &[
    ("Name", TEXT_OPS),
    ("Set", TEXT_OPS),
    ("Rarity", RARITY_OPS),
    ("ID", STAT_OPS),
    ("BP", STAT_OPS),
    ("Types", MULTI_OPS),
    ("Base", STAT_OPS),
    ("Fire", STAT_OPS),
    ("Air", STAT_OPS),
    ("Earth", STAT_OPS),
    ("Water", STAT_OPS),
    ("Ability", MULTI_OPS),
    ("Unique", FLAG_OPS),
];

const BATTLEGEAR: &[(&str, &[Comparator])] = &[
    ("Name", TEXT_OPS),
    ("Set", TEXT_OPS),
    ("Rarity", RARITY_OPS),
    ("ID", STAT_OPS),
    ("Types", MULTI_OPS),
    ("Ability", MULTI_OPS),
    ("Unique", FLAG_OPS),
    ("Loyal", LOYAL_OPS),
    ("Legendary", FLAG_OPS),
];

const CREATURE: &[(&str, &[Comparator])] = &[
    ("Name", TEXT_OPS),
    ("Set", TEXT_OPS),
    ("Rarity", RARITY_OPS),
    ("ID", STAT_OPS),
    ("Types", MULTI_OPS),
    ("Tribe", FLAG_OPS),
    ("Courage", STAT_OPS),
    ("Power", STAT_OPS),
    ("Wisdom", STAT_OPS),
    ("Speed", STAT_OPS),
    ("Energy", STAT_OPS),
    ("Mugicians", STAT_OPS),
    ("Elements", MULTI_OPS),
    ("Ability", MULTI_OPS),
    ("Brainwashed", MULTI_OPS),
    ("Unique", FLAG_OPS),
    ("Loyal", LOYAL_OPS),
    ("Legendary", FLAG_OPS),
];

const LOCATION: &[(&str, &[Comparator])] = &[
    ("Name", TEXT_OPS),
    ("Set", TEXT_OPS),
    ("Rarity", RARITY_OPS),
    ("ID", STAT_OPS),
    ("Types", MULTI_OPS),
    ("Initiative", MULTI_OPS),
    ("Ability", MULTI_OPS),
    ("Unique", FLAG_OPS),
];

const MUGIC: &[(&str, &[Comparator])] = &[
    ("Name", TEXT_OPS),
    ("Set", TEXT_OPS),
    ("Rarity", RARITY_OPS),
    ("ID", STAT_OPS),
    ("Cost", STAT_OPS),
    ("Tribe", FLAG_OPS),
    ("Types", MULTI_OPS),
    ("Ability", MULTI_OPS),
    ("Unique", FLAG_OPS),
];

/// All filterable fields of a category with their legal comparators, in
/// declaration order (drives the syntax help text).
pub fn fields(category: Category) -> &'static [(&'static str, &'static [Comparator])] {
    match category {
        Category::Attack => ATTACK,
        Category::Battlegear => BATTLEGEAR,
        Category::Creature => CREATURE,
        Category::Location => LOCATION,
        Category::Mugic => MUGIC,
    }
}

/// The comparators legal for `field` in `category`, or `None` when the
/// category does not declare the field.
pub fn legal_comparators(
    category: Category,
    field: &str,
) -> Option<&'static [Comparator]> {
    fields(category)
        .iter()
        .find(|(name, _)| *name == field)
        .map(|(_, ops)| *ops)
}

/// The comparators legal for the `card` pseudo-field.
pub fn category_key_comparators() -> &'static [Comparator] {
    FLAG_OPS
}
