//! Card catalog model and filter engine for the cdx CLI.
//!
//! This crate owns the in-memory representation of the card catalog (a JSON
//! document keyed by category name) and everything needed to narrow it down
//! from the command line: the schema registry of filterable fields, the
//! expression parser and the predicate evaluator live in [`filter`], file
//! loading lives in [`CatalogStore`].

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

pub mod filter;
mod store;

pub use store::{CatalogStore, StoreError, DEFAULT_CATALOG_FILE};

/// A top-level grouping of cards sharing a schema.
///
/// The set is closed: the catalog file may only use these five names as its
/// top-level keys, and the schema registry declares filterable fields per
/// category.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Attack,
    Battlegear,
    Creature,
    Location,
    Mugic,
}

impl Category {
    /// All categories, in catalog order.
    pub const ALL: [Category; 5] = [
        Category::Attack,
        Category::Battlegear,
        Category::Creature,
        Category::Location,
        Category::Mugic,
    ];

    /// The lowercase name used as the catalog's JSON key.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Attack => "attack",
            Category::Battlegear => "battlegear",
            Category::Creature => "creature",
            Category::Location => "location",
            Category::Mugic => "mugic",
        }
    }

    /// Resolves a category name, ASCII case-insensitively.
    pub fn parse(name: &str) -> Option<Category> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single card field value as it appears in the catalog file.
///
/// Card objects are heterogeneous: numeric stats, boolean flags, free text
/// and multi-valued fields (`Types`, `Elements`) sit side by side, so values
/// deserialize untagged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Numeric stat (`ID`, `BP`, `Power`, ...).
    Int(i64),
    /// Boolean flag (`Unique`, `Legendary`).
    Bool(bool),
    /// Free text (`Name`, `Set`, `Ability`, ...).
    Str(String),
    /// Multi-valued field (`Types`, `Elements`).
    List(Vec<String>),
}

impl FieldValue {
    /// Human-readable type name, used in evaluation error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Int(_) => "integer",
            FieldValue::Bool(_) => "boolean",
            FieldValue::Str(_) => "string",
            FieldValue::List(_) => "list",
        }
    }
}

/// One catalog record: a mapping from field name to value.
///
/// The `Name` field is the record's display identifier and is assumed unique
/// within its category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Card {
    /// All fields of the record, keyed by their catalog field name.
    pub fields: BTreeMap<String, FieldValue>,
}

impl Card {
    /// The record's display identifier.
    ///
    /// Returns an empty string for a record without a `Name` field; the
    /// catalog format always carries one.
    pub fn name(&self) -> &str {
        match self.fields.get("Name") {
            Some(FieldValue::Str(name)) => name,
            _ => "",
        }
    }

    /// Looks up a field value by its catalog field name.
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }
}

/// The full card catalog: an ordered mapping from category to its records.
///
/// Loaded once at startup and treated as immutable input; filtering produces
/// a reduced copy, the original is never touched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    /// Records per category, in category order.
    pub sections: BTreeMap<Category, Vec<Card>>,
}

impl Catalog {
    /// Total number of records across all categories.
    pub fn card_count(&self) -> usize {
        self.sections.values().map(Vec::len).sum()
    }

    /// Returns true when no category holds any record.
    pub fn is_empty(&self) -> bool {
        self.sections.values().all(Vec::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(value: serde_json::Value) -> Card {
        serde_json::from_value(value).expect("valid card JSON")
    }

    #[test]
    fn test_category_parse_case_insensitive() {
        assert_eq!(Category::parse("mugic"), Some(Category::Mugic));
        assert_eq!(Category::parse("Mugic"), Some(Category::Mugic));
        assert_eq!(Category::parse("CREATURE"), Some(Category::Creature));
        assert_eq!(Category::parse("frisbee"), None);
    }

    #[test]
    fn test_category_roundtrips_as_json_key() {
        let json = r#"{"creature": [], "mugic": []}"#;
        let catalog: Catalog = serde_json::from_str(json).unwrap();
        assert_eq!(
            catalog.sections.keys().copied().collect::<Vec<_>>(),
            vec![Category::Creature, Category::Mugic]
        );

        let back = serde_json::to_string(&catalog).unwrap();
        assert_eq!(back, r#"{"creature":[],"mugic":[]}"#);
    }

    #[test]
    fn test_field_value_deserializes_untagged() {
        let card = card(serde_json::json!({
            "Name": "Maxxor",
            "Power": 65,
            "Unique": true,
            "Elements": ["Fire", "Water"],
        }));

        assert_eq!(card.name(), "Maxxor");
        assert_eq!(card.field("Power"), Some(&FieldValue::Int(65)));
        assert_eq!(card.field("Unique"), Some(&FieldValue::Bool(true)));
        assert_eq!(
            card.field("Elements"),
            Some(&FieldValue::List(vec![
                "Fire".to_string(),
                "Water".to_string()
            ]))
        );
        assert_eq!(card.field("Courage"), None);
    }

    #[test]
    fn test_card_without_name_yields_empty_identifier() {
        let card = card(serde_json::json!({ "Power": 10 }));
        assert_eq!(card.name(), "");
    }

    #[test]
    fn test_catalog_card_count() {
        let catalog: Catalog = serde_json::from_value(serde_json::json!({
            "attack": [{"Name": "Flame Burst"}],
            "creature": [{"Name": "Maxxor"}, {"Name": "Takinom"}],
        }))
        .unwrap();

        assert_eq!(catalog.card_count(), 3);
        assert!(!catalog.is_empty());
        assert!(Catalog::default().is_empty());
    }
}
