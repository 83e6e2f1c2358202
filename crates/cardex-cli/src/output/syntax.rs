//! The generated syntax help text.
//!
//! Printed on bare invocation and `--help`: a comparator glossary plus every
//! category's searchable fields, generated from the schema registry so the
//! help can never drift from what the engine accepts.

use cardex_catalog::filter::{schema, Comparator};
use cardex_catalog::Category;

use super::helpers::title_case;

/// Comparators in glossary order.
const GLOSSARY: [Comparator; 10] = [
    Comparator::Eq,
    Comparator::Ne,
    Comparator::Gt,
    Comparator::Lt,
    Comparator::Ge,
    Comparator::Le,
    Comparator::Contains,
    Comparator::NotContains,
    Comparator::Matches,
    Comparator::NotMatches,
];

/// Builds the full syntax text.
pub fn syntax_text() -> String {
    let mut lines = vec![
        "Syntax:".to_string(),
        "  cdx --search '<key><comparator><value>' ['<expr>' ...]".to_string(),
        String::new(),
        "Note: each expression MUST be single-quoted. The shell does not handle"
            .to_string(),
        "the comparator symbols well otherwise.".to_string(),
        String::new(),
        "comparator is one of:".to_string(),
    ];

    for comparator in GLOSSARY {
        lines.push(format!(
            "    {:<4}{}",
            comparator.token(),
            comparator.describe()
        ));
    }
    lines.push("Note: not all comparators work with each key".to_string());
    lines.push(String::new());

    lines.push("key can be one of:".to_string());
    for category in Category::ALL {
        lines.push(format!("  {} keys:", title_case(category.as_str())));
        for (field, ops) in schema::fields(category) {
            let tokens = ops
                .iter()
                .map(|op| op.token())
                .collect::<Vec<_>>()
                .join(" ");
            lines.push(format!("    {field}: {tokens}"));
        }
    }
    lines.push(String::new());

    lines.push("Additionally, you can filter for card type:".to_string());
    lines.push("    cdx --search 'card==creature'".to_string());

    let mut text = lines.join("\n");
    text.push('\n');
    text
}
