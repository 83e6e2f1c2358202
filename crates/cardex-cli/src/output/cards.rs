//! Filtered catalog rendering.

use owo_colors::OwoColorize;

use cardex_catalog::{Card, Catalog};

use super::helpers::{format_value, title_case};

/// Renders the surviving records grouped by category.
///
/// Each non-empty category gets a heading; each record prints its name as a
/// header with the remaining fields indented beneath it.
pub fn format_catalog_text(catalog: &Catalog, use_colors: bool) -> String {
    let mut out = String::new();
    for (category, cards) in &catalog.sections {
        if cards.is_empty() {
            continue;
        }

        if !out.is_empty() {
            out.push('\n');
        }
        let heading = title_case(category.as_str());
        if use_colors {
            out.push_str(&format!("{}\n", heading.bold().underline()));
        } else {
            out.push_str(&format!("{heading}\n"));
        }

        for card in cards {
            push_card(&mut out, card, use_colors);
        }
    }
    out
}

/// Serializes the filtered catalog as pretty-printed JSON.
pub fn format_catalog_json(catalog: &Catalog) -> serde_json::Result<String> {
    serde_json::to_string_pretty(catalog)
}

fn push_card(out: &mut String, card: &Card, use_colors: bool) {
    if use_colors {
        out.push_str(&format!("{}\n", card.name().bold()));
    } else {
        out.push_str(&format!("{}\n", card.name()));
    }
    for (field, value) in &card.fields {
        if field == "Name" {
            continue;
        }
        out.push_str(&format!("    {field}: {}\n", format_value(value)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(value: serde_json::Value) -> Catalog {
        serde_json::from_value(value).expect("valid catalog JSON")
    }

    #[test]
    fn test_records_group_under_category_headings() {
        let catalog = catalog(serde_json::json!({
            "creature": [
                {"Name": "Maxxor", "Power": 65, "Unique": true},
            ],
            "mugic": [
                {"Name": "Song of Futuresight", "Cost": 2},
            ],
        }));

        let text = format_catalog_text(&catalog, false);
        let expected = "\
Creature
Maxxor
    Power: 65
    Unique: true

Mugic
Song of Futuresight
    Cost: 2
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_empty_categories_print_nothing() {
        let catalog = catalog(serde_json::json!({"attack": [], "mugic": []}));
        assert_eq!(format_catalog_text(&catalog, false), "");
    }

    #[test]
    fn test_list_fields_join_with_commas() {
        let catalog = catalog(serde_json::json!({
            "creature": [{"Name": "Maxxor", "Elements": ["Fire", "Water"]}],
        }));

        let text = format_catalog_text(&catalog, false);
        assert!(text.contains("    Elements: Fire, Water\n"));
    }

    #[test]
    fn test_json_output_mirrors_the_catalog() {
        let catalog = catalog(serde_json::json!({
            "mugic": [{"Name": "Song of Futuresight", "Cost": 2}],
        }));

        let json = format_catalog_json(&catalog).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["mugic"][0]["Name"], "Song of Futuresight");
        assert_eq!(parsed["mugic"][0]["Cost"], 2);
    }
}
