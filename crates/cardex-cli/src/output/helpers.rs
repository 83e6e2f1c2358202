//! Common helper functions for output formatting.

use cardex_catalog::FieldValue;

/// Renders a field value the way it reads in the catalog file.
pub fn format_value(value: &FieldValue) -> String {
    match value {
        FieldValue::Int(n) => n.to_string(),
        FieldValue::Bool(b) => b.to_string(),
        FieldValue::Str(s) => s.clone(),
        FieldValue::List(items) => items.join(", "),
    }
}

/// Capitalizes the first character of a category name for headings.
pub fn title_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(&FieldValue::Int(65)), "65");
        assert_eq!(format_value(&FieldValue::Bool(true)), "true");
        assert_eq!(format_value(&FieldValue::Str("DOP".into())), "DOP");
        assert_eq!(
            format_value(&FieldValue::List(vec!["Fire".into(), "Water".into()])),
            "Fire, Water"
        );
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("mugic"), "Mugic");
        assert_eq!(title_case(""), "");
    }
}
