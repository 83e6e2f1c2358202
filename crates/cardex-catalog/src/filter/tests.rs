//! Tests for the expression parser, schema registry and suggestions.

use crate::Category;

use super::*;

// ==================== Parser Tests ====================

#[test]
fn test_parse_equality() {
    let expr = parse_expr("ID==5").unwrap();
    assert_eq!(expr, Expr::field("ID", Comparator::Eq, "5"));
}

#[test]
fn test_parse_inequality() {
    let expr = parse_expr("Tribe!=Danian").unwrap();
    assert_eq!(expr, Expr::field("Tribe", Comparator::Ne, "Danian"));
}

#[test]
fn test_parse_ordering_comparators() {
    assert_eq!(
        parse_expr("BP>>4").unwrap(),
        Expr::field("BP", Comparator::Gt, "4")
    );
    assert_eq!(
        parse_expr("BP<<4").unwrap(),
        Expr::field("BP", Comparator::Lt, "4")
    );
    assert_eq!(
        parse_expr("BP>=3").unwrap(),
        Expr::field("BP", Comparator::Ge, "3")
    );
    assert_eq!(
        parse_expr("BP<=3").unwrap(),
        Expr::field("BP", Comparator::Le, "3")
    );
}

#[test]
fn test_parse_longest_match_first() {
    // `>=` must never tokenize as `>` followed by `=`, and `!~`/`!*` must
    // win over the bare one-character tokens they contain.
    assert_eq!(
        parse_expr("Name!~Fire").unwrap(),
        Expr::field("Name", Comparator::NotContains, "Fire")
    );
    assert_eq!(
        parse_expr("Name!*^Fire$").unwrap(),
        Expr::field("Name", Comparator::NotMatches, "^Fire$")
    );
    assert_eq!(
        parse_expr("Ability~water").unwrap(),
        Expr::field("Ability", Comparator::Contains, "water")
    );
    assert_eq!(
        parse_expr("Name*Maxx.*").unwrap(),
        Expr::field("Name", Comparator::Matches, "Maxx.*")
    );
}

#[test]
fn test_parse_category_selector() {
    assert_eq!(
        parse_expr("card==mugic").unwrap(),
        Expr::category(Comparator::Eq, "mugic")
    );
    assert_eq!(
        parse_expr("card!=attack").unwrap(),
        Expr::category(Comparator::Ne, "attack")
    );
}

#[test]
fn test_parse_trims_surrounding_whitespace() {
    assert_eq!(
        parse_expr("  ID==5\n").unwrap(),
        Expr::field("ID", Comparator::Eq, "5")
    );
}

#[test]
fn test_parse_rejects_missing_comparator() {
    assert_eq!(
        parse_expr("Power"),
        Err(FilterError::no_comparator("Power"))
    );
}

#[test]
fn test_parse_rejects_multiple_comparators() {
    assert_eq!(
        parse_expr("A==B!=C"),
        Err(FilterError::ambiguous("A==B!=C"))
    );
    assert_eq!(
        parse_expr("Power>>3<<9"),
        Err(FilterError::ambiguous("Power>>3<<9"))
    );
}

#[test]
fn test_parse_rejects_empty_parts() {
    assert_eq!(parse_expr("==5"), Err(FilterError::empty_field("==5")));
    assert_eq!(parse_expr("ID=="), Err(FilterError::empty_value("ID==")));
}

#[test]
fn test_parse_value_keeps_comparator_free_text_verbatim() {
    // The value side is everything after the token, untouched.
    let expr = parse_expr("Ability~deals 5 damage").unwrap();
    assert_eq!(
        expr,
        Expr::field("Ability", Comparator::Contains, "deals 5 damage")
    );
}

// ==================== Comparator Tests ====================

#[test]
fn test_comparator_token_roundtrip() {
    for (token, comparator) in Comparator::TOKENS {
        assert_eq!(comparator.token(), token);
        assert_eq!(Comparator::from_token(token), Some(comparator));
    }
    assert_eq!(Comparator::from_token(">"), None);
}

#[test]
fn test_expr_display_reconstructs_input() {
    assert_eq!(parse_expr("Power>>3").unwrap().to_string(), "Power>>3");
    assert_eq!(
        parse_expr("card==mugic").unwrap().to_string(),
        "card==mugic"
    );
}

// ==================== Schema Registry Tests ====================

#[test]
fn test_schema_declares_numeric_stats() {
    let ops = schema::legal_comparators(Category::Creature, "Power").unwrap();
    assert!(ops.contains(&Comparator::Gt));
    assert!(ops.contains(&Comparator::Le));
    assert!(!ops.contains(&Comparator::Contains));
}

#[test]
fn test_schema_restricts_multi_valued_fields_to_containment() {
    let ops = schema::legal_comparators(Category::Creature, "Elements").unwrap();
    assert_eq!(ops, &[Comparator::Contains, Comparator::NotContains]);
}

#[test]
fn test_schema_absent_field_is_none() {
    assert_eq!(schema::legal_comparators(Category::Location, "Power"), None);
    assert_eq!(schema::legal_comparators(Category::Mugic, "BP"), None);
}

#[test]
fn test_schema_is_per_category() {
    // `Cost` only exists on mugic, `BP` only on attacks.
    assert!(schema::legal_comparators(Category::Mugic, "Cost").is_some());
    assert!(schema::legal_comparators(Category::Attack, "Cost").is_none());
    assert!(schema::legal_comparators(Category::Attack, "BP").is_some());
}

#[test]
fn test_schema_field_counts() {
    assert_eq!(schema::fields(Category::Attack).len(), 13);
    assert_eq!(schema::fields(Category::Battlegear).len(), 9);
    assert_eq!(schema::fields(Category::Creature).len(), 18);
    assert_eq!(schema::fields(Category::Location).len(), 8);
    assert_eq!(schema::fields(Category::Mugic).len(), 9);
}

#[test]
fn test_schema_category_key_accepts_equality_only() {
    assert_eq!(
        schema::category_key_comparators(),
        &[Comparator::Eq, Comparator::Ne]
    );
}

// ==================== Suggestion Tests ====================

#[test]
fn test_similar_field_suggests_close_names() {
    assert_eq!(similar_field(Category::Creature, "Powr"), Some("Power"));
    assert_eq!(similar_field(Category::Creature, "tribe"), Some("Tribe"));
    assert_eq!(similar_field(Category::Mugic, "cost"), Some("Cost"));
}

#[test]
fn test_similar_field_ignores_exact_and_distant_names() {
    // An exact match is not a suggestion, and nonsense gets none.
    assert_eq!(similar_field(Category::Creature, "Power"), None);
    assert_eq!(similar_field(Category::Creature, "Zzzzzzzzz"), None);
}
