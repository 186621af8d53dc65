use std::cmp::Ordering;

use tableview::compare::{compare_text, locale_compare, parse_number};

// ============================================================================
// Empty Text
// ============================================================================

#[test]
fn test_both_empty_is_equal() {
    assert_eq!(compare_text("", "", false), Ordering::Equal);
    assert_eq!(compare_text("", "", true), Ordering::Equal);
}

#[test]
fn test_empty_sorts_last_ascending() {
    assert_eq!(compare_text("", "abc", false), Ordering::Greater);
    assert_eq!(compare_text("abc", "", false), Ordering::Less);
    assert_eq!(compare_text("", "0", false), Ordering::Greater);
}

#[test]
fn test_empty_sorts_first_descending() {
    assert_eq!(compare_text("", "abc", true), Ordering::Less);
    assert_eq!(compare_text("abc", "", true), Ordering::Greater);
}

// ============================================================================
// Numeric vs Lexical Dispatch
// ============================================================================

#[test]
fn test_numbers_compare_numerically() {
    assert_eq!(compare_text("10", "9", false), Ordering::Greater);
    assert_eq!(compare_text("-3", "2", false), Ordering::Less);
    assert_eq!(compare_text("1.5", "1.25", false), Ordering::Greater);
    assert_eq!(compare_text("1e3", "999", false), Ordering::Greater);
    assert_eq!(compare_text("0x10", "15", false), Ordering::Greater);
}

#[test]
fn test_equal_numbers_in_different_notation() {
    assert_eq!(compare_text("10", "10.0", false), Ordering::Equal);
    assert_eq!(compare_text("1e1", "10", false), Ordering::Equal);
}

#[test]
fn test_mixed_falls_back_to_locale_compare() {
    assert_eq!(
        compare_text("10", "9x", false),
        locale_compare("10", "9x")
    );
    assert_eq!(compare_text("10", "9x", false), Ordering::Less);
}

#[test]
fn test_descending_reverses() {
    assert_eq!(compare_text("10", "9", true), Ordering::Less);
    assert_eq!(compare_text("apple", "banana", true), Ordering::Greater);
}

#[test]
fn test_antisymmetry() {
    let samples = [
        "", "0", "9", "10", "-1", "1.5", "9x", "apple", "Apple", "Äpfel", "banana", "  ", "Infinity",
    ];
    for a in samples {
        for b in samples {
            // Extracted text is always trimmed; mirror that here.
            let (a, b) = (a.trim(), b.trim());
            assert_eq!(
                compare_text(a, b, false),
                compare_text(b, a, false).reverse(),
                "cmp({:?}, {:?})",
                a,
                b
            );
        }
    }
}

// ============================================================================
// Number Parsing
// ============================================================================

#[test]
fn test_parse_number_accepts() {
    assert_eq!(parse_number("42"), Some(42.0));
    assert_eq!(parse_number(" 42 "), Some(42.0));
    assert_eq!(parse_number("+7"), Some(7.0));
    assert_eq!(parse_number("-0.5"), Some(-0.5));
    assert_eq!(parse_number(".5"), Some(0.5));
    assert_eq!(parse_number("5."), Some(5.0));
    assert_eq!(parse_number("2E-2"), Some(0.02));
    assert_eq!(parse_number("0xff"), Some(255.0));
    assert_eq!(parse_number("0b101"), Some(5.0));
    assert_eq!(parse_number("0o17"), Some(15.0));
    assert_eq!(parse_number("-Infinity"), Some(f64::NEG_INFINITY));
}

#[test]
fn test_parse_number_rejects() {
    assert_eq!(parse_number(""), None);
    assert_eq!(parse_number("   "), None);
    assert_eq!(parse_number("9x"), None);
    assert_eq!(parse_number("1,000"), None);
    assert_eq!(parse_number("nan"), None);
    assert_eq!(parse_number("inf"), None);
    assert_eq!(parse_number("1e"), None);
    assert_eq!(parse_number("."), None);
    assert_eq!(parse_number("-0x10"), None);
    assert_eq!(parse_number("0xg"), None);
}

// ============================================================================
// Locale Compare
// ============================================================================

#[test]
fn test_locale_compare_ignores_case_at_first_level() {
    assert_eq!(locale_compare("apple", "Banana"), Ordering::Less);
    assert_eq!(locale_compare("Zebra", "apple"), Ordering::Greater);
}

#[test]
fn test_locale_compare_lowercase_before_uppercase() {
    assert_eq!(locale_compare("a", "A"), Ordering::Less);
    assert_eq!(locale_compare("Apple", "apple"), Ordering::Greater);
}

#[test]
fn test_locale_compare_accents() {
    // Base letters decide before accents do.
    assert_eq!(locale_compare("résumé", "rez"), Ordering::Less);
    assert_eq!(locale_compare("Äpfel", "Birne"), Ordering::Less);
    // Unaccented before accented when base letters tie.
    assert_eq!(locale_compare("e", "é"), Ordering::Less);
}

#[test]
fn test_locale_compare_identity() {
    assert_eq!(locale_compare("same", "same"), Ordering::Equal);
}
