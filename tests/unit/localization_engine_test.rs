//! Unit tests for the LocalizationEngine public API.
//!
//! These tests exercise locale initialization, Arabic plural rules,
//! parameter interpolation, RTL detection, and fallback behavior for
//! unsupported locales.

use std::collections::HashMap;
use std::fs;

use rstest::rstest;
use tempfile::TempDir;

use taqyeem::services::localization_engine::{
    LocalizationEngine, LocalizationEngineTrait,
};

/// Creates a temp directory with en.json and ar.json locale files matching
/// the structure used by the real application.
fn setup_locales(dir: &std::path::Path) {
    let en = serde_json::json!({
        "nav": {
            "companies": "Companies",
            "reviews": "Reviews"
        },
        "common": {
            "companies_one": "{count} company",
            "companies_other": "{count} companies"
        },
        "greeting": "Welcome, {name}!",
        "company": {
            "rating": "Rating: {rating} of 5"
        }
    });

    let ar = serde_json::json!({
        "nav": {
            "companies": "الشركات",
            "reviews": "المراجعات"
        },
        "common": {
            "companies_zero": "لا شركات",
            "companies_one": "شركة واحدة",
            "companies_two": "شركتان",
            "companies_few": "{count} شركات",
            "companies_many": "{count} شركة",
            "companies_other": "{count} شركة"
        },
        "greeting": "أهلاً، {name}!",
        "company": {
            "rating": "التقييم: {rating} من 5"
        }
    });

    fs::write(
        dir.join("en.json"),
        serde_json::to_string_pretty(&en).unwrap(),
    )
    .unwrap();
    fs::write(
        dir.join("ar.json"),
        serde_json::to_string_pretty(&ar).unwrap(),
    )
    .unwrap();
}

/// Helper: create an initialized LocalizationEngine backed by a temp directory.
fn initialized_engine(dir: &TempDir) -> LocalizationEngine {
    let mut engine = LocalizationEngine::new(dir.path());
    engine.initialize().unwrap();
    engine
}

// ---------------------------------------------------------------------------
// Arabic plural rules
// ---------------------------------------------------------------------------

/// Arabic plurals follow the CLDR pattern:
///   zero: 0            → "لا شركات"
///   one:  1            → "شركة واحدة"
///   two:  2            → "شركتان"
///   few:  3-10, 103-110 → "شركات"
///   many: 11-99, 111-199 → "شركة"
///   other: 100, 101, 102, 200 → "شركة"
#[rstest]
#[case(0,   "لا شركات")]
#[case(1,   "شركة واحدة")]
#[case(2,   "شركتان")]
#[case(3,   "3 شركات")]
#[case(7,   "7 شركات")]
#[case(10,  "10 شركات")]
#[case(103, "103 شركات")]
#[case(11,  "11 شركة")]
#[case(42,  "42 شركة")]
#[case(99,  "99 شركة")]
#[case(111, "111 شركة")]
#[case(100, "100 شركة")]
#[case(101, "101 شركة")]
#[case(200, "200 شركة")]
fn test_arabic_plural_rules(#[case] count: u64, #[case] expected: &str) {
    let dir = TempDir::new().unwrap();
    setup_locales(dir.path());
    let mut engine = initialized_engine(&dir);
    engine.set_locale("ar").unwrap();

    let result = engine.plural("common.companies", count, None);
    assert_eq!(result, expected, "Arabic plural for count={count}");
}

/// English keeps the simple one/other split.
#[rstest]
#[case(0, "0 companies")]
#[case(1, "1 company")]
#[case(2, "2 companies")]
#[case(100, "100 companies")]
fn test_english_plural_rules(#[case] count: u64, #[case] expected: &str) {
    let dir = TempDir::new().unwrap();
    setup_locales(dir.path());
    let engine = initialized_engine(&dir);

    let result = engine.plural("common.companies", count, None);
    assert_eq!(result, expected, "English plural for count={count}");
}

// ---------------------------------------------------------------------------
// Locale switching and RTL
// ---------------------------------------------------------------------------

/// Switching between the two supported locales changes lookups without
/// reinitializing the engine.
#[test]
fn test_switch_locale_without_restart() {
    let dir = TempDir::new().unwrap();
    setup_locales(dir.path());
    let mut engine = initialized_engine(&dir);

    assert_eq!(engine.t("nav.companies", None), "Companies");

    engine.set_locale("ar").unwrap();
    assert_eq!(engine.t("nav.companies", None), "الشركات");

    engine.set_locale("en").unwrap();
    assert_eq!(engine.t("nav.companies", None), "Companies");
}

/// Arabic renders right-to-left; English does not.
#[test]
fn test_rtl_flag_follows_locale() {
    let dir = TempDir::new().unwrap();
    setup_locales(dir.path());
    let mut engine = initialized_engine(&dir);

    assert!(!engine.is_rtl());
    engine.set_locale("ar").unwrap();
    assert!(engine.is_rtl());
}

/// Unsupported locales are rejected and the active locale is unchanged.
#[test]
fn test_unsupported_locale_rejected() {
    let dir = TempDir::new().unwrap();
    setup_locales(dir.path());
    let mut engine = initialized_engine(&dir);

    assert!(engine.set_locale("fr").is_err());
    assert_eq!(engine.get_locale(), "en");
}

// ---------------------------------------------------------------------------
// Lookup and interpolation
// ---------------------------------------------------------------------------

/// A missing key falls back to echoing the key itself, so untranslated
/// strings are visible but never crash rendering.
#[test]
fn test_missing_key_falls_back_to_key() {
    let dir = TempDir::new().unwrap();
    setup_locales(dir.path());
    let mut engine = initialized_engine(&dir);

    assert_eq!(engine.t("nav.does_not_exist", None), "nav.does_not_exist");

    engine.set_locale("ar").unwrap();
    assert_eq!(engine.t("totally.unknown", None), "totally.unknown");
}

/// `{param}` placeholders are replaced in both locales.
#[test]
fn test_parameter_interpolation() {
    let dir = TempDir::new().unwrap();
    setup_locales(dir.path());
    let mut engine = initialized_engine(&dir);

    let mut params = HashMap::new();
    params.insert("rating".to_string(), "4.5".to_string());

    assert_eq!(engine.t("company.rating", Some(&params)), "Rating: 4.5 of 5");

    engine.set_locale("ar").unwrap();
    assert_eq!(engine.t("company.rating", Some(&params)), "التقييم: 4.5 من 5");
}

/// Both locale files ship with the repository and load successfully.
#[test]
fn test_repository_locales_initialize() {
    let mut engine = LocalizationEngine::with_default_path();
    engine.initialize().unwrap();

    assert_eq!(engine.get_available_locales(), vec!["ar", "en"]);
}
