//! Rule-based manufacturer-name normalization and model-code extraction.
//!
//! Both source datasets carry free-text manufacturer and model fields; these
//! functions rewrite them into a shared key space so accident records can be
//! joined against inventory records. All rewriting is deterministic substring
//! and prefix substitution driven by the ordered tables in [`crate::vocab`] —
//! no similarity scoring.

use crate::vocab::{INVENTORY_ALIASES, ORG_WORDS, SEPARATORS};

/// Normalizes a manufacturer name from the accident dataset.
///
/// Lowercases and trims, substitutes the first matching separator kind with
/// spaces, then strips organizational words (`ltd`, `inc`, `aviation`, ...).
/// Only one separator kind is ever substituted even when several are present;
/// the upstream rule chain works that way and downstream vocabulary depends
/// on it.
pub fn normalize_manufacturer_accidents(raw: &str) -> String {
    let mut name = raw.to_lowercase().trim().to_string();

    for sep in SEPARATORS {
        if name.contains(sep) {
            name = name.replace(sep, " ");
            break;
        }
    }

    for word in ORG_WORDS {
        name = name.replace(&format!(" {word}"), "");
        name = name.replace(&format!("{word} "), "");
        name = name.replace(word, "");
    }

    name.trim().to_string()
}

/// Normalizes a manufacturer name from the inventory dataset.
///
/// After basic cleanup this walks a few airline-specific prefix rules, then
/// the [`INVENTORY_ALIASES`] table in declaration order; the first alias with
/// a matching trigger substring wins outright. Names with no alias fall
/// through to a generic space-to-slash rewrite.
pub fn normalize_manufacturer_inventory(raw: &str) -> String {
    let mut name = raw
        .trim()
        .to_lowercase()
        .replace('/', " ")
        .replace('-', " ");

    if name.starts_with("iberia") {
        // Character-count strip: drops the 7 bytes "iberia " even when the
        // name is shorter than that.
        name = name.get(7..).unwrap_or_default().to_string();
    }
    if name.contains("iberia") {
        name = name.replace("easyjet ", "").replace("easyjet", "");
    }
    if name.contains("vueling") {
        name = name.replace("vueling ", "");
    }
    if name == "philippineairlines" {
        // Upstream missing-value sentinel.
        name = "nan".to_string();
    }

    for (canonical, triggers) in INVENTORY_ALIASES {
        if triggers.iter().any(|t| name.contains(t)) {
            return (*canonical).to_string();
        }
    }

    name.replace(' ', "/")
}

/// Reduces a free-text model field to a short numeric code.
///
/// Keeps at most the first three decimal digits, in original order. Inputs
/// without digits yield an empty code, which is valid (if uninformative).
pub fn extract_model_code(raw: &str) -> String {
    raw.trim()
        .replace('-', "")
        .replace('/', "")
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(3)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accidents_lowercase_and_trim() {
        assert_eq!(normalize_manufacturer_accidents("  CESSNA  "), "cessna");
    }

    #[test]
    fn test_accidents_first_separator_only() {
        // '-' is found before ',' in the scan order, so only '-' is
        // substituted and the comma survives.
        assert_eq!(
            normalize_manufacturer_accidents("rolls-royce, north"),
            "rolls royce, north"
        );
    }

    #[test]
    fn test_accidents_separator_and_word() {
        assert_eq!(
            normalize_manufacturer_accidents("Piper Aircraft Inc"),
            "piper"
        );
        assert_eq!(
            normalize_manufacturer_accidents("Bell Helicopter"),
            "bell"
        );
    }

    #[test]
    fn test_accidents_org_word_removal() {
        assert_eq!(normalize_manufacturer_accidents("Mooney Aviation"), "mooney");
        assert_eq!(normalize_manufacturer_accidents("Robinson Ltd"), "robinson");
    }

    #[test]
    fn test_accidents_and_separator() {
        assert_eq!(
            normalize_manufacturer_accidents("pratt and whitney"),
            "pratt whitney"
        );
    }

    #[test]
    fn test_accidents_idempotent() {
        let inputs = [
            "Bell Helicopter",
            "Piper Aircraft",
            "pratt and whitney",
            "Mooney Aviation",
            "cessna",
            "",
        ];
        for input in inputs {
            let once = normalize_manufacturer_accidents(input);
            let twice = normalize_manufacturer_accidents(&once);
            assert_eq!(once, twice, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_inventory_alias_first_match_wins() {
        assert_eq!(normalize_manufacturer_inventory("Boeing Company"), "boeing");
        assert_eq!(
            normalize_manufacturer_inventory("MD Helicopters"),
            "mcdonnell douglas"
        );
        assert_eq!(normalize_manufacturer_inventory("Beech"), "beechcraft");
    }

    #[test]
    fn test_inventory_unmatched_falls_through_to_slashes() {
        assert_eq!(
            normalize_manufacturer_inventory("Cirrus Design Of Duluth"),
            "cirrus/design/of/duluth"
        );
    }

    #[test]
    fn test_inventory_iberia_prefix_strip_is_character_based() {
        // "iberia" is only six characters, so the 7-char strip empties it.
        assert_eq!(normalize_manufacturer_inventory("Iberia"), "");
        // The strip removes "iberia " and leaves the remainder untouched.
        assert_eq!(
            normalize_manufacturer_inventory("Iberia Airlines"),
            "airlines"
        );
    }

    #[test]
    fn test_inventory_vueling_removed() {
        assert_eq!(normalize_manufacturer_inventory("Vueling Airbus"), "airbus");
    }

    #[test]
    fn test_inventory_missing_sentinel() {
        assert_eq!(
            normalize_manufacturer_inventory("PhilippineAirlines"),
            "nan"
        );
    }

    #[test]
    fn test_inventory_gulf_trigger() {
        assert_eq!(
            normalize_manufacturer_inventory("Gulfstream Aerospace"),
            "gulfstreamaerospace"
        );
    }

    #[test]
    fn test_model_code_basic() {
        assert_eq!(extract_model_code("737-800"), "737");
        assert_eq!(extract_model_code("A320"), "320");
        assert_eq!(extract_model_code(" PA-28-161 "), "281");
    }

    #[test]
    fn test_model_code_no_digits_is_empty() {
        assert_eq!(extract_model_code("Skyhawk"), "");
        assert_eq!(extract_model_code(""), "");
    }

    #[test]
    fn test_model_code_never_longer_than_three_digits() {
        for input in ["747400", "1234567890", "a1b2c3d4", "99"] {
            let code = extract_model_code(input);
            assert!(code.len() <= 3, "{code:?} too long");
            assert!(code.chars().all(|c| c.is_ascii_digit()));
        }
    }
}
