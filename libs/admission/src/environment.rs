//! Environment variable name grammar: `[A-Z_][A-Z0-9_]*`.

use std::collections::BTreeMap;

use crate::violations::{codes, ViolationMap};

fn is_valid_first(c: char) -> bool {
    c.is_ascii_uppercase() || c == '_'
}

fn is_valid_char(c: char) -> bool {
    c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_'
}

/// Aggregate check over all names. Each rule class is reported at most once,
/// regardless of how many names break it.
pub(crate) fn check_names(env: &BTreeMap<String, String>) -> ViolationMap {
    let mut has_empty = false;
    let mut has_invalid_first = false;
    let mut has_invalid_char = false;

    for name in env.keys() {
        let Some(first) = name.chars().next() else {
            has_empty = true;
            continue;
        };

        if !is_valid_first(first) {
            has_invalid_first = true;
        }

        // The first character counts here too.
        if !name.chars().all(is_valid_char) {
            has_invalid_char = true;
        }
    }

    let mut violations = ViolationMap::new();
    if has_empty {
        violations.insert(codes::EMPTY, "Environment variable name cannot be empty");
    }
    if has_invalid_first {
        violations.insert(
            codes::INVALID_FIRST_CHARACTER,
            "Environment variable name must start with an uppercase ASCII letter or '_'",
        );
    }
    if has_invalid_char {
        violations.insert(
            codes::INVALID_CHARACTER,
            "Environment variable name may only contain uppercase ASCII letters, digits and '_'",
        );
    }
    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn env(names: &[&str]) -> BTreeMap<String, String> {
        names
            .iter()
            .map(|n| (n.to_string(), "value".to_string()))
            .collect()
    }

    fn codes_of(violations: &ViolationMap) -> Vec<&str> {
        violations.codes().collect()
    }

    #[test]
    fn test_empty_map_passes() {
        assert!(check_names(&BTreeMap::new()).is_empty());
    }

    #[test]
    fn test_good_names_pass() {
        let v = check_names(&env(&["THIS_IS_GOOD_123", "_THIS_IS_2_GOOD", "_AND_THIS", "_"]));
        assert!(v.is_empty());
    }

    #[test]
    fn test_every_rule_class_reported_once() {
        let v = check_names(&env(&[
            "THIS_IS_GOOD_123",
            "this is bad",
            "1_THIS_IS_NOT_GOOD",
            "",
        ]));
        assert_eq!(
            codes_of(&v),
            vec![codes::EMPTY, codes::INVALID_CHARACTER, codes::INVALID_FIRST_CHARACTER]
        );
    }

    #[test]
    fn test_lowercase_names_aggregate() {
        let v = check_names(&env(&["This_is_bad", "and_this_is_bad"]));
        assert_eq!(
            codes_of(&v),
            vec![codes::INVALID_CHARACTER, codes::INVALID_FIRST_CHARACTER]
        );
    }

    #[rstest]
    #[case("", &[codes::EMPTY])]
    #[case("9LIVES", &[codes::INVALID_FIRST_CHARACTER])]
    #[case("HAS SPACE", &[codes::INVALID_CHARACTER])]
    #[case("DASH-ED", &[codes::INVALID_CHARACTER])]
    #[case("ÜBER", &[codes::INVALID_CHARACTER, codes::INVALID_FIRST_CHARACTER])]
    #[case("a", &[codes::INVALID_CHARACTER, codes::INVALID_FIRST_CHARACTER])]
    #[case("A", &[])]
    fn test_single_name(#[case] name: &str, #[case] expected: &[&str]) {
        let v = check_names(&env(&[name]));
        assert_eq!(codes_of(&v), expected.to_vec());
    }
}
