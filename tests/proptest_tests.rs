//! Property-based tests using proptest.
//!
//! These tests verify invariants of the substitution engine using randomly
//! generated inputs.

use proptest::prelude::*;

use docstamp::{SubstitutionMap, substitute};

/// Strategy for a set of placeholder keys where no key is a substring of
/// another: distinct equal-length tokens wrapped in `{{ }}` delimiters.
fn disjoint_keys_strategy() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::hash_set("[A-Z]{6}", 1..6).prop_map(|set| {
        let mut keys: Vec<String> = set.into_iter().map(|t| format!("{{{{{t}}}}}")).collect();
        keys.sort();
        keys
    })
}

proptest! {
    /// With no key a substring of another and every key occurring exactly
    /// once, every occurrence is replaced and no key literal remains.
    #[test]
    fn all_keys_replaced_and_none_remain(
        keys in disjoint_keys_strategy(),
        values in proptest::collection::vec("[a-z]{0,8}", 6),
        fillers in proptest::collection::vec("[a-z ]{0,8}", 7),
    ) {
        // Interleave filler text and keys; values and fillers contain no
        // brace characters, so pairs cannot interact.
        let mut content = String::new();
        let mut expected = String::new();
        let mut map = SubstitutionMap::new();
        for (i, key) in keys.iter().enumerate() {
            content.push_str(&fillers[i]);
            content.push_str(key);
            expected.push_str(&fillers[i]);
            expected.push_str(&values[i]);
            map.insert(key, &values[i]);
        }
        content.push_str(&fillers[keys.len()]);
        expected.push_str(&fillers[keys.len()]);

        let result = substitute(&content, &map);
        prop_assert_eq!(&result, &expected);
        for key in &keys {
            prop_assert!(!result.contains(key.as_str()), "key {} survived", key);
        }
    }

    /// The engine is pure: same content and map, same output.
    #[test]
    fn substitution_is_deterministic(
        content in "[a-zA-Z {}]{0,64}",
        key in "\\{\\{[A-Z]{1,8}\\}\\}",
        value in "[a-z]{0,8}",
    ) {
        let map: SubstitutionMap = [(key, value)].into_iter().collect();
        prop_assert_eq!(substitute(&content, &map), substitute(&content, &map));
    }

    /// An empty map is the identity, whatever the content.
    #[test]
    fn empty_map_is_identity(content in ".{0,128}") {
        let map = SubstitutionMap::new();
        prop_assert_eq!(substitute(&content, &map), content);
    }
}
