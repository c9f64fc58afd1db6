//! Literal placeholder substitution over a text payload.
//!
//! The engine is deliberately simple: plain substring replacement applied one
//! mapping pair at a time, in insertion order. There is no placeholder
//! syntax, no escaping, and no parse step — a key matches wherever its exact
//! bytes occur in the content.
//!
//! Order matters. Each replacement runs over the result of the previous one,
//! so a value injected by an early pair can be consumed by a later pair:
//!
//! ```rust
//! use docstamp::{SubstitutionMap, substitute};
//!
//! let map: SubstitutionMap = [("A", "B"), ("B", "C")].into_iter().collect();
//! assert_eq!(substitute("A", &map), "C");
//! ```

use indexmap::IndexMap;

/// An insertion-ordered placeholder → replacement mapping.
///
/// Keys are unique; inserting an existing key overwrites its value but keeps
/// its original position. Iteration order is insertion order, and that order
/// is the replacement order of [`substitute`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubstitutionMap {
    entries: IndexMap<String, String>,
}

impl SubstitutionMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a placeholder → replacement pair.
    ///
    /// Returns the previous replacement if the placeholder was already
    /// present; the placeholder keeps its original position in that case.
    pub fn insert(
        &mut self,
        placeholder: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Option<String> {
        self.entries.insert(placeholder.into(), replacement.into())
    }

    /// Returns the number of pairs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map has no pairs.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SubstitutionMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

/// Applies every pair of `map` to `content` as a literal substring
/// replacement, in insertion order.
///
/// Pure and deterministic: no I/O, no state, same output for the same
/// `(content, map)`.
pub fn substitute(content: &str, map: &SubstitutionMap) -> String {
    let mut content = content.to_string();
    for (placeholder, replacement) in map.iter() {
        content = content.replace(placeholder, replacement);
    }
    content
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_every_occurrence() {
        let map: SubstitutionMap = [("{{NAME}}", "World")].into_iter().collect();
        assert_eq!(
            substitute("Hello {{NAME}}, goodbye {{NAME}}", &map),
            "Hello World, goodbye World"
        );
    }

    #[test]
    fn empty_map_is_identity() {
        let map = SubstitutionMap::new();
        assert_eq!(substitute("untouched {{X}}", &map), "untouched {{X}}");
    }

    #[test]
    fn follows_insertion_order() {
        let map: SubstitutionMap = [("A", "B"), ("B", "C")].into_iter().collect();
        assert_eq!(substitute("A", &map), "C");

        let map: SubstitutionMap = [("B", "C"), ("A", "B")].into_iter().collect();
        assert_eq!(substitute("A", &map), "B");
    }

    #[test]
    fn reinserting_a_key_keeps_its_position() {
        let mut map: SubstitutionMap = [("A", "B"), ("B", "C")].into_iter().collect();
        assert_eq!(map.insert("A", "X"), Some("B".to_string()));
        // "A" still runs before "B" -> "A" becomes "X", untouched afterwards.
        assert_eq!(substitute("A", &map), "X");
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn key_absent_from_content_is_a_no_op() {
        let map: SubstitutionMap = [("{{MISSING}}", "value")].into_iter().collect();
        assert_eq!(substitute("plain text", &map), "plain text");
    }
}
