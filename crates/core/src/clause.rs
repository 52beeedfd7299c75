use std::fmt::{Display, Formatter};

use indexmap::IndexMap;
use itertools::Itertools;

/// One `key=value` refinement of a selector or item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    pub key: String,
    pub value: String,
}

impl Clause {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl Display for Clause {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// Ordered clauses of one builder session, at most one per key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClauseSet {
    entries: IndexMap<String, String>,
}

impl ClauseSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `clause` unless its key is already present.
    ///
    /// Returns `false` (leaving the set untouched) for a duplicate key.
    pub fn insert(&mut self, clause: Clause) -> bool {
        if self.entries.contains_key(&clause.key) {
            return false;
        }

        self.entries.insert(clause.key, clause.value);
        true
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Renders `base[...]`, or just `base` when there are no clauses.
    ///
    /// ```
    /// use mccmd_core::clause::{Clause, ClauseSet};
    ///
    /// let mut clauses = ClauseSet::new();
    /// assert_eq!(clauses.attach_to("@p"), "@p");
    ///
    /// clauses.insert(Clause::new("limit", "1"));
    /// assert_eq!(clauses.attach_to("@p"), "@p[limit=1]");
    /// ```
    #[must_use]
    pub fn attach_to(&self, base: &str) -> String {
        if self.is_empty() {
            base.to_string()
        } else {
            format!("{base}[{self}]")
        }
    }
}

impl Display for ClauseSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let body = self
            .entries
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .join(",");
        f.write_str(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_in_insertion_order() {
        let mut clauses = ClauseSet::new();
        assert!(clauses.insert(Clause::new("limit", "1")));
        assert!(clauses.insert(Clause::new("sort", "nearest")));
        assert_eq!(clauses.to_string(), "limit=1,sort=nearest");
    }

    #[test]
    fn test_empty_set_serializes_to_empty_string() {
        let clauses = ClauseSet::new();
        assert_eq!(clauses.to_string(), "");
        assert_eq!(clauses.attach_to("@a"), "@a");
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let mut clauses = ClauseSet::new();
        assert!(clauses.insert(Clause::new("tag", "foo")));
        assert!(!clauses.insert(Clause::new("tag", "bar")));
        assert_eq!(clauses.len(), 1);
        assert_eq!(clauses.get("tag"), Some("foo"));
    }

    #[test]
    fn test_attach_to() {
        let mut clauses = ClauseSet::new();
        clauses.insert(Clause::new("enchantments", "{sharpness:5}"));
        clauses.insert(Clause::new("rarity", "epic"));
        assert_eq!(
            clauses.attach_to("diamond_sword"),
            "diamond_sword[enchantments={sharpness:5},rarity=epic]"
        );
    }

    #[test]
    fn test_clause_display() {
        assert_eq!(Clause::new("gamemode", "creative").to_string(), "gamemode=creative");
    }
}
