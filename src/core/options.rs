//! Per-dependency build options.
//!
//! The driver seeds one empty [`OptionSet`] per declared requirement before
//! the configure hook runs; configuring an undeclared dependency is a hard
//! error. Both maps are BTree-backed so iteration order is stable.

use std::collections::BTreeMap;
use std::fmt;

use crate::errors::{Error, Result};

/// A single option value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    Bool(bool),
    Str(String),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Bool(b) => write!(f, "{}", b),
            OptionValue::Str(s) => f.write_str(s),
        }
    }
}

impl From<bool> for OptionValue {
    fn from(b: bool) -> Self {
        OptionValue::Bool(b)
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        OptionValue::Str(s.to_string())
    }
}

/// The configurable flags of a single dependency.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionSet {
    flags: BTreeMap<String, OptionValue>,
}

impl OptionSet {
    /// Set a flag, replacing any previous value.
    pub fn set(&mut self, flag: impl Into<String>, value: impl Into<OptionValue>) {
        self.flags.insert(flag.into(), value.into());
    }

    /// Get a flag value.
    pub fn get(&self, flag: &str) -> Option<&OptionValue> {
        self.flags.get(flag)
    }

    /// Get a boolean flag; `None` when unset or not a boolean.
    pub fn get_bool(&self, flag: &str) -> Option<bool> {
        match self.flags.get(flag) {
            Some(OptionValue::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Iterate flags in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.flags.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Option sets for every declared dependency, keyed by dependency name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionTable {
    entries: BTreeMap<String, OptionSet>,
}

impl OptionTable {
    pub fn new() -> Self {
        OptionTable::default()
    }

    /// Open an option namespace for a declared dependency.
    ///
    /// Only the driver seeds namespaces; the configure hook can mutate
    /// existing ones but never create new ones.
    pub fn seed(&mut self, name: impl Into<String>) {
        self.entries.entry(name.into()).or_default();
    }

    /// Whether a dependency has a seeded namespace.
    pub fn is_declared(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Mutable access to a declared dependency's options.
    pub fn dependency_mut(&mut self, name: &str) -> Result<&mut OptionSet> {
        self.entries
            .get_mut(name)
            .ok_or_else(|| Error::UndeclaredDependency {
                name: name.to_string(),
            })
    }

    /// Read access to a dependency's options.
    pub fn dependency(&self, name: &str) -> Option<&OptionSet> {
        self.entries.get(name)
    }

    /// Iterate (dependency, options) pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionSet)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_set_replaces_on_set() {
        let mut set = OptionSet::default();
        set.set("shared", false);
        set.set("shared", true);
        assert_eq!(set.get_bool("shared"), Some(true));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_option_value_kinds() {
        let mut set = OptionSet::default();
        set.set("shared", true);
        set.set("runtime", "dynamic");
        assert_eq!(set.get_bool("shared"), Some(true));
        assert_eq!(set.get_bool("runtime"), None);
        assert_eq!(set.get("runtime"), Some(&OptionValue::Str("dynamic".into())));
        assert_eq!(set.get("missing"), None);
    }

    #[test]
    fn test_table_rejects_undeclared_dependency() {
        let mut table = OptionTable::new();
        table.seed("qt");

        table.dependency_mut("qt").unwrap().set("shared", true);

        let err = table.dependency_mut("boost").unwrap_err();
        assert!(matches!(err, Error::UndeclaredDependency { ref name } if name == "boost"));
    }

    #[test]
    fn test_table_iteration_is_sorted() {
        let mut table = OptionTable::new();
        table.seed("zlib");
        table.seed("fmt");
        table.seed("qt");

        let names: Vec<&str> = table.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["fmt", "qt", "zlib"]);
    }
}
