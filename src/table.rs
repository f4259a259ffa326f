//! Path-addressed rule table and the resolver that combines its entries with
//! a field's own inline grammar.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

use crate::error::{ConfigError, Diagnostic};
use crate::grammar;
use crate::path::{FieldPath, RulePattern};
use crate::rule::{Rule, RuleSource};

#[derive(Clone, Debug, PartialEq)]
struct Entry {
    pattern: RulePattern,
    source: RuleSource,
}

/// Ordered mapping from path patterns to rule sources.
///
/// Keys are normalized when inserted, so `a.b` and `.a.b` address the same
/// entry. Wildcard lookups scan entries in insertion order and the first
/// structural match wins.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RuleTable {
    entries: IndexMap<String, Entry>,
}

impl RuleTable {
    pub fn new() -> Self {
        RuleTable::default()
    }

    /// Adds or replaces the entry for `key`. A replaced entry keeps its
    /// original scan position.
    pub fn insert(&mut self, key: &str, source: impl Into<RuleSource>) -> &mut Self {
        let pattern = RulePattern::parse(key);
        self.entries.insert(
            pattern.to_string(),
            Entry {
                pattern,
                source: source.into(),
            },
        );
        self
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, key: &str, source: impl Into<RuleSource>) -> Self {
        self.insert(key, source);
        self
    }

    pub fn get(&self, key: &str) -> Option<&RuleSource> {
        self.entries
            .get(&RulePattern::parse(key).to_string())
            .map(|e| &e.source)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| k.as_str())
    }

    /// Applies every entry of `overlay` on top of this table.
    pub fn extend(&mut self, overlay: &RuleTable) {
        for (key, entry) in &overlay.entries {
            self.entries.insert(key.clone(), entry.clone());
        }
    }

    /// A private copy with `overlays` applied in order; later overlays win.
    pub fn merged(&self, overlays: &[&RuleTable]) -> RuleTable {
        let mut table = self.clone();
        for overlay in overlays {
            table.extend(overlay);
        }
        table
    }

    /// The stored source for `path`: an exact entry first, else the first
    /// wildcard pattern of the same length that matches.
    ///
    /// Both need the segment counts to agree, so a key containing `.` is
    /// never mistaken for deeper nesting.
    pub fn lookup(&self, path: &FieldPath) -> Option<&RuleSource> {
        if let Some(entry) = self
            .entries
            .get(&path.to_string())
            .filter(|e| e.pattern.len() == path.len())
        {
            return Some(&entry.source);
        }
        self.entries
            .values()
            .find(|e| e.pattern.len() == path.len() && e.pattern.matches(path))
            .map(|e| &e.source)
    }

    /// Produces the effective rule for `path`.
    ///
    /// The table entry (if any) is materialized first; a non-empty `inline`
    /// grammar is then parsed on top of it, its keys overriding the table's.
    /// Diagnostics are tagged with `path`.
    pub fn resolve(&self, path: &FieldPath, inline: Option<&str>) -> (Rule, Vec<Diagnostic>) {
        let (mut rule, mut diagnostics) = match self.lookup(path) {
            Some(source) => source.materialize(),
            None => (Rule::default(), Vec::new()),
        };

        if let Some(text) = inline.filter(|t| !t.is_empty()) {
            diagnostics.extend(grammar::parse_into(text, &mut rule));
        }

        let diagnostics = diagnostics.into_iter().map(|d| d.at(path)).collect();
        (rule, diagnostics)
    }

    /// Loads a table from a YAML mapping of pattern → grammar string or
    /// structured rule.
    pub fn from_yaml(input: &str) -> Result<RuleTable, ConfigError> {
        serde_saphyr::from_str(input)
            .map_err(|e| ConfigError::new(format!("invalid rule table: {}", e)))
    }

    /// Loads a table from a JSON object of pattern → grammar string or
    /// structured rule.
    pub fn from_json(input: &str) -> Result<RuleTable, ConfigError> {
        serde_json::from_str(input)
            .map_err(|e| ConfigError::new(format!("invalid rule table: {}", e)))
    }
}

impl<K: AsRef<str>, S: Into<RuleSource>> FromIterator<(K, S)> for RuleTable {
    fn from_iter<I: IntoIterator<Item = (K, S)>>(iter: I) -> Self {
        let mut table = RuleTable::new();
        for (key, source) in iter {
            table.insert(key.as_ref(), source);
        }
        table
    }
}

impl<'de> Deserialize<'de> for RuleTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = IndexMap::<String, RuleSource>::deserialize(deserializer)?;
        Ok(raw.into_iter().collect())
    }
}
