//! "At least one of" constraints across the direct children of one
//! composite.

use indexmap::IndexMap;
use std::collections::HashMap;

use crate::path::FieldPath;

/// Collects group membership and emptiness while a composite's children are
/// visited. One tracker per composite, so groups never span levels.
#[derive(Debug, Default)]
pub struct GroupTracker {
    groups: IndexMap<String, Vec<FieldPath>>,
    empty: HashMap<FieldPath, bool>,
}

impl GroupTracker {
    pub fn new() -> Self {
        GroupTracker::default()
    }

    /// Adds `path` to each of `groups`, remembering whether it was empty.
    pub fn record(&mut self, path: &FieldPath, groups: &[String], empty: bool) {
        if groups.is_empty() {
            return;
        }
        self.empty.insert(path.clone(), empty);
        for group in groups {
            self.groups
                .entry(group.clone())
                .or_default()
                .push(path.clone());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Groups in which no member holds a value, in order of first
    /// declaration.
    pub fn unsatisfied(&self) -> Vec<(&str, &[FieldPath])> {
        self.groups
            .iter()
            .filter(|(_, members)| {
                members
                    .iter()
                    .all(|m| self.empty.get(m).copied().unwrap_or(true))
            })
            .map(|(name, members)| (name.as_str(), members.as_slice()))
            .collect()
    }
}
