use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::HashMap;

use crate::category::Category;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingEntry {
    pub category: Category,
    pub original: String,
    pub replacement: String,
}

/// Original string → synthetic replacement, unique per original across the run.
///
/// Entries keep insertion order. Application is a single pass in which a
/// longer original always wins over any shorter original it contains.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<MappingEntry>", into = "Vec<MappingEntry>")]
pub struct RedactionMapping {
    entries: Vec<MappingEntry>,
    index: HashMap<String, usize>,
}

impl RedactionMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a replacement. The first claim on an original wins; later
    /// claims and empty originals are rejected and return false.
    pub fn insert(
        &mut self,
        category: Category,
        original: impl Into<String>,
        replacement: impl Into<String>,
    ) -> bool {
        let original = original.into();
        if original.is_empty() || self.index.contains_key(&original) {
            return false;
        }
        self.index.insert(original.clone(), self.entries.len());
        self.entries.push(MappingEntry {
            category,
            original,
            replacement: replacement.into(),
        });
        true
    }

    pub fn get(&self, original: &str) -> Option<&str> {
        self.entry(original).map(|e| e.replacement.as_str())
    }

    pub fn entry(&self, original: &str) -> Option<&MappingEntry> {
        self.index.get(original).map(|&i| &self.entries[i])
    }

    /// Category that owns an original, if any.
    pub fn claimed_by(&self, original: &str) -> Option<Category> {
        self.entry(original).map(|e| e.category)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MappingEntry> {
        self.entries.iter()
    }

    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &MappingEntry> {
        self.entries.iter().filter(move |e| e.category == category)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Global find-and-replace over `text`.
    ///
    /// Every original is matched in one scan, longest first, so a short key
    /// never splits a longer key that contains it and replacement text is
    /// never rescanned.
    pub fn apply(&self, text: &str) -> Result<String> {
        if self.entries.is_empty() {
            return Ok(text.to_string());
        }

        let mut originals: Vec<&str> = self.entries.iter().map(|e| e.original.as_str()).collect();
        originals.sort_by_key(|original| Reverse(original.len()));
        let pattern = originals
            .into_iter()
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join("|");
        let matcher = Regex::new(&pattern)?;

        let replaced = matcher.replace_all(text, |caps: &Captures| {
            let found = &caps[0];
            self.get(found).unwrap_or(found).to_string()
        });
        Ok(replaced.into_owned())
    }
}

impl From<Vec<MappingEntry>> for RedactionMapping {
    fn from(entries: Vec<MappingEntry>) -> Self {
        let mut mapping = RedactionMapping::new();
        for e in entries {
            mapping.insert(e.category, e.original, e.replacement);
        }
        mapping
    }
}

impl From<RedactionMapping> for Vec<MappingEntry> {
    fn from(mapping: RedactionMapping) -> Self {
        mapping.entries
    }
}
