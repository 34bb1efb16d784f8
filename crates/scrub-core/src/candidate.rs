use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::category::Category;

/// A detected substring provisionally assigned to a category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CandidateEntity {
    pub category: Category,
    pub raw_text: String,
}

impl CandidateEntity {
    pub fn new(category: Category, raw_text: impl Into<String>) -> Self {
        Self {
            category,
            raw_text: raw_text.into(),
        }
    }
}

/// Insertion-ordered set of candidate strings, deduplicated by exact equality.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct CandidateSet {
    items: Vec<String>,
    seen: HashSet<String>,
}

impl CandidateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a candidate. Returns false if the exact string was already present.
    pub fn insert(&mut self, candidate: impl Into<String>) -> bool {
        let candidate = candidate.into();
        if self.seen.contains(&candidate) {
            return false;
        }
        self.seen.insert(candidate.clone());
        self.items.push(candidate);
        true
    }

    pub fn contains(&self, candidate: &str) -> bool {
        self.seen.contains(candidate)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    /// Keep only candidates matching the predicate, preserving order.
    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        let seen = &mut self.seen;
        self.items.retain(|item| {
            let kept = keep(item);
            if !kept {
                seen.remove(item);
            }
            kept
        });
    }
}

impl From<Vec<String>> for CandidateSet {
    fn from(items: Vec<String>) -> Self {
        items.into_iter().collect()
    }
}

impl From<CandidateSet> for Vec<String> {
    fn from(set: CandidateSet) -> Self {
        set.items
    }
}

impl<S: Into<String>> FromIterator<S> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = CandidateSet::new();
        for item in iter {
            set.insert(item);
        }
        set
    }
}

impl<S: Into<String>> Extend<S> for CandidateSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

/// Pattern-detector output, before merging and disambiguation.
///
/// Digit groups are not yet split into telephone and numeric candidates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCandidates {
    pub names: CandidateSet,
    pub emails: CandidateSet,
    pub digit_groups: CandidateSet,
    pub ibans: CandidateSet,
    pub bics: CandidateSet,
}

/// Fully categorized candidates, one set per category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectedEntities {
    pub names: CandidateSet,
    pub emails: CandidateSet,
    pub telephones: CandidateSet,
    pub numerics: CandidateSet,
    pub ibans: CandidateSet,
    pub bics: CandidateSet,
}

impl DetectedEntities {
    pub fn get(&self, category: Category) -> &CandidateSet {
        match category {
            Category::Name => &self.names,
            Category::Email => &self.emails,
            Category::Iban => &self.ibans,
            Category::Bic => &self.bics,
            Category::Telephone => &self.telephones,
            Category::Numeric => &self.numerics,
        }
    }

    /// Every candidate, grouped by category in precedence order.
    pub fn entities(&self) -> impl Iterator<Item = CandidateEntity> + '_ {
        Category::PRECEDENCE.into_iter().flat_map(move |category| {
            self.get(category)
                .iter()
                .map(move |raw| CandidateEntity::new(category, raw))
        })
    }

    pub fn total(&self) -> usize {
        Category::PRECEDENCE
            .iter()
            .map(|category| self.get(*category).len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}
