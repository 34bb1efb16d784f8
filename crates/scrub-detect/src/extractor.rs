use std::ops::Range;

use scrub_config::DetectionConfig;
use scrub_core::{CandidateSet, RawCandidates};
use tracing::debug;

use crate::filter::NameFilter;
use crate::patterns;

/// Runs every category detector over the document scan text.
///
/// Detection is deterministic: the same text always yields the same
/// candidates in the same order.
pub struct CandidateExtractor {
    name_filter: NameFilter,
}

impl CandidateExtractor {
    pub fn new(config: &DetectionConfig) -> Self {
        Self {
            name_filter: NameFilter::from_config(config),
        }
    }

    pub fn extract(&self, text: &str) -> RawCandidates {
        let raw = RawCandidates {
            names: self.names(text),
            emails: emails(text),
            digit_groups: digit_groups(text),
            ibans: ibans(text),
            bics: bics(text),
        };

        debug!(
            names = raw.names.len(),
            emails = raw.emails.len(),
            digit_groups = raw.digit_groups.len(),
            ibans = raw.ibans.len(),
            bics = raw.bics.len(),
            "Extracted raw candidates"
        );

        raw
    }

    /// Capitalized-word runs, split on line breaks, then filtered.
    pub fn names(&self, text: &str) -> CandidateSet {
        patterns::CAPITALIZED_WORDS
            .find_iter(text)
            .flat_map(|m| m.as_str().split(['\n', '\r']))
            .filter(|line| !line.is_empty() && self.name_filter.accepts(line))
            .collect()
    }
}

pub fn emails(text: &str) -> CandidateSet {
    patterns::EMAIL
        .find_iter(text)
        .map(|m| m.as_str())
        .collect()
}

/// Telephone-or-numeric matches, not yet told apart.
///
/// A match lying inside an IBAN match is part of that IBAN and is skipped.
/// The same digits elsewhere in the text are still reported.
pub fn digit_groups(text: &str) -> CandidateSet {
    let iban_spans: Vec<Range<usize>> = patterns::IBAN.find_iter(text).map(|m| m.range()).collect();
    patterns::DIGIT_GROUP
        .find_iter(text)
        .filter(|m| {
            !iban_spans
                .iter()
                .any(|span| span.start <= m.start() && m.end() <= span.end)
        })
        .map(|m| m.as_str())
        .collect()
}

pub fn ibans(text: &str) -> CandidateSet {
    patterns::IBAN
        .find_iter(text)
        .map(|m| m.as_str())
        .collect()
}

/// First BIC-shaped token of every segment following a `BIC` marker.
pub fn bics(text: &str) -> CandidateSet {
    let mut found = CandidateSet::new();
    for (i, segment) in text.split(patterns::BIC_MARKER).enumerate().skip(1) {
        match patterns::BIC.find(segment) {
            Some(m) => {
                found.insert(m.as_str());
            }
            None => debug!(segment = i, "No BIC-shaped token after marker"),
        }
    }
    found
}
