use scrub_config::{DetectionConfig, LengthWindow};
use scrub_core::{CandidateSet, Category, DetectedEntities, RawCandidates};
use tracing::debug;

use crate::filter::NameFilter;

/// Outcome of classifying one digit-group match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitClass {
    Telephone,
    Numeric,
    Noise,
}

/// Resolves overlapping raw candidates into one category each.
pub struct Disambiguator {
    telephone_window: LengthWindow,
    noise_floor: usize,
    name_filter: NameFilter,
}

impl Disambiguator {
    pub fn new(config: &DetectionConfig) -> Self {
        Self {
            telephone_window: config.telephone_window,
            noise_floor: config.numeric_noise_floor,
            name_filter: NameFilter::from_config(config),
        }
    }

    /// Depends only on the character count of the raw match, separators included.
    pub fn classify(&self, raw: &str) -> DigitClass {
        let len = raw.chars().count();
        if self.telephone_window.contains(len) {
            DigitClass::Telephone
        } else if len > self.noise_floor {
            DigitClass::Numeric
        } else {
            DigitClass::Noise
        }
    }

    /// Split digit groups, filter names, and drop strings a higher-precedence
    /// category already holds.
    pub fn resolve(&self, raw: RawCandidates) -> DetectedEntities {
        let RawCandidates {
            mut names,
            emails,
            digit_groups,
            ibans,
            bics,
        } = raw;

        names.retain(|name| self.name_filter.accepts(name));

        let mut telephones = CandidateSet::new();
        let mut numerics = CandidateSet::new();
        let mut noise = 0usize;
        for group in digit_groups.iter() {
            match self.classify(group) {
                DigitClass::Telephone => {
                    telephones.insert(group);
                }
                DigitClass::Numeric => {
                    numerics.insert(group);
                }
                DigitClass::Noise => noise += 1,
            }
        }

        let mut detected = DetectedEntities {
            names,
            emails,
            telephones,
            numerics,
            ibans,
            bics,
        };
        let conflicts = drop_claimed(&mut detected);

        debug!(
            telephones = detected.telephones.len(),
            numerics = detected.numerics.len(),
            noise,
            conflicts,
            "Disambiguated candidates"
        );

        detected
    }
}

/// Remove every string already held by a higher-precedence category.
/// Returns how many candidates were dropped.
fn drop_claimed(detected: &mut DetectedEntities) -> usize {
    let mut claimed = CandidateSet::new();
    let mut dropped = 0;
    for category in Category::PRECEDENCE {
        let set = match category {
            Category::Name => &mut detected.names,
            Category::Email => &mut detected.emails,
            Category::Iban => &mut detected.ibans,
            Category::Bic => &mut detected.bics,
            Category::Telephone => &mut detected.telephones,
            Category::Numeric => &mut detected.numerics,
        };
        let before = set.len();
        set.retain(|candidate| !claimed.contains(candidate));
        dropped += before - set.len();
        claimed.extend(set.iter());
    }
    dropped
}
