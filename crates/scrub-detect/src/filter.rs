use std::collections::HashSet;

use scrub_config::DetectionConfig;

/// Rejects name candidates that are too short or are document boilerplate.
#[derive(Debug, Clone)]
pub struct NameFilter {
    min_length: usize,
    stop_words: HashSet<String>,
}

impl NameFilter {
    pub fn new(min_length: usize, stop_words: &[String]) -> Self {
        Self {
            min_length,
            stop_words: stop_words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    pub fn from_config(config: &DetectionConfig) -> Self {
        Self::new(config.min_name_length, &config.name_stop_words)
    }

    /// Length is counted in characters.
    pub fn accepts(&self, candidate: &str) -> bool {
        candidate.chars().count() >= self.min_length
            && !self.stop_words.contains(&candidate.to_lowercase())
    }
}
