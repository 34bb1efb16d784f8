use scrub_config::DetectionConfig;
use scrub_core::{CandidateSet, EntitySpan};

/// Unions recognizer person spans with pattern-derived name candidates.
pub struct EntityMerger {
    person_labels: Vec<String>,
}

impl EntityMerger {
    pub fn new(config: &DetectionConfig) -> Self {
        Self {
            person_labels: config.person_labels.clone(),
        }
    }

    pub fn is_person(&self, span: &EntitySpan) -> bool {
        self.person_labels
            .iter()
            .any(|label| label.eq_ignore_ascii_case(&span.label))
    }

    /// Recognizer spans come first, then pattern names not already present.
    pub fn merge(&self, spans: &[EntitySpan], regex_names: &CandidateSet) -> CandidateSet {
        let mut names: CandidateSet = spans
            .iter()
            .filter(|span| !span.text.is_empty() && self.is_person(span))
            .map(|span| span.text.as_str())
            .collect();
        names.extend(regex_names.iter());
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn merger() -> EntityMerger {
        EntityMerger::new(&DetectionConfig::default())
    }

    #[test]
    fn test_only_person_spans_kept() {
        let spans = vec![
            EntitySpan::new("Jean Dupont", "PER"),
            EntitySpan::new("Paris", "LOC"),
            EntitySpan::new("Acme", "ORG"),
        ];
        let merged = merger().merge(&spans, &CandidateSet::new());
        assert_eq!(merged.iter().collect::<Vec<_>>(), vec!["Jean Dupont"]);
    }

    #[test]
    fn test_label_match_ignores_case() {
        assert!(merger().is_person(&EntitySpan::new("Jean", "person")));
    }

    #[test]
    fn test_recognizer_first_then_regex_without_duplicates() {
        let spans = vec![EntitySpan::new("Dupont", "PER")];
        let regex_names: CandidateSet = ["Marie Curie", "Dupont"].into_iter().collect();

        let merged = merger().merge(&spans, &regex_names);
        assert_eq!(
            merged.iter().collect::<Vec<_>>(),
            vec!["Dupont", "Marie Curie"]
        );
    }

    #[test]
    fn test_merge_is_content_order_independent() {
        let spans = vec![EntitySpan::new("Marie Curie", "PER")];
        let regex_names: CandidateSet = ["Marie Curie", "Jean Dupont"].into_iter().collect();

        let a = merger().merge(&spans, &regex_names);
        let b = merger().merge(&[], &regex_names);

        let mut a: Vec<_> = a.iter().collect();
        let mut b: Vec<_> = b.iter().collect();
        a.sort();
        b.sort();
        assert_eq!(a, b);
    }
}
