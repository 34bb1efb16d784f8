use scrub_core::{DetectedEntities, RedactionMapping};
use scrub_synth::{RandomSource, SyntheticValueFactory};
use tracing::{debug, warn};

/// Assembles the final original → replacement table.
///
/// Categories are visited in precedence order, so when two candidates
/// register the same substring the higher-precedence one keeps it.
pub struct RedactionMapBuilder;

impl RedactionMapBuilder {
    pub fn build<R: RandomSource>(
        detected: &DetectedEntities,
        factory: &mut SyntheticValueFactory<R>,
    ) -> RedactionMapping {
        let mut mapping = RedactionMapping::new();

        for entity in detected.entities() {
            let Some(replacement) = factory.replacement(entity.category, &entity.raw_text) else {
                debug!(category = %entity.category, "Nothing to register for candidate");
                continue;
            };

            if let Some(owner) = mapping.claimed_by(&replacement.original) {
                if owner == entity.category {
                    debug!(category = %owner, "Substring already registered");
                } else {
                    warn!(
                        kept = %owner,
                        dropped = %entity.category,
                        "Substring claimed by two categories"
                    );
                }
                continue;
            }

            mapping.insert(entity.category, replacement.original, replacement.replacement);
        }

        mapping
    }
}
