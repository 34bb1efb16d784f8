use scrub_config::{Config, SynthesisConfig};
use scrub_core::{DetectedEntities, DocumentText, EntitySpan, Error, RedactionMapping, Result};
use scrub_detect::{CandidateExtractor, Disambiguator, EntityMerger};
use scrub_synth::{RandomSource, SyntheticValueFactory};

use crate::builder::RedactionMapBuilder;

/// Result of one pipeline pass over a document.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub detected: DetectedEntities,
    pub mapping: RedactionMapping,
}

/// Text and recognizer spans in, redaction mapping out.
///
/// Synchronous and self-contained: a pipeline holds no state between runs,
/// so one instance can serve any number of documents.
pub struct Pipeline {
    extractor: CandidateExtractor,
    merger: EntityMerger,
    disambiguator: Disambiguator,
    synthesis: SynthesisConfig,
}

impl Pipeline {
    /// Fails with `InvalidConfig` before any document is touched.
    pub fn new(config: &Config) -> Result<Self> {
        config
            .validate()
            .map_err(|e| Error::InvalidConfig(e.to_string()))?;

        Ok(Self {
            extractor: CandidateExtractor::new(&config.detection),
            merger: EntityMerger::new(&config.detection),
            disambiguator: Disambiguator::new(&config.detection),
            synthesis: config.synthesis.clone(),
        })
    }

    /// Deterministic half of the pipeline: extraction, merging, disambiguation.
    pub fn detect(&self, text: &DocumentText, spans: &[EntitySpan]) -> DetectedEntities {
        let scan = text.scan_text();
        let mut raw = self.extractor.extract(&scan);
        raw.names = self.merger.merge(spans, &raw.names);
        self.disambiguator.resolve(raw)
    }

    /// Synthetic values for every detected entity, drawn from `rng`.
    pub fn synthesize<R: RandomSource>(
        &self,
        detected: &DetectedEntities,
        rng: R,
    ) -> RedactionMapping {
        let mut factory = SyntheticValueFactory::new(&self.synthesis, rng);
        RedactionMapBuilder::build(detected, &mut factory)
    }

    pub fn run_with<R: RandomSource>(
        &self,
        text: &DocumentText,
        spans: &[EntitySpan],
        rng: R,
    ) -> PipelineOutput {
        let detected = self.detect(text, spans);
        let mapping = self.synthesize(&detected, rng);
        PipelineOutput { detected, mapping }
    }

    /// Runs with a freshly seeded generator; repeated runs never agree.
    pub fn run(&self, text: &DocumentText, spans: &[EntitySpan]) -> PipelineOutput {
        self.run_with(text, spans, fastrand::Rng::new())
    }
}
