//! Redaction engine
//!
//! Wires the detection and synthesis pipeline to the external collaborators:
//! text extraction, named-entity recognition and document mutation.

pub mod builder;
pub mod pipeline;

use std::sync::Arc;

use scrub_config::Config;
use scrub_core::{
    DetectedEntities, DocumentHandle, RedactionMapping, RedactionReport, Result,
};
use scrub_sources::{DocumentMutator, DocumentSource, EntityRecognizer};
use tracing::info;

pub use builder::RedactionMapBuilder;
pub use pipeline::{Pipeline, PipelineOutput};

/// Detection outcome for one document, before any mutation.
#[derive(Debug, Clone)]
pub struct ScanResult {
    pub detected: DetectedEntities,
    pub mapping: RedactionMapping,
    pub report: RedactionReport,
}

/// A rewritten document and the report of the run that produced it.
#[derive(Debug, Clone)]
pub struct RedactionOutcome {
    pub document: DocumentHandle,
    pub mapping: RedactionMapping,
    pub report: RedactionReport,
}

pub struct Redactor {
    pipeline: Pipeline,
    source: Arc<dyn DocumentSource>,
    recognizer: Arc<dyn EntityRecognizer>,
    mutator: Arc<dyn DocumentMutator>,
}

impl Redactor {
    pub fn new(
        config: &Config,
        source: Arc<dyn DocumentSource>,
        recognizer: Arc<dyn EntityRecognizer>,
        mutator: Arc<dyn DocumentMutator>,
    ) -> Result<Self> {
        Ok(Self {
            pipeline: Pipeline::new(config)?,
            source,
            recognizer,
            mutator,
        })
    }

    /// Extract, recognize, detect and synthesize without touching the document.
    pub async fn scan(&self, document: &DocumentHandle) -> Result<ScanResult> {
        // 1. Extract text
        let text = self.source.extract(document).await?;

        // 2. Recognize entities (skipped for documents without text)
        let spans = if text.is_blank() {
            Vec::new()
        } else {
            self.recognizer.recognize(&text.scan_text()).await?
        };

        // 3. Detect and synthesize
        let output = self.pipeline.run(&text, &spans);
        let report = RedactionReport::new(text.content_hash(), &output.detected, &output.mapping);

        info!(
            run = %report.run_id,
            document = %document.id,
            detected = output.detected.total(),
            registered = output.mapping.len(),
            "Scanned document"
        );

        Ok(ScanResult {
            detected: output.detected,
            mapping: output.mapping,
            report,
        })
    }

    /// Scan, then hand the mapping to the mutator.
    pub async fn redact(&self, document: &DocumentHandle) -> Result<RedactionOutcome> {
        let scan = self.scan(document).await?;
        let rewritten = self.mutator.apply(document, &scan.mapping).await?;

        info!(
            run = %scan.report.run_id,
            output = %rewritten.path.display(),
            "Redacted document"
        );

        Ok(RedactionOutcome {
            document: rewritten,
            mapping: scan.mapping,
            report: scan.report,
        })
    }
}
