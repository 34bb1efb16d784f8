//! Collaborator traits around the redaction pipeline

use async_trait::async_trait;
use scrub_core::{DocumentHandle, DocumentText, EntitySpan, RedactionMapping, Result};

/// Extracts page-ordered plain text from a document
#[async_trait]
pub trait DocumentSource: Send + Sync {
    async fn extract(&self, document: &DocumentHandle) -> Result<DocumentText>;
}

/// Named-entity recognition over extracted text
#[async_trait]
pub trait EntityRecognizer: Send + Sync {
    /// Every (span text, label) pair found in `text`, any label
    async fn recognize(&self, text: &str) -> Result<Vec<EntitySpan>>;
}

/// Rewrites a document with every mapping key replaced by its value
#[async_trait]
pub trait DocumentMutator: Send + Sync {
    /// Returns a handle to the newly written document
    async fn apply(
        &self,
        document: &DocumentHandle,
        mapping: &RedactionMapping,
    ) -> Result<DocumentHandle>;
}
