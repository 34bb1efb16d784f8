use std::path::Path;

use async_trait::async_trait;
use scrub_core::{EntitySpan, Error, Result};

use crate::handler::EntityRecognizer;

/// Replays recognizer output computed ahead of time by an external model.
///
/// The JSON file holds `[{"text": "...", "label": "PER"}, ...]`. Only spans
/// whose text occurs in the scanned document are reported.
pub struct SpanFileRecognizer {
    spans: Vec<EntitySpan>,
}

impl SpanFileRecognizer {
    pub fn from_spans(spans: Vec<EntitySpan>) -> Self {
        Self { spans }
    }

    pub async fn load(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            Error::Collaborator(format!("Failed to read spans {}: {}", path.display(), e))
        })?;
        let spans: Vec<EntitySpan> = serde_json::from_str(&content)?;
        Ok(Self::from_spans(spans))
    }
}

#[async_trait]
impl EntityRecognizer for SpanFileRecognizer {
    async fn recognize(&self, text: &str) -> Result<Vec<EntitySpan>> {
        Ok(self
            .spans
            .iter()
            .filter(|span| !span.text.is_empty() && text.contains(&span.text))
            .cloned()
            .collect())
    }
}

/// Reports no spans; name detection falls back to patterns alone.
pub struct NoopRecognizer;

#[async_trait]
impl EntityRecognizer for NoopRecognizer {
    async fn recognize(&self, _text: &str) -> Result<Vec<EntitySpan>> {
        Ok(Vec::new())
    }
}
