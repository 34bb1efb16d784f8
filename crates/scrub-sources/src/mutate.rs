use std::path::PathBuf;

use async_trait::async_trait;
use scrub_core::{DocumentHandle, Error, RedactionMapping, Result};

use crate::handler::DocumentMutator;

/// Writes `anonymized_<file name>` into `output_dir` with every mapping key
/// replaced.
pub struct TextMutator {
    output_dir: PathBuf,
}

impl TextMutator {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_path(&self, document: &DocumentHandle) -> Result<PathBuf> {
        let name = document.file_name().ok_or_else(|| {
            Error::Collaborator(format!(
                "Document path has no file name: {}",
                document.path.display()
            ))
        })?;
        Ok(self.output_dir.join(format!("anonymized_{}", name)))
    }
}

#[async_trait]
impl DocumentMutator for TextMutator {
    async fn apply(
        &self,
        document: &DocumentHandle,
        mapping: &RedactionMapping,
    ) -> Result<DocumentHandle> {
        let content = tokio::fs::read_to_string(&document.path).await?;
        let output = self.output_path(document)?;

        tokio::fs::create_dir_all(&self.output_dir).await?;
        let redacted = mapping.apply(&content)?;
        tokio::fs::write(&output, redacted).await?;

        tracing::debug!(
            document = %document.id,
            replacements = mapping.len(),
            output = %output.display(),
            "Wrote redacted document"
        );
        Ok(DocumentHandle::new(output))
    }
}
