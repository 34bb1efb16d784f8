use async_trait::async_trait;
use scrub_core::{DocumentHandle, DocumentText, Error, Result};

use crate::handler::DocumentSource;

/// Form feed, emitted between pages by text-extraction tools.
pub const PAGE_BREAK: char = '\u{c}';

/// Reads UTF-8 text files, one page per form-feed-separated section.
pub struct TextDocumentSource;

impl TextDocumentSource {
    pub fn split_pages(content: &str) -> DocumentText {
        let content = content.strip_suffix(PAGE_BREAK).unwrap_or(content);
        DocumentText::from_pages(content.split(PAGE_BREAK).map(str::to_string).collect())
    }
}

#[async_trait]
impl DocumentSource for TextDocumentSource {
    async fn extract(&self, document: &DocumentHandle) -> Result<DocumentText> {
        let path = &document.path;
        if !tokio::fs::try_exists(path).await? {
            return Err(Error::DocumentNotFound(path.display().to_string()));
        }

        let content = tokio::fs::read_to_string(path).await?;
        let text = Self::split_pages(&content);
        tracing::debug!(
            document = %document.id,
            pages = text.pages().len(),
            "Extracted document text"
        );
        Ok(text)
    }
}
