use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Separator appended after every page when building the scan text.
pub const PAGE_SEPARATOR: &str = "\n";

/// Page-ordered plain text extracted from a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentText {
    pages: Vec<String>,
}

impl DocumentText {
    pub fn from_pages(pages: Vec<String>) -> Self {
        Self { pages }
    }

    /// Single-page document, mostly useful in tests.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            pages: vec![text.into()],
        }
    }

    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    /// Concatenated text the pattern detectors run over.
    ///
    /// Empty pages contribute nothing, not even a separator.
    pub fn scan_text(&self) -> String {
        let mut text = String::new();
        for page in self.pages.iter().filter(|p| !p.is_empty()) {
            text.push_str(page);
            text.push_str(PAGE_SEPARATOR);
        }
        text
    }

    pub fn is_blank(&self) -> bool {
        self.pages.iter().all(|p| p.trim().is_empty())
    }

    /// BLAKE3 hash of the scan text, safe to log in place of the content.
    pub fn content_hash(&self) -> String {
        blake3::hash(self.scan_text().as_bytes()).to_hex().to_string()
    }
}

/// Opaque reference to a source document, handed back to the mutation step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentHandle {
    pub id: String,
    pub path: PathBuf,
}

impl DocumentHandle {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            path: path.into(),
        }
    }

    pub fn file_name(&self) -> Option<&str> {
        self.path.file_name().and_then(|n| n.to_str())
    }
}

/// A labelled span reported by a named-entity recognizer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntitySpan {
    pub text: String,
    pub label: String,
}

impl EntitySpan {
    pub fn new(text: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            label: label.into(),
        }
    }
}
