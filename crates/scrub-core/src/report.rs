use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::candidate::DetectedEntities;
use crate::category::Category;
use crate::mapping::RedactionMapping;

/// Per-category outcome of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: Category,
    /// Distinct candidates after disambiguation.
    pub detected: usize,
    /// Entries this category owns in the final mapping.
    pub registered: usize,
}

/// Summary of one redaction run. Carries no PII unless a mapping is attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedactionReport {
    pub run_id: String,
    pub content_hash: String,
    #[serde(with = "time::serde::timestamp")]
    pub generated_at: OffsetDateTime,
    pub counts: Vec<CategoryCount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mapping: Option<RedactionMapping>,
}

impl RedactionReport {
    pub fn new(content_hash: String, detected: &DetectedEntities, mapping: &RedactionMapping) -> Self {
        let counts = Category::PRECEDENCE
            .iter()
            .map(|&category| CategoryCount {
                category,
                detected: detected.get(category).len(),
                registered: mapping.by_category(category).count(),
            })
            .collect();

        Self {
            run_id: uuid::Uuid::new_v4().to_string(),
            content_hash,
            generated_at: OffsetDateTime::now_utc(),
            counts,
            mapping: None,
        }
    }

    pub fn with_mapping(mut self, mapping: RedactionMapping) -> Self {
        self.mapping = Some(mapping);
        self
    }

    pub fn registered_total(&self) -> usize {
        self.counts.iter().map(|c| c.registered).sum()
    }

    pub fn count(&self, category: Category) -> Option<&CategoryCount> {
        self.counts.iter().find(|c| c.category == category)
    }
}
