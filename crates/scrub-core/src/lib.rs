//! Core domain models for scrub
//!
//! This crate contains:
//! - PII categories and their precedence order
//! - Candidate sets produced by detection
//! - Document text and handles exchanged with collaborators
//! - The redaction mapping and run report

pub mod candidate;
pub mod category;
pub mod document;
pub mod error;
pub mod mapping;
pub mod report;

pub use candidate::{CandidateEntity, CandidateSet, DetectedEntities, RawCandidates};
pub use category::Category;
pub use document::{DocumentHandle, DocumentText, EntitySpan, PAGE_SEPARATOR};
pub use error::{Error, Result};
pub use mapping::{MappingEntry, RedactionMapping};
pub use report::{CategoryCount, RedactionReport};
