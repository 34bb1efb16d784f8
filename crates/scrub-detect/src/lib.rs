//! PII candidate detection
//!
//! Pattern extraction over document text, merging with recognizer spans,
//! and resolution of overlapping categories.

pub mod disambiguator;
pub mod extractor;
pub mod filter;
pub mod merger;
pub mod patterns;

pub use disambiguator::{DigitClass, Disambiguator};
pub use extractor::CandidateExtractor;
pub use filter::NameFilter;
pub use merger::EntityMerger;
