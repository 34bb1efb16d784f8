pub mod handler;
pub mod mutate;
pub mod spans;
pub mod text;

pub use handler::{DocumentMutator, DocumentSource, EntityRecognizer};
pub use mutate::TextMutator;
pub use spans::{NoopRecognizer, SpanFileRecognizer};
pub use text::{PAGE_BREAK, TextDocumentSource};
