pub mod config;
pub mod redact;
pub mod scan;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use scrub_config::Config;
use scrub_engine::Redactor;
use scrub_sources::{
    EntityRecognizer, NoopRecognizer, SpanFileRecognizer, TextDocumentSource, TextMutator,
};

/// Wire the plain-text collaborators around the pipeline
pub async fn build_redactor(
    config: &Config,
    entities: Option<&Path>,
    output_dir: PathBuf,
) -> Result<Redactor> {
    let recognizer: Arc<dyn EntityRecognizer> = match entities {
        Some(path) => Arc::new(SpanFileRecognizer::load(path).await?),
        None => Arc::new(NoopRecognizer),
    };

    Ok(Redactor::new(
        config,
        Arc::new(TextDocumentSource),
        recognizer,
        Arc::new(TextMutator::new(output_dir)),
    )?)
}

/// Fail early with a readable message when the input is missing
pub fn ensure_input(file: &Path) -> Result<()> {
    if !file.is_file() {
        anyhow::bail!("Input file '{}' does not exist or is not a file", file.display());
    }
    Ok(())
}
