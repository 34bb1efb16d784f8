use std::path::PathBuf;

use anyhow::Result;
use scrub_config::Config;
use scrub_core::DocumentHandle;

use super::{build_redactor, ensure_input};

pub async fn handle(
    config: &Config,
    file: PathBuf,
    entities: Option<PathBuf>,
    output_dir: PathBuf,
) -> Result<()> {
    ensure_input(&file)?;

    let redactor = build_redactor(config, entities.as_deref(), output_dir).await?;
    let outcome = redactor.redact(&DocumentHandle::new(file)).await?;

    println!("✓ Redacted {} item(s)", outcome.report.registered_total());
    for count in outcome.report.counts.iter().filter(|c| c.registered > 0) {
        println!("  {}: {}", count.category, count.registered);
    }
    println!("  Output: {}", outcome.document.path.display());

    Ok(())
}
