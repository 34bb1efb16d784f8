use std::path::PathBuf;

use anyhow::Result;
use scrub_config::Config;
use scrub_core::DocumentHandle;

use super::{build_redactor, ensure_input};

pub async fn handle(
    config: &Config,
    file: PathBuf,
    entities: Option<PathBuf>,
    show_values: bool,
) -> Result<()> {
    ensure_input(&file)?;

    // Scanning never writes, the output directory is unused
    let redactor = build_redactor(config, entities.as_deref(), PathBuf::from(".")).await?;
    let scan = redactor.scan(&DocumentHandle::new(file)).await?;

    let report = if show_values {
        scan.report.with_mapping(scan.mapping)
    } else {
        scan.report
    };

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
