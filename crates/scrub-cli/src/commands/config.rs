use std::path::PathBuf;

use anyhow::Result;
use scrub_config::Config;

pub fn handle(config: &Config, explicit: Option<PathBuf>, path_only: bool) -> Result<()> {
    if path_only {
        let path = explicit.unwrap_or_else(Config::config_path);
        println!("{}", path.display());
        return Ok(());
    }

    print!("{}", render(config)?);
    Ok(())
}

fn render(config: &Config) -> Result<String> {
    Ok(toml::to_string_pretty(config)?)
}
