use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "scrub")]
#[command(about = "Replace PII in documents with synthetic look-alikes", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: per-user config directory)
    #[arg(long, global = true, env = "SCRUB_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Detect PII and print the run report as JSON
    Scan {
        /// Extracted text file (pages separated by form feeds)
        file: PathBuf,

        /// Recognizer spans as JSON: [{"text": "...", "label": "PER"}]
        #[arg(long)]
        entities: Option<PathBuf>,

        /// Include the original → replacement mapping in the report
        #[arg(long)]
        show_values: bool,
    },

    /// Write an anonymized copy of the document
    Redact {
        /// Extracted text file (pages separated by form feeds)
        file: PathBuf,

        /// Recognizer spans as JSON: [{"text": "...", "label": "PER"}]
        #[arg(long)]
        entities: Option<PathBuf>,

        /// Directory the anonymized copy is written to
        #[arg(long, default_value = ".")]
        output_dir: PathBuf,
    },

    /// Show the effective configuration
    Config {
        /// Print the config file location instead
        #[arg(long)]
        path: bool,
    },

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
