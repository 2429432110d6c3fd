//! Defines the command-line interface for the application.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "faq-splice",
    version,
    about = "Replace the literal FAQ arrays of a front-end tree with entries read from a file."
)]
pub struct Cli {
    /// Resolve the payload and every target relative to this directory.
    #[arg(short = 'C', long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// Read the payload path and targets from a TOML, YAML or JSON manifest.
    #[arg(short, long, value_name = "MANIFEST_PATH")]
    pub manifest: Option<PathBuf>,

    /// Read the replacement entries from this file. [default: temp_faq_replacement.txt]
    #[arg(short, long, value_name = "PAYLOAD_PATH")]
    pub payload: Option<PathBuf>,

    /// Fail instead of rewriting a target whose declaration was not found.
    #[arg(long)]
    pub strict: bool,

    /// Print the spliced targets without writing any files.
    #[arg(long, conflicts_with = "diff")]
    pub dry_run: bool,

    /// Show a diff of the pending changes instead of writing files.
    #[arg(long)]
    pub diff: bool,

    /// Print a per-target summary after the run.
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub report: Option<ReportFormat>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportFormat {
    /// One line per target.
    Text,
    /// A JSON document.
    Json,
}
