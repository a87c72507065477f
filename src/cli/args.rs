// src/cli/args.rs
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Reference text output: per-round tables plus route lines
    #[default]
    Text,
    /// Final route summary as a JSON array, nothing else on stdout
    Json,
}

#[derive(Parser)]
#[command(
    name = "dvroute",
    version,
    about = "Distance-vector routing protocol simulator"
)]
pub struct Cli {
    /// Scenario file; reads stdin when omitted
    pub file: Option<PathBuf>,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Suppress per-round tables (text mode)
    #[arg(long, short)]
    pub quiet: bool,
}
