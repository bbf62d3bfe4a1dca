//! Command-line arguments.

use std::path::PathBuf;

use baseline_analysis::report::ReportFormat;
use clap::{Parser, ValueEnum};

#[derive(Debug, Parser)]
#[command(name = "baseline-scan")]
#[command(about = "Report which web platform features a JS/CSS codebase uses and whether they are Baseline", version)]
pub struct Cli {
    /// Directory to scan
    pub root: PathBuf,

    /// Write the report to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Log every detection
    #[arg(short, long)]
    pub verbose: bool,

    /// `js` or `css` to keep one file type, anything else keeps one feature by name
    #[arg(short, long, value_name = "VALUE")]
    pub filter: Option<String>,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Config file (default: <ROOT>/baseline.toml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the detection catalog with each feature's status, then exit
    #[arg(long)]
    pub list_features: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Csv,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => ReportFormat::Json,
            OutputFormat::Csv => ReportFormat::Csv,
        }
    }
}
