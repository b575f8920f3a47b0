//! Command-line argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

/// Default location of the raw dataset
pub const DEFAULT_INPUT: &str = "data/googleplaystore.csv";

/// Default location of the cleaned dataset
pub const DEFAULT_OUTPUT: &str = "data/clean_dataset_googleplaystore.csv";

/// playclean - Normalize the Play Store apps dataset into a fully numeric table
#[derive(Parser, Debug)]
#[command(name = "playclean")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Raw dataset path (CSV)
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Cleaned dataset path (CSV or Parquet, determined by extension)
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Optional JSON file receiving a per-step report of the run
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Suppress banner, step output and summary tables
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}
