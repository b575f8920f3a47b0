//! Output writer for the cleaned dataset

use anyhow::{Context, Result};
use polars::prelude::*;
use std::path::Path;

/// Save dataset to file (CSV or Parquet based on extension)
///
/// CSV output always carries a header row. Missing parent directories are created.
pub fn save_dataset(df: &mut DataFrame, path: &Path) -> Result<()> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    if extension != "csv" && extension != "parquet" {
        anyhow::bail!(
            "Unsupported output format: {}. Supported formats: csv, parquet",
            extension
        );
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }

    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;

    if extension == "csv" {
        let mut file = file;
        CsvWriter::new(&mut file)
            .include_header(true)
            .finish(df)
            .with_context(|| format!("Failed to write CSV file: {}", path.display()))?;
    } else {
        ParquetWriter::new(file)
            .finish(df)
            .with_context(|| format!("Failed to write Parquet file: {}", path.display()))?;
    }

    Ok(())
}
