//! JSON export of a cleaning run

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use crate::pipeline::{CategoryCount, CleaningReport, PipelineStep};

/// Metadata about the cleaning run
#[derive(Serialize)]
pub struct RunMetadata {
    /// Timestamp of the run (ISO 8601 format)
    pub timestamp: String,
    /// playclean version
    pub playclean_version: String,
    /// Input file path
    pub input_file: String,
    /// Output file path
    pub output_file: String,
}

/// Row and column totals of the run
#[derive(Serialize)]
pub struct RunTotals {
    pub initial_rows: usize,
    pub final_rows: usize,
    pub rows_dropped: usize,
    pub initial_columns: usize,
    pub final_columns: usize,
}

/// A single step's effect on the table
#[derive(Serialize)]
pub struct StepExportEntry {
    pub step: PipelineStep,
    pub column: &'static str,
    pub action: &'static str,
    pub rows_before: usize,
    pub rows_after: usize,
    pub rows_dropped: usize,
    pub columns_after: usize,
    pub elapsed_ms: f64,
}

/// Complete run export with metadata
#[derive(Serialize)]
pub struct RunReportExport {
    pub metadata: RunMetadata,
    pub totals: RunTotals,
    pub steps: Vec<StepExportEntry>,
    pub categories: Vec<CategoryCount>,
}

impl RunReportExport {
    pub fn new(report: &CleaningReport, input: &Path, output: &Path) -> Self {
        let steps = report
            .steps
            .iter()
            .map(|record| StepExportEntry {
                step: record.step,
                column: record.step.name(),
                action: record.step.action(),
                rows_before: record.rows_before,
                rows_after: record.rows_after,
                rows_dropped: record.rows_dropped(),
                columns_after: record.columns_after,
                elapsed_ms: record.elapsed.as_secs_f64() * 1000.0,
            })
            .collect();

        Self {
            metadata: RunMetadata {
                timestamp: Utc::now().to_rfc3339(),
                playclean_version: env!("CARGO_PKG_VERSION").to_string(),
                input_file: input.display().to_string(),
                output_file: output.display().to_string(),
            },
            totals: RunTotals {
                initial_rows: report.initial_rows,
                final_rows: report.final_rows,
                rows_dropped: report.rows_dropped(),
                initial_columns: report.initial_columns,
                final_columns: report.final_columns,
            },
            steps,
            categories: report.categories.clone(),
        }
    }
}

/// Write the run report as pretty-printed JSON.
pub fn export_report(
    report: &CleaningReport,
    input: &Path,
    output: &Path,
    path: &Path,
) -> Result<()> {
    let export = RunReportExport::new(report, input, output);
    let json = serde_json::to_string_pretty(&export).context("Failed to serialize run report")?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write report file: {}", path.display()))?;
    Ok(())
}
