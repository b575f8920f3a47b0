//! Tests for run report export and summary tables

use playclean::pipeline::run_pipeline_with_report;
use playclean::report::{build_steps_table, export_report, RunReportExport};
use std::path::Path;
use tempfile::TempDir;

#[path = "common/mod.rs"]
mod common;

use common::*;

#[test]
fn test_export_contains_metadata_and_steps() {
    let df = raw_dataframe(&[well_formed_row(), varies_size_row()]);
    let (_, report) = run_pipeline_with_report(df).unwrap();

    let temp_dir = TempDir::new().unwrap();
    let json_path = temp_dir.path().join("report.json");
    export_report(
        &report,
        Path::new("data/googleplaystore.csv"),
        Path::new("data/clean.csv"),
        &json_path,
    )
    .unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();

    assert_eq!(json["metadata"]["input_file"], "data/googleplaystore.csv");
    assert_eq!(json["metadata"]["output_file"], "data/clean.csv");
    assert!(json["metadata"]["timestamp"].is_string());
    assert_eq!(json["totals"]["initial_rows"], 2);
    assert_eq!(json["totals"]["final_rows"], 1);
    assert_eq!(json["totals"]["rows_dropped"], 1);

    let steps = json["steps"].as_array().unwrap();
    assert_eq!(steps[0]["step"], "Category");
    assert_eq!(steps[3]["column"], "Size");
    assert_eq!(steps[3]["rows_dropped"], 1);
    assert_eq!(steps[12]["step"], "Finalize");
}

#[test]
fn test_export_lists_category_counts() {
    let df = raw_dataframe(&[well_formed_row(), paid_game_row()]);
    let (_, report) = run_pipeline_with_report(df).unwrap();

    let export = RunReportExport::new(&report, Path::new("in.csv"), Path::new("out.csv"));
    let columns: Vec<&str> = export.categories.iter().map(|c| c.column.as_str()).collect();

    assert_eq!(
        columns,
        vec!["Category", "Content Rating", "Genre Principal", "Genre Secondaire"]
    );
    assert!(export.categories.iter().all(|c| c.categories == 2));
}

#[test]
fn test_steps_table_has_row_per_step() {
    let df = raw_dataframe(&[well_formed_row()]);
    let (_, report) = run_pipeline_with_report(df).unwrap();

    let table = build_steps_table(&report);
    let rendered = table.to_string();

    assert!(rendered.contains("Last Updated"));
    assert!(rendered.contains("Drop incomplete rows"));
    assert!(rendered.contains("strip '$'"));
}
