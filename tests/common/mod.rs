//! Shared test utilities and fixture generators

#![allow(dead_code)]

use polars::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

use playclean::pipeline::REQUIRED_COLUMNS;

/// One raw row, in `REQUIRED_COLUMNS` order.
pub type RawRow = [&'static str; 13];

/// A row every rule accepts.
pub fn well_formed_row() -> RawRow {
    [
        "Photo Editor & Candy Camera & Grid & ScrapBook",
        "ART_AND_DESIGN",
        "4.1",
        "159",
        "19M",
        "10,000+",
        "Free",
        "0",
        "Everyone",
        "Art & Design;Pretend Play",
        "January 7, 2018",
        "1.0.0",
        "4.0.3 and up",
    ]
}

/// A paid game with a kilobyte size.
pub fn paid_game_row() -> RawRow {
    [
        "Tiny Tower Defense",
        "GAME",
        "4.5",
        "2490",
        "14k",
        "50,000+",
        "Paid",
        "$4.99",
        "Teen",
        "Action;Adventure",
        "August 15, 2016",
        "2.3",
        "2.3 and up",
    ]
}

/// A row whose size is the "Varies with device" sentinel.
pub fn varies_size_row() -> RawRow {
    [
        "Shape Shifter",
        "FAMILY",
        "4.3",
        "967",
        "Varies with device",
        "100,000+",
        "Free",
        "0",
        "Everyone",
        "Casual;Brain Games",
        "June 20, 2018",
        "Varies with device",
        "Varies with device",
    ]
}

/// The shifted row of the public dataset: every value moved one column left.
pub fn shifted_row() -> RawRow {
    [
        "Life Made WI-Fi Touchscreen Photo Frame",
        "1.9",
        "19",
        "3.0M",
        "1,000+",
        "Free",
        "0",
        "Everyone",
        "",
        "February 11, 2018",
        "1.0.19",
        "4.0 and up",
        "",
    ]
}

/// Build a raw, all-text table from rows.
pub fn raw_dataframe(rows: &[RawRow]) -> DataFrame {
    let columns: Vec<Column> = REQUIRED_COLUMNS
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let values: Vec<&str> = rows.iter().map(|row| row[i]).collect();
            Column::new((*name).into(), values)
        })
        .collect();
    DataFrame::new(columns).unwrap()
}

/// Render rows as CSV text with a header, quoting every field.
pub fn raw_csv(rows: &[RawRow]) -> String {
    let mut text = REQUIRED_COLUMNS.join(",");
    text.push('\n');
    for row in rows {
        let fields: Vec<String> = row
            .iter()
            .map(|v| {
                if v.is_empty() {
                    String::new()
                } else {
                    format!("\"{}\"", v.replace('"', "\"\""))
                }
            })
            .collect();
        text.push_str(&fields.join(","));
        text.push('\n');
    }
    text
}

/// Create a temporary directory holding a raw CSV file
pub fn create_temp_raw_csv(rows: &[RawRow]) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("googleplaystore.csv");
    std::fs::write(&csv_path, raw_csv(rows)).unwrap();
    (temp_dir, csv_path)
}

/// Float value of a cell
pub fn f64_at(df: &DataFrame, column: &str, row: usize) -> Option<f64> {
    df.column(column).unwrap().f64().unwrap().get(row)
}

/// Date cell as days since the Unix epoch
pub fn days_at(df: &DataFrame, column: &str, row: usize) -> Option<i32> {
    let days = df.column(column).unwrap().cast(&DataType::Int32).unwrap();
    days.i32().unwrap().get(row)
}

/// Assert that a DataFrame has expected shape
pub fn assert_shape(df: &DataFrame, expected_rows: usize, expected_cols: usize) {
    let (rows, cols) = df.shape();
    assert_eq!(rows, expected_rows, "Row count mismatch: expected {}, got {}", expected_rows, rows);
    assert_eq!(cols, expected_cols, "Column count mismatch: expected {}, got {}", expected_cols, cols);
}

/// Assert that a DataFrame contains specific columns
pub fn assert_has_columns(df: &DataFrame, expected_cols: &[&str]) {
    let actual_cols: Vec<String> = df.get_column_names().iter().map(|s| s.to_string()).collect();
    for col in expected_cols {
        assert!(
            actual_cols.contains(&col.to_string()),
            "Missing expected column: '{}'. Actual columns: {:?}",
            col,
            actual_cols
        );
    }
}

/// Assert that a DataFrame does NOT contain specific columns
pub fn assert_missing_columns(df: &DataFrame, unexpected_cols: &[&str]) {
    let actual_cols: Vec<String> = df.get_column_names().iter().map(|s| s.to_string()).collect();
    for col in unexpected_cols {
        assert!(
            !actual_cols.contains(&col.to_string()),
            "Unexpected column still present: '{}'",
            col
        );
    }
}
