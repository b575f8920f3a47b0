//! Cleaning summary report display

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::pipeline::CleaningReport;

/// Render the per-step table of a run.
pub fn build_steps_table(report: &CleaningReport) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Step").add_attribute(Attribute::Bold),
        Cell::new("Action").add_attribute(Attribute::Bold),
        Cell::new("Rows Dropped").add_attribute(Attribute::Bold),
        Cell::new("Columns").add_attribute(Attribute::Bold),
    ]);

    for record in &report.steps {
        let dropped = record.rows_dropped();
        table.add_row(vec![
            Cell::new(record.step.name()),
            Cell::new(record.step.action()),
            Cell::new(dropped).fg(if dropped == 0 {
                Color::White
            } else {
                Color::Red
            }),
            Cell::new(record.columns_after),
        ]);
    }

    table
}

/// Print the summary of a pipeline run.
pub fn display_report(report: &CleaningReport) {
    println!();
    println!(
        "    {} {}",
        style("📋").cyan(),
        style("CLEANING SUMMARY").white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
    println!();

    let mut totals = Table::new();
    totals.load_preset(UTF8_FULL_CONDENSED);
    totals.set_header(vec![
        Cell::new("Metric").add_attribute(Attribute::Bold),
        Cell::new("Value").add_attribute(Attribute::Bold),
    ]);
    totals.add_row(vec![
        Cell::new("📁 Input Rows"),
        Cell::new(report.initial_rows),
    ]);
    totals.add_row(vec![
        Cell::new("🗑️  Rows Dropped"),
        Cell::new(report.rows_dropped()).fg(if report.rows_dropped() == 0 {
            Color::White
        } else {
            Color::Red
        }),
    ]);
    totals.add_row(vec![
        Cell::new("✅ Output Rows"),
        Cell::new(report.final_rows)
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
    ]);
    totals.add_row(vec![
        Cell::new("📐 Columns"),
        Cell::new(format!("{} → {}", report.initial_columns, report.final_columns)),
    ]);

    let kept_pct = if report.initial_rows > 0 {
        (report.final_rows as f64 / report.initial_rows as f64) * 100.0
    } else {
        0.0
    };
    let color = if kept_pct > 90.0 {
        Color::Green
    } else if kept_pct > 70.0 {
        Color::Yellow
    } else {
        Color::Red
    };
    totals.add_row(vec![
        Cell::new("📉 Rows Kept"),
        Cell::new(format!("{:.1}%", kept_pct))
            .fg(color)
            .add_attribute(Attribute::Bold),
    ]);

    // Indent the tables
    for line in totals.to_string().lines() {
        println!("    {}", line);
    }
    println!();
    for line in build_steps_table(report).to_string().lines() {
        println!("    {}", line);
    }

    if !report.categories.is_empty() {
        println!();
        println!(
            "    {} {}",
            style("🏷️").cyan(),
            style("ENCODED CATEGORIES").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        for count in &report.categories {
            println!(
                "      {} {}: {}",
                style("•").dim(),
                count.column,
                style(count.categories).yellow()
            );
        }
    }
}
