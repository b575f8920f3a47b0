//! playclean: Play Store Dataset Normalization CLI
//!
//! Reads the raw apps table, normalizes every column into a numeric or date
//! value, drops incomplete rows and writes the cleaned table.

use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use console::style;

use playclean::cli::Cli;
use playclean::pipeline::{
    load_dataset, load_dataset_with_progress, run_pipeline_observed, save_dataset,
};
use playclean::report::{display_report, export_report};
use playclean::utils::{
    create_spinner, finish_with_success, finish_with_warning, print_banner, print_completion,
    print_config, print_info, print_rule_result, print_step_header, print_step_time,
    print_success,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.quiet {
        return run_quiet(&cli);
    }

    print_banner(env!("CARGO_PKG_VERSION"));
    print_config(&cli.input, &cli.output, cli.report.as_deref());

    // Step 1: Load raw dataset
    print_step_header(1, "Load Dataset");
    let step_start = Instant::now();
    let (df, rows, cols, memory_mb) = load_dataset_with_progress(&cli.input)?;

    println!("\n    {} Dataset Statistics:", style("✧").cyan());
    println!("      Rows: {}", rows);
    println!("      Columns: {}", cols);
    println!("      Estimated memory: {:.2} MB", memory_mb);
    print_step_time(step_start.elapsed());

    // Step 2: Normalize columns
    print_step_header(2, "Normalize Columns");
    let step_start = Instant::now();
    let (mut df, report) = run_pipeline_observed(df, print_rule_result)?;
    print_success(&format!(
        "{} of {} rows kept",
        report.final_rows, report.initial_rows
    ));
    print_step_time(step_start.elapsed());

    // Step 3: Save output
    print_step_header(3, "Save Results");
    let step_start = Instant::now();
    let spinner = create_spinner("Writing output file...");
    save_dataset(&mut df, &cli.output)?;
    if df.height() == 0 {
        finish_with_warning(
            &spinner,
            &format!("Saved empty table to {}", cli.output.display()),
        );
    } else {
        finish_with_success(&spinner, &format!("Saved to {}", cli.output.display()));
    }

    if let Some(report_path) = &cli.report {
        export_report(&report, &cli.input, &cli.output, report_path)?;
        print_info(&format!("Run report written to {}", report_path.display()));
    }
    print_step_time(step_start.elapsed());

    display_report(&report);
    print_completion();

    Ok(())
}

/// Same run without any terminal output
fn run_quiet(cli: &Cli) -> Result<()> {
    let df = load_dataset(&cli.input)?;
    let (mut df, report) = run_pipeline_observed(df, |_| {})?;
    save_dataset(&mut df, &cli.output)?;

    if let Some(report_path) = &cli.report {
        export_report(&report, &cli.input, &cli.output, report_path)?;
    }

    Ok(())
}
