//! Pipeline driver - runs the column rules in their fixed order, then finalizes

use std::time::{Duration, Instant};

use polars::prelude::*;
use serde::Serialize;

use super::error::PipelineResult;
use super::rules::*;
use super::schema::*;

/// One step of the normalization pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PipelineStep {
    Category,
    Rating,
    Reviews,
    Size,
    Installs,
    Type,
    Price,
    ContentRating,
    Genres,
    LastUpdated,
    CurrentVer,
    AndroidVer,
    Finalize,
}

impl PipelineStep {
    /// Execution order. Finalization must stay last.
    pub const ALL: [PipelineStep; 13] = [
        PipelineStep::Category,
        PipelineStep::Rating,
        PipelineStep::Reviews,
        PipelineStep::Size,
        PipelineStep::Installs,
        PipelineStep::Type,
        PipelineStep::Price,
        PipelineStep::ContentRating,
        PipelineStep::Genres,
        PipelineStep::LastUpdated,
        PipelineStep::CurrentVer,
        PipelineStep::AndroidVer,
        PipelineStep::Finalize,
    ];

    /// Column the step operates on, or a label for finalization.
    pub fn name(&self) -> &'static str {
        match self {
            PipelineStep::Category => CATEGORY,
            PipelineStep::Rating => RATING,
            PipelineStep::Reviews => REVIEWS,
            PipelineStep::Size => SIZE,
            PipelineStep::Installs => INSTALLS,
            PipelineStep::Type => TYPE,
            PipelineStep::Price => PRICE,
            PipelineStep::ContentRating => CONTENT_RATING,
            PipelineStep::Genres => GENRES,
            PipelineStep::LastUpdated => LAST_UPDATED,
            PipelineStep::CurrentVer => CURRENT_VER,
            PipelineStep::AndroidVer => ANDROID_VER,
            PipelineStep::Finalize => "Drop incomplete rows",
        }
    }

    /// Short description of what the step does to the table.
    pub fn action(&self) -> &'static str {
        match self {
            PipelineStep::Category | PipelineStep::ContentRating => "encode categories",
            PipelineStep::Rating | PipelineStep::Reviews => "coerce to number",
            PipelineStep::Size => "drop sentinels, expand to bytes",
            PipelineStep::Installs => "strip '+' and ','",
            PipelineStep::Type | PipelineStep::CurrentVer | PipelineStep::AndroidVer => {
                "drop column"
            }
            PipelineStep::Price => "strip '$'",
            PipelineStep::Genres => "split and encode",
            PipelineStep::LastUpdated => "parse date",
            PipelineStep::Finalize => "remove rows with missing values",
        }
    }

    /// Apply the step, returning the new table and any category counts it produced.
    pub fn apply(&self, df: DataFrame) -> PipelineResult<(DataFrame, Vec<CategoryCount>)> {
        let single = |column: &str, categories: usize| {
            vec![CategoryCount {
                column: column.to_string(),
                categories,
            }]
        };

        Ok(match self {
            PipelineStep::Category => {
                let (df, k) = process_category(df)?;
                (df, single(CATEGORY, k))
            }
            PipelineStep::Rating => (process_rating(df)?, Vec::new()),
            PipelineStep::Reviews => (process_reviews(df)?, Vec::new()),
            PipelineStep::Size => (process_size(df)?, Vec::new()),
            PipelineStep::Installs => (process_installs(df)?, Vec::new()),
            PipelineStep::Type => (process_type(df)?, Vec::new()),
            PipelineStep::Price => (process_price(df)?, Vec::new()),
            PipelineStep::ContentRating => {
                let (df, k) = process_content_rating(df)?;
                (df, single(CONTENT_RATING, k))
            }
            PipelineStep::Genres => {
                let (df, principal, secondary) = process_genres(df)?;
                let mut counts = single(GENRE_PRINCIPAL, principal);
                counts.extend(single(GENRE_SECONDAIRE, secondary));
                (df, counts)
            }
            PipelineStep::LastUpdated => (process_last_updated(df)?, Vec::new()),
            PipelineStep::CurrentVer => (process_current_ver(df)?, Vec::new()),
            PipelineStep::AndroidVer => (process_android_ver(df)?, Vec::new()),
            PipelineStep::Finalize => (finalize(df)?, Vec::new()),
        })
    }
}

/// Number of distinct categories a categorical encoding produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub column: String,
    pub categories: usize,
}

/// Effect of one step on the table.
#[derive(Debug, Clone, Serialize)]
pub struct StepRecord {
    pub step: PipelineStep,
    pub rows_before: usize,
    pub rows_after: usize,
    pub columns_after: usize,
    #[serde(skip)]
    pub elapsed: Duration,
}

impl StepRecord {
    pub fn rows_dropped(&self) -> usize {
        self.rows_before.saturating_sub(self.rows_after)
    }
}

/// Record of a full pipeline run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CleaningReport {
    pub initial_rows: usize,
    pub initial_columns: usize,
    pub final_rows: usize,
    pub final_columns: usize,
    pub steps: Vec<StepRecord>,
    pub categories: Vec<CategoryCount>,
}

impl CleaningReport {
    pub fn rows_dropped(&self) -> usize {
        self.initial_rows.saturating_sub(self.final_rows)
    }

    /// Category count recorded for a column, if it was encoded.
    pub fn categories_for(&self, column: &str) -> Option<usize> {
        self.categories
            .iter()
            .find(|c| c.column == column)
            .map(|c| c.categories)
    }
}

/// Run every step in order and return the cleaned table.
pub fn run_pipeline(df: DataFrame) -> PipelineResult<DataFrame> {
    run_pipeline_with_report(df).map(|(df, _)| df)
}

/// Run every step in order, recording what each one did.
pub fn run_pipeline_with_report(df: DataFrame) -> PipelineResult<(DataFrame, CleaningReport)> {
    run_pipeline_observed(df, |_| {})
}

/// Run every step in order, calling `on_step` after each one completes.
pub fn run_pipeline_observed<F>(
    mut df: DataFrame,
    mut on_step: F,
) -> PipelineResult<(DataFrame, CleaningReport)>
where
    F: FnMut(&StepRecord),
{
    validate_schema(&df)?;

    let mut report = CleaningReport {
        initial_rows: df.height(),
        initial_columns: df.width(),
        ..Default::default()
    };

    for step in PipelineStep::ALL {
        let rows_before = df.height();
        let start = Instant::now();

        let (next, categories) = step.apply(df)?;
        df = next;

        let record = StepRecord {
            step,
            rows_before,
            rows_after: df.height(),
            columns_after: df.width(),
            elapsed: start.elapsed(),
        };
        on_step(&record);
        report.steps.push(record);
        report.categories.extend(categories);
    }

    report.final_rows = df.height();
    report.final_columns = df.width();
    Ok((df, report))
}
