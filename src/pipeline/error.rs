//! Error types for the normalization pipeline.
//!
//! Cell-level parse failures are never errors here: they turn into nulls and
//! are removed at finalization. The only fatal condition a rule can raise is a
//! structural one, where a column it operates on is absent from the table.

use polars::prelude::PolarsError;
use thiserror::Error;

/// Errors raised while normalizing the apps table.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A column required by a rule is not present in the table.
    ///
    /// Every rule assumes its input column exists, so the run is aborted.
    #[error("required column '{column}' not found in dataset")]
    MissingColumn {
        /// Name of the absent column
        column: String,
    },

    /// Underlying dataframe operation failed.
    #[error("dataframe error: {0}")]
    Polars(#[from] PolarsError),
}

impl PipelineError {
    pub fn missing_column(column: &str) -> Self {
        PipelineError::MissingColumn {
            column: column.to_string(),
        }
    }
}

/// Convenience result type for pipeline rules.
pub type PipelineResult<T> = Result<T, PipelineError>;
