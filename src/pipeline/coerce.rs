//! Numeric coercion, the universal malformed-value policy
//!
//! Every cell that cannot be read as a number becomes null instead of failing
//! the run. Nulls are removed later, at finalization.

use polars::prelude::*;

use super::error::PipelineResult;
use super::schema::require_column;

/// Parse a single cell as a number.
///
/// Surrounding whitespace is ignored. `NaN` counts as missing, so the result
/// is either a real number or `None`.
pub fn parse_numeric(value: &str) -> Option<f64> {
    let parsed: f64 = value.trim().parse().ok()?;
    if parsed.is_nan() {
        None
    } else {
        Some(parsed)
    }
}

/// Convert a column to `Float64`, turning unparsable cells into nulls.
///
/// Numeric columns are only cast, so running this on a column it already
/// produced leaves the column unchanged.
pub fn col_to_num(mut df: DataFrame, name: &str) -> PipelineResult<DataFrame> {
    let column = require_column(&df, name)?;

    let values: Float64Chunked = if column.dtype().is_primitive_numeric() {
        let as_float = column.cast(&DataType::Float64)?;
        as_float
            .f64()?
            .into_iter()
            .map(|v| v.filter(|x| !x.is_nan()))
            .collect()
    } else {
        let as_text = column.cast(&DataType::String)?;
        as_text
            .str()?
            .into_iter()
            .map(|v| v.and_then(parse_numeric))
            .collect()
    };

    df.with_column(values.with_name(name.into()).into_series())?;
    Ok(df)
}
