//! Fixed column schema of the Play Store apps dataset

use polars::prelude::*;

use super::error::{PipelineError, PipelineResult};

pub const APP: &str = "App";
pub const CATEGORY: &str = "Category";
pub const RATING: &str = "Rating";
pub const REVIEWS: &str = "Reviews";
pub const SIZE: &str = "Size";
pub const INSTALLS: &str = "Installs";
pub const TYPE: &str = "Type";
pub const PRICE: &str = "Price";
pub const CONTENT_RATING: &str = "Content Rating";
pub const GENRES: &str = "Genres";
pub const LAST_UPDATED: &str = "Last Updated";
pub const CURRENT_VER: &str = "Current Ver";
pub const ANDROID_VER: &str = "Android Ver";

/// Columns produced by splitting "Genres"
pub const GENRE_PRINCIPAL: &str = "Genre Principal";
pub const GENRE_SECONDAIRE: &str = "Genre Secondaire";

/// Columns the raw input must carry, in file order.
pub const REQUIRED_COLUMNS: [&str; 13] = [
    APP,
    CATEGORY,
    RATING,
    REVIEWS,
    SIZE,
    INSTALLS,
    TYPE,
    PRICE,
    CONTENT_RATING,
    GENRES,
    LAST_UPDATED,
    CURRENT_VER,
    ANDROID_VER,
];

/// Columns of the cleaned output, in order.
pub const OUTPUT_COLUMNS: [&str; 11] = [
    APP,
    CATEGORY,
    RATING,
    REVIEWS,
    SIZE,
    INSTALLS,
    PRICE,
    CONTENT_RATING,
    GENRE_PRINCIPAL,
    GENRE_SECONDAIRE,
    LAST_UPDATED,
];

/// Look up a column, turning absence into a structural error.
pub fn require_column<'a>(df: &'a DataFrame, name: &str) -> PipelineResult<&'a Column> {
    df.column(name)
        .map_err(|_| PipelineError::missing_column(name))
}

/// Verify that every raw input column is present.
///
/// Reports the first absent column in file order.
pub fn validate_schema(df: &DataFrame) -> PipelineResult<()> {
    for name in REQUIRED_COLUMNS {
        require_column(df, name)?;
    }
    Ok(())
}

/// Read a column as text, casting non-string columns first.
pub fn string_values(df: &DataFrame, name: &str) -> PipelineResult<StringChunked> {
    let column = require_column(df, name)?;
    let as_text = column.cast(&DataType::String)?;
    Ok(as_text.str()?.clone())
}

/// Remove a column entirely.
pub fn drop_column(df: DataFrame, name: &str) -> PipelineResult<DataFrame> {
    require_column(&df, name)?;
    Ok(df.drop(name)?)
}
