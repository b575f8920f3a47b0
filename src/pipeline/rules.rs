//! Per-column transform rules
//!
//! Each rule takes the table by value and returns the new table. Rules that
//! encode categories also report how many distinct categories they saw.

use polars::prelude::*;

use super::coerce::col_to_num;
use super::dates::{days_since_epoch, parse_last_updated};
use super::encoding::encode_categorical;
use super::error::{PipelineError, PipelineResult};
use super::schema::*;
use super::size::{expand_size, is_size_sentinel};

/// Rewrite every non-null cell of a string column.
fn rewrite_strings<F>(mut df: DataFrame, name: &str, rewrite: F) -> PipelineResult<DataFrame>
where
    F: Fn(&str) -> String,
{
    let values = string_values(&df, name)?;
    let rewritten: StringChunked = values.into_iter().map(|v| v.map(&rewrite)).collect();

    df.with_column(rewritten.with_name(name.into()).into_series())?;
    Ok(df)
}

/// Keep only the rows whose cell in `name` satisfies `keep`.
fn retain_rows<F>(df: DataFrame, name: &str, keep: F) -> PipelineResult<DataFrame>
where
    F: Fn(Option<&str>) -> bool,
{
    let values = string_values(&df, name)?;
    let mask: BooleanChunked = values.into_iter().map(keep).collect();
    Ok(df.filter(&mask)?)
}

/// "Category": label to code.
pub fn process_category(df: DataFrame) -> PipelineResult<(DataFrame, usize)> {
    encode_categorical(df, CATEGORY)
}

/// "Rating": already a decimal value, read as text.
pub fn process_rating(df: DataFrame) -> PipelineResult<DataFrame> {
    col_to_num(df, RATING)
}

/// "Reviews": digit strings to numbers.
pub fn process_reviews(df: DataFrame) -> PipelineResult<DataFrame> {
    col_to_num(df, REVIEWS)
}

/// "Size": drop sentinel rows, expand unit suffixes to a byte count.
///
/// Null sizes are kept here and removed at finalization.
pub fn process_size(df: DataFrame) -> PipelineResult<DataFrame> {
    let df = retain_rows(df, SIZE, |v| !v.is_some_and(is_size_sentinel))?;
    let df = rewrite_strings(df, SIZE, expand_size)?;
    col_to_num(df, SIZE)
}

/// "Installs": `"10,000+"` to `10000`.
pub fn process_installs(df: DataFrame) -> PipelineResult<DataFrame> {
    let df = rewrite_strings(df, INSTALLS, |v| v.replace(['+', ','], ""))?;
    col_to_num(df, INSTALLS)
}

/// "Type": removed, the free/paid signal is carried by "Price".
pub fn process_type(df: DataFrame) -> PipelineResult<DataFrame> {
    drop_column(df, TYPE)
}

/// "Price": `"$4.99"` to `4.99`.
///
/// Non-numeric leftovers such as `"Everyone"` become null.
pub fn process_price(df: DataFrame) -> PipelineResult<DataFrame> {
    let df = rewrite_strings(df, PRICE, |v| v.trim_start_matches('$').to_string())?;
    col_to_num(df, PRICE)
}

/// "Content Rating": label to code.
pub fn process_content_rating(df: DataFrame) -> PipelineResult<(DataFrame, usize)> {
    encode_categorical(df, CONTENT_RATING)
}

/// Split a raw genres value on its first `;`.
///
/// The secondary genre stops at the next `;`, if any.
pub fn split_genres(raw: &str) -> (&str, Option<&str>) {
    match raw.split_once(';') {
        Some((principal, rest)) => {
            let secondary = rest.split(';').next().unwrap_or(rest);
            (principal, Some(secondary))
        }
        None => (raw, None),
    }
}

/// "Genres": split into "Genre Principal" and "Genre Secondaire", each
/// encoded with its own category map.
///
/// Returns the category counts of the principal and secondary columns.
pub fn process_genres(df: DataFrame) -> PipelineResult<(DataFrame, usize, usize)> {
    let position = df
        .get_column_index(GENRES)
        .ok_or_else(|| PipelineError::missing_column(GENRES))?;
    let values = string_values(&df, GENRES)?;

    let (principal, secondary): (Vec<Option<&str>>, Vec<Option<&str>>) = values
        .into_iter()
        .map(|v| match v.map(split_genres) {
            Some((p, s)) => (Some(p), s),
            None => (None, None),
        })
        .unzip();

    let principal: StringChunked = principal.into_iter().collect();
    let secondary: StringChunked = secondary.into_iter().collect();

    let mut columns = df.get_columns().to_vec();
    columns[position] = Column::from(principal.with_name(GENRE_PRINCIPAL.into()).into_series());
    columns.insert(
        position + 1,
        Column::from(secondary.with_name(GENRE_SECONDAIRE.into()).into_series()),
    );
    let df = DataFrame::new(columns)?;

    let (df, principal_categories) = encode_categorical(df, GENRE_PRINCIPAL)?;
    let (df, secondary_categories) = encode_categorical(df, GENRE_SECONDAIRE)?;
    Ok((df, principal_categories, secondary_categories))
}

/// "Last Updated": `"January 7, 2018"` to a date.
pub fn process_last_updated(mut df: DataFrame) -> PipelineResult<DataFrame> {
    let values = string_values(&df, LAST_UPDATED)?;
    let days: Int32Chunked = values
        .into_iter()
        .map(|v| v.and_then(parse_last_updated).map(days_since_epoch))
        .collect();

    let dates = days
        .with_name(LAST_UPDATED.into())
        .into_series()
        .cast(&DataType::Date)?;
    df.with_column(dates)?;
    Ok(df)
}

/// "Current Ver": free-form, removed.
pub fn process_current_ver(df: DataFrame) -> PipelineResult<DataFrame> {
    drop_column(df, CURRENT_VER)
}

/// "Android Ver": free-form, removed.
pub fn process_android_ver(df: DataFrame) -> PipelineResult<DataFrame> {
    drop_column(df, ANDROID_VER)
}

/// Drop every row holding a null in any column.
pub fn finalize(df: DataFrame) -> PipelineResult<DataFrame> {
    let mut keep = vec![true; df.height()];
    for column in df.get_columns() {
        let present = column.as_materialized_series().is_not_null();
        for (slot, ok) in keep.iter_mut().zip(present.into_iter()) {
            if ok != Some(true) {
                *slot = false;
            }
        }
    }

    let mask: BooleanChunked = keep.into_iter().collect();
    Ok(df.filter(&mask)?)
}
