//! Categorical encoding
//!
//! A [`CategoryMap`] assigns each distinct string of one column a code in
//! `0..k`, in the order values are first encountered. Maps are built, applied
//! and discarded per column: two columns never share one, so codes are not
//! comparable across columns.

use std::collections::HashMap;

use polars::prelude::*;

use super::coerce::col_to_num;
use super::error::PipelineResult;
use super::schema::string_values;

/// Mapping from distinct value to integer code, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryMap {
    values: Vec<String>,
    codes: HashMap<String, u32>,
}

impl CategoryMap {
    /// Build a map from values in row order. Nulls are not categories.
    pub fn from_values<'a, I>(values: I) -> Self
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        let mut map = CategoryMap::default();
        for value in values.into_iter().flatten() {
            if !map.codes.contains_key(value) {
                map.codes.insert(value.to_string(), map.values.len() as u32);
                map.values.push(value.to_string());
            }
        }
        map
    }

    /// Code for a value, if it was observed.
    pub fn code(&self, value: &str) -> Option<u32> {
        self.codes.get(value).copied()
    }

    /// Distinct values, indexed by their code.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Number of distinct categories (`k`).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Build the category map of a column from its current values.
pub fn dict_from_cat(df: &DataFrame, name: &str) -> PipelineResult<CategoryMap> {
    let values = string_values(df, name)?;
    Ok(CategoryMap::from_values(values.into_iter()))
}

/// Replace each cell with its code, then coerce the column to numeric.
///
/// Values absent from the map and nulls become null.
pub fn dict_to_float(mut df: DataFrame, name: &str, map: &CategoryMap) -> PipelineResult<DataFrame> {
    let values = string_values(&df, name)?;
    let codes: UInt32Chunked = values
        .into_iter()
        .map(|v| v.and_then(|s| map.code(s)))
        .collect();

    df.with_column(codes.with_name(name.into()).into_series())?;
    col_to_num(df, name)
}

/// Encode a column in place, returning the table and the number of categories.
///
/// The map itself is consumed here and never outlives the call.
pub fn encode_categorical(df: DataFrame, name: &str) -> PipelineResult<(DataFrame, usize)> {
    let map = dict_from_cat(&df, name)?;
    let categories = map.len();
    let df = dict_to_float(df, name, &map)?;
    Ok((df, categories))
}
