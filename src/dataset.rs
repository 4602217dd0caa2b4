//! CSV loading and per-category distinct value derivation.
//!
//! A [`Dataset`] holds the loaded table together with the sorted distinct
//! values of every tracked category column. Schema inference is disabled on
//! load so numeric-looking labels (model version numbers, years) survive as
//! the exact strings that appear in the file.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use polars::prelude::*;

use crate::error::{Result, SankeyError};

/// A loaded CSV table plus the sorted distinct values of its category columns.
pub struct Dataset {
    df: DataFrame,
    distinct: BTreeMap<String, Vec<String>>,
}

impl Dataset {
    /// Load a CSV file and derive distinct values for the given categories.
    ///
    /// Every requested category must exist as a column; otherwise this fails
    /// with [`SankeyError::MissingColumn`].
    pub fn from_csv(path: &Path, categories: &[String]) -> Result<Self> {
        if !path.is_file() {
            return Err(SankeyError::InvalidPath(path.display().to_string()));
        }

        let df = LazyCsvReader::new(path)
            .with_has_header(true)
            // 0 disables inference: every cell is read as a string
            .with_infer_schema_length(Some(0))
            .finish()?
            .collect()?;

        Self::from_frame(df, categories)
    }

    /// Derive a dataset from an already loaded frame.
    pub fn from_frame(df: DataFrame, categories: &[String]) -> Result<Self> {
        let mut distinct = BTreeMap::new();
        for category in categories {
            let values = string_column(&df, category)?;
            let set: BTreeSet<String> = values.into_iter().flatten().collect();
            distinct.insert(category.clone(), set.into_iter().collect());
        }
        Ok(Self { df, distinct })
    }

    /// Number of rows in the table.
    pub fn height(&self) -> usize {
        self.df.height()
    }

    /// Sorted distinct values of a tracked category, or `None` for an
    /// untracked name.
    pub fn distinct_values(&self, category: &str) -> Option<&[String]> {
        self.distinct.get(category).map(Vec::as_slice)
    }

    /// Whether `category` is tracked by this dataset.
    pub fn is_tracked(&self, category: &str) -> bool {
        self.distinct.contains_key(category)
    }

    /// Per-row values of a tracked category column. `None` entries are empty
    /// cells.
    pub fn column_values(&self, category: &str) -> Result<Vec<Option<String>>> {
        if !self.is_tracked(category) {
            return Err(SankeyError::UnknownCategory(category.to_owned()));
        }
        string_column(&self.df, category)
    }
}

fn string_column(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let column = df
        .column(name)
        .map_err(|_| SankeyError::MissingColumn(name.to_owned()))?;
    let series = column.as_materialized_series();
    let series = if series.dtype().is_string() {
        series.clone()
    } else {
        series.cast(&DataType::String)?
    };
    let ca = series.str()?;
    Ok(ca.into_iter().map(|v| v.map(str::to_owned)).collect())
}
