// ABOUTME: Column-oriented reference dataset and loosely typed cell values
// ABOUTME: Tolerates missing, non-numeric, and infinite cells as delivered by the reference API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioMS Normalizer Contributors

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A single reference cell as delivered by upstream data sources
///
/// Reference rows come from a remote database and from coach uploads, so a
/// cell may hold a number, a numeric string, free text, a flag, or nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum CellValue {
    /// Numeric cell (may be NaN or infinite)
    Number(f64),
    /// Boolean flag
    Bool(bool),
    /// Text cell, numeric if it parses as a float
    Text(String),
    /// Absent or null cell
    #[default]
    Missing,
}

impl CellValue {
    /// Coerce the cell to a float
    ///
    /// Numeric strings are parsed after trimming, flags map to 1/0, anything
    /// else is `None`. The result may be NaN or infinite.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Bool(flag) => Some(if *flag { 1.0 } else { 0.0 }),
            Self::Text(text) => text.trim().parse::<f64>().ok(),
            Self::Missing => None,
        }
    }

    /// Coerce the cell to a finite float, dropping NaN and infinities
    #[must_use]
    pub fn as_finite(&self) -> Option<f64> {
        self.as_number().filter(|value| value.is_finite())
    }

    /// Whether the cell carries no value at all
    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for CellValue {
    #[allow(clippy::cast_precision_loss)] // Safe: sex indicators and small counts
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Missing, Into::into)
    }
}

impl From<&Value> for CellValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => Self::Missing,
            Value::Bool(flag) => Self::Bool(*flag),
            Value::Number(number) => number.as_f64().map_or(Self::Missing, Self::Number),
            Value::String(text) => Self::Text(text.clone()),
            // Nested structures never coerce to a number
            Value::Array(_) | Value::Object(_) => Self::Text(value.to_string()),
        }
    }
}

/// Column-oriented reference table
///
/// Every column has exactly `row_count` cells. A column exists as soon as any
/// row carries the key; rows lacking it hold [`CellValue::Missing`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceDataset {
    columns: BTreeMap<String, Vec<CellValue>>,
    row_count: usize,
}

impl ReferenceDataset {
    /// Create an empty dataset
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dataset from named columns
    ///
    /// # Errors
    ///
    /// Returns an error if the columns have different lengths
    pub fn from_columns<I, K>(columns: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = (K, Vec<CellValue>)>,
        K: Into<String>,
    {
        let mut dataset = Self::new();
        let mut expected_rows: Option<usize> = None;

        for (name, cells) in columns {
            let name = name.into();
            match expected_rows {
                Some(rows) if rows != cells.len() => {
                    return Err(AppError::invalid_format(format!(
                        "Column '{name}' has {} cells, expected {rows}",
                        cells.len()
                    ))
                    .with_resource_id(name));
                }
                _ => expected_rows = Some(cells.len()),
            }
            dataset.columns.insert(name, cells);
        }

        dataset.row_count = expected_rows.unwrap_or(0);
        Ok(dataset)
    }

    /// Build a dataset from a JSON array of row objects
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not an array or an element is not an object
    pub fn from_json_rows(value: &Value) -> AppResult<Self> {
        let rows = value.as_array().ok_or_else(|| {
            AppError::invalid_format("Reference data must be a JSON array of row objects")
        })?;

        let mut dataset = Self::new();
        for (index, row) in rows.iter().enumerate() {
            let object = row.as_object().ok_or_else(|| {
                AppError::invalid_format(format!("Reference row {index} is not a JSON object"))
            })?;
            dataset.push_row(
                object
                    .iter()
                    .map(|(key, cell)| (key.clone(), CellValue::from(cell))),
            );
        }
        Ok(dataset)
    }

    /// Parse a dataset from JSON text (an array of row objects)
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid JSON or not an array of objects
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_json_rows(&value)
    }

    /// Append one row, creating columns for unseen keys
    pub fn push_row<I, K>(&mut self, cells: I)
    where
        I: IntoIterator<Item = (K, CellValue)>,
        K: Into<String>,
    {
        for (name, cell) in cells {
            let column = self
                .columns
                .entry(name.into())
                .or_insert_with(|| vec![CellValue::Missing; self.row_count]);
            // Duplicate keys within a row overwrite the earlier cell
            if column.len() > self.row_count {
                column.truncate(self.row_count);
            }
            column.push(cell);
        }

        self.row_count += 1;
        for column in self.columns.values_mut() {
            column.resize(self.row_count, CellValue::Missing);
        }
    }

    /// Number of rows
    #[must_use]
    pub const fn len(&self) -> usize {
        self.row_count
    }

    /// Whether the dataset has no rows
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.row_count == 0
    }

    /// Cells of a column, if present
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&[CellValue]> {
        self.columns.get(name).map(Vec::as_slice)
    }
}
