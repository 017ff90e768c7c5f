// ABOUTME: Per-athlete raw metric values submitted for comparison
// ABOUTME: AthleteMetrics with optional identifier and raw sex indicator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioMS Normalizer Contributors

use super::dataset::CellValue;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Raw metric values for one athlete, as computed by the metrics service
///
/// The sex indicator is kept as a raw cell so that an unparseable value can
/// be told apart from an absent one.
///
/// # Examples
///
/// ```rust
/// use bioms_core::models::AthleteMetrics;
///
/// let athlete = AthleteMetrics::new()
///     .with_id("Ana Souza")
///     .with_sex(1_i64)
///     .with_value("BioMS_1", 42.0);
///
/// assert_eq!(athlete.value("BioMS_1"), Some(42.0));
/// assert_eq!(athlete.value("BioMS_5"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AthleteMetrics {
    /// Athlete identifier or display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Raw sex indicator (binary 0/1 when well formed)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sex: Option<CellValue>,
    /// Raw metric values keyed by metric name
    #[serde(default)]
    pub values: BTreeMap<String, f64>,
}

impl AthleteMetrics {
    /// Create an empty metrics record
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the athlete identifier
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the raw sex indicator
    #[must_use]
    pub fn with_sex(mut self, sex: impl Into<CellValue>) -> Self {
        self.sex = Some(sex.into());
        self
    }

    /// Set a metric value
    #[must_use]
    pub fn with_value(mut self, metric: impl Into<String>, value: f64) -> Self {
        self.values.insert(metric.into(), value);
        self
    }

    /// Finite value of a metric, if present
    #[must_use]
    pub fn value(&self, metric: &str) -> Option<f64> {
        self.values
            .get(metric)
            .copied()
            .filter(|value| value.is_finite())
    }

    /// Build from a flat row object such as one returned by the metrics service
    ///
    /// `id_key` and `sex_key` are lifted into their fields; every other key
    /// whose value coerces to a finite number becomes a metric value.
    #[must_use]
    pub fn from_json_object(object: &Map<String, Value>, id_key: &str, sex_key: &str) -> Self {
        let mut athlete = Self::new();

        for (key, value) in object {
            if key == id_key {
                athlete.id = match value {
                    Value::String(text) => Some(text.clone()),
                    Value::Null => None,
                    other => Some(other.to_string()),
                };
            } else if key == sex_key {
                athlete.sex = Some(CellValue::from(value));
            } else if let Some(number) = CellValue::from(value).as_finite() {
                athlete.values.insert(key.clone(), number);
            }
        }

        athlete
    }

    /// Parse a flat row object from JSON text
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid JSON or not an object
    pub fn from_json_str(json: &str, id_key: &str, sex_key: &str) -> AppResult<Self> {
        let value: Value = serde_json::from_str(json)?;
        let object = value
            .as_object()
            .ok_or_else(|| AppError::invalid_format("Athlete metrics must be a JSON object"))?;
        Ok(Self::from_json_object(object, id_key, sex_key))
    }
}
