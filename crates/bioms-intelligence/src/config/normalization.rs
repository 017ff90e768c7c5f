// ABOUTME: Normalization engine configuration with environment overrides
// ABOUTME: Metric set, cohort size floor, variance floor, quadrant axes, and score band cut points
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioMS Normalizer Contributors

//! Normalization Configuration
//!
//! Replaces the engine's magic numbers with injected, independently testable
//! values. Defaults reproduce the reference deployment exactly.

use super::error::ConfigError;
use bioms_core::constants::{metrics, normalization, quadrant, score_bands};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::env;
use std::str::FromStr;

/// Top-level configuration for the normalization engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizationConfig {
    /// Metrics scored for every athlete, in report order
    pub metrics: Vec<String>,
    /// Reference column holding the sex indicator
    pub sex_column: String,
    /// Filtered cohorts below this size fall back to the full reference
    pub min_cohort_size: usize,
    /// Standard deviations at or below this are treated as zero
    pub zero_variance_threshold: f64,
    /// Quadrant classifier settings
    pub quadrant: QuadrantConfig,
    /// Z-score interpretation bands
    pub bands: ScoreBandConfig,
}

/// Axis metrics and cut points for the quadrant classifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuadrantConfig {
    /// Metric on the structural axis
    pub structural_metric: String,
    /// Metric on the power/speed axis
    pub power_metric: String,
    /// Z threshold separating the upper quadrants
    pub cut: f64,
    /// Both axes below this Z mark the athlete as at risk
    pub at_risk_cut: f64,
}

/// Lower bounds of the five Z-score interpretation bands
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBandConfig {
    /// Inclusive lower bound of the elite band
    pub elite_min: f64,
    /// Exclusive lower bound of the high band
    pub high_above: f64,
    /// Inclusive lower bound of the normal band
    pub normal_min: f64,
    /// Exclusive lower bound of the alert band
    pub alert_above: f64,
}

impl Default for NormalizationConfig {
    fn default() -> Self {
        Self {
            metrics: metrics::DEFAULT_METRICS
                .iter()
                .map(|&name| name.to_owned())
                .collect(),
            sex_column: metrics::SEX_COLUMN.to_owned(),
            min_cohort_size: normalization::MIN_COHORT_SIZE,
            zero_variance_threshold: normalization::ZERO_VARIANCE_THRESHOLD,
            quadrant: QuadrantConfig::default(),
            bands: ScoreBandConfig::default(),
        }
    }
}

impl Default for QuadrantConfig {
    fn default() -> Self {
        Self {
            structural_metric: quadrant::STRUCTURAL_AXIS.to_owned(),
            power_metric: quadrant::POWER_AXIS.to_owned(),
            cut: quadrant::CUT,
            at_risk_cut: quadrant::AT_RISK_CUT,
        }
    }
}

impl Default for ScoreBandConfig {
    fn default() -> Self {
        Self {
            elite_min: score_bands::ELITE_MIN,
            high_above: score_bands::HIGH_ABOVE,
            normal_min: score_bands::NORMAL_MIN,
            alert_above: score_bands::ALERT_ABOVE,
        }
    }
}

/// Parse an environment variable, falling back when unset or malformed
fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

impl NormalizationConfig {
    /// Load configuration from environment
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let metrics = env::var("BIOMS_METRICS")
            .ok()
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(str::to_owned)
                    .collect::<Vec<_>>()
            })
            .filter(|names| !names.is_empty())
            .unwrap_or(defaults.metrics);

        Self {
            metrics,
            sex_column: env::var("BIOMS_SEX_COLUMN")
                .ok()
                .filter(|column| !column.trim().is_empty())
                .unwrap_or(defaults.sex_column),
            min_cohort_size: env_or("BIOMS_MIN_COHORT_SIZE", defaults.min_cohort_size),
            zero_variance_threshold: env_or(
                "BIOMS_ZERO_VARIANCE_THRESHOLD",
                defaults.zero_variance_threshold,
            ),
            quadrant: QuadrantConfig::from_env(),
            bands: ScoreBandConfig::from_env(),
        }
    }

    /// Validate configuration values
    ///
    /// Axis metrics outside the metric set are accepted; the classifier then
    /// reports an undefined quadrant.
    ///
    /// # Errors
    ///
    /// Returns an error if any value is empty, out of range, or misordered
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.metrics.is_empty() {
            return Err(ConfigError::MissingField("metrics"));
        }
        let mut seen = HashSet::new();
        for metric in &self.metrics {
            if metric.trim().is_empty() {
                return Err(ConfigError::MissingField("metric name"));
            }
            if !seen.insert(metric.as_str()) {
                return Err(ConfigError::DuplicateMetric(metric.clone()));
            }
        }
        if self.sex_column.trim().is_empty() {
            return Err(ConfigError::MissingField("sex_column"));
        }
        if self.min_cohort_size == 0 {
            return Err(ConfigError::InvalidRange(
                "min_cohort_size must be at least 1",
            ));
        }
        if !self.zero_variance_threshold.is_finite() || self.zero_variance_threshold < 0.0 {
            return Err(ConfigError::InvalidRange(
                "zero_variance_threshold must be a finite, non-negative number",
            ));
        }
        self.quadrant.validate()?;
        self.bands.validate()
    }
}

impl QuadrantConfig {
    /// Load quadrant settings from environment
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            structural_metric: env::var("BIOMS_QUADRANT_STRUCTURAL_METRIC")
                .unwrap_or(defaults.structural_metric),
            power_metric: env::var("BIOMS_QUADRANT_POWER_METRIC")
                .unwrap_or(defaults.power_metric),
            cut: env_or("BIOMS_QUADRANT_CUT", defaults.cut),
            at_risk_cut: env_or("BIOMS_QUADRANT_AT_RISK_CUT", defaults.at_risk_cut),
        }
    }

    /// Validate cut points
    ///
    /// # Errors
    ///
    /// Returns an error if a cut is non-finite or the at-risk cut exceeds the main cut
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.cut.is_finite() || !self.at_risk_cut.is_finite() {
            return Err(ConfigError::InvalidRange("quadrant cuts must be finite"));
        }
        if self.at_risk_cut > self.cut {
            return Err(ConfigError::InvalidOrdering(
                "quadrant at_risk_cut must not exceed cut",
            ));
        }
        Ok(())
    }
}

impl ScoreBandConfig {
    /// Load band boundaries from environment
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            elite_min: env_or("BIOMS_BAND_ELITE_MIN", defaults.elite_min),
            high_above: env_or("BIOMS_BAND_HIGH_ABOVE", defaults.high_above),
            normal_min: env_or("BIOMS_BAND_NORMAL_MIN", defaults.normal_min),
            alert_above: env_or("BIOMS_BAND_ALERT_ABOVE", defaults.alert_above),
        }
    }

    /// Validate that band boundaries descend from elite to alert
    ///
    /// # Errors
    ///
    /// Returns an error if a boundary is non-finite or the order is broken
    pub fn validate(&self) -> Result<(), ConfigError> {
        let bounds = [
            self.elite_min,
            self.high_above,
            self.normal_min,
            self.alert_above,
        ];
        if bounds.iter().any(|bound| !bound.is_finite()) {
            return Err(ConfigError::InvalidRange("score band bounds must be finite"));
        }
        if bounds.windows(2).any(|pair| pair[0] < pair[1]) {
            return Err(ConfigError::InvalidOrdering(
                "score band bounds must descend from elite to alert",
            ));
        }
        Ok(())
    }
}
