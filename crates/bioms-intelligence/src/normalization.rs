// ABOUTME: Normalization engine scoring athletes against a bound reference dataset
// ABOUTME: Per-metric Z-scores and percentiles with neutral defaults, plus quadrant classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioMS Normalizer Contributors

//! # Normalization Engine
//!
//! Fail-open: every configured metric is always present in the result. A
//! metric that cannot be scored gets the neutral pair (Z=0, P=50) and a
//! [`NeutralReason`], so callers can still tell "unscorable" apart from
//! "exactly average".

use crate::cohort::{resolve_athlete_sex, Cohort, CohortBasis, CohortSelector};
use crate::config::{ConfigError, NormalizationConfig};
use crate::quadrant::{define_quadrant, Quadrant};
use crate::statistics::MetricStat;
use bioms_core::constants::{metrics, normalization};
use bioms_core::models::{AthleteMetrics, ReferenceDataset};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

/// Why a metric received the neutral score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NeutralReason {
    /// The athlete has no (finite) value for the metric
    MissingAthleteValue,
    /// The reference dataset has no column for the metric
    MissingColumn,
    /// No cohort value survived numeric cleaning
    EmptySample,
    /// The cohort shows no meaningful variation
    ZeroVariance,
    /// Mean, spread or Z-score overflowed the floating-point range
    NonFiniteStatistics,
}

/// How a metric score was obtained
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ScoreBasis {
    /// Scored against the cohort sample
    Computed {
        /// Values in the cleaned cohort sample
        sample_size: usize,
        /// Cohort mean
        mean: f64,
        /// Cohort sample standard deviation
        std_dev: f64,
    },
    /// Neutral placeholder
    Neutral {
        /// Why the metric could not be scored
        reason: NeutralReason,
    },
}

/// Normalized score of one metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricScore {
    /// Metric name
    pub metric: String,
    /// Z-score against the cohort
    pub z_score: f64,
    /// Percentile rank within the cohort (0-100)
    pub percentile: f64,
    /// Scoring provenance
    pub basis: ScoreBasis,
}

impl MetricScore {
    /// Neutral score (Z=0, P=50)
    #[must_use]
    pub fn neutral(metric: impl Into<String>, reason: NeutralReason) -> Self {
        Self {
            metric: metric.into(),
            z_score: normalization::NEUTRAL_Z_SCORE,
            percentile: normalization::NEUTRAL_PERCENTILE,
            basis: ScoreBasis::Neutral { reason },
        }
    }

    /// Whether this is a neutral placeholder
    #[must_use]
    pub const fn is_neutral(&self) -> bool {
        matches!(self.basis, ScoreBasis::Neutral { .. })
    }
}

/// Outcome of comparing one athlete against the reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// One score per configured metric, in configuration order
    pub scores: Vec<MetricScore>,
    /// Quadrant derived from the two axis metrics
    pub classification: Quadrant,
    /// How the cohort was selected
    pub cohort_basis: CohortBasis,
    /// Rows in the comparison cohort
    pub cohort_size: usize,
}

impl ComparisonResult {
    /// Score of a metric, if it was requested
    #[must_use]
    pub fn score(&self, metric: &str) -> Option<&MetricScore> {
        self.scores.iter().find(|score| score.metric == metric)
    }

    /// Z-score of a metric, if it was requested
    #[must_use]
    pub fn z_score(&self, metric: &str) -> Option<f64> {
        self.score(metric).map(|score| score.z_score)
    }

    /// Percentile of a metric, if it was requested
    #[must_use]
    pub fn percentile(&self, metric: &str) -> Option<f64> {
        self.score(metric).map(|score| score.percentile)
    }

    /// Flat `Z_<metric>` / `P_<metric>` / `Classification` map for report renderers
    #[must_use]
    pub fn to_flat_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        for score in &self.scores {
            map.insert(
                format!("{}{}", metrics::Z_PREFIX, score.metric),
                Value::from(score.z_score),
            );
            map.insert(
                format!("{}{}", metrics::P_PREFIX, score.metric),
                Value::from(score.percentile),
            );
        }
        map.insert(
            metrics::CLASSIFICATION_KEY.to_owned(),
            Value::from(self.classification.label()),
        );
        map
    }
}

/// Scores athletes against a bound reference dataset
///
/// Holds no per-call state, so one engine can score many athletes from many
/// threads against the same immutable reference.
#[derive(Debug, Clone)]
pub struct NormalizationEngine {
    reference: ReferenceDataset,
    config: NormalizationConfig,
    selector: CohortSelector,
}

impl NormalizationEngine {
    /// Bind a reference dataset with the default configuration
    #[must_use]
    pub fn new(reference: ReferenceDataset) -> Self {
        let config = NormalizationConfig::default();
        let selector = CohortSelector::new(config.sex_column.clone(), config.min_cohort_size);
        Self {
            reference,
            config,
            selector,
        }
    }

    /// Bind a reference dataset with a validated configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation
    pub fn with_config(
        reference: ReferenceDataset,
        config: NormalizationConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let selector = CohortSelector::new(config.sex_column.clone(), config.min_cohort_size);
        Ok(Self {
            reference,
            config,
            selector,
        })
    }

    /// Bound reference dataset
    #[must_use]
    pub const fn reference(&self) -> &ReferenceDataset {
        &self.reference
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &NormalizationConfig {
        &self.config
    }

    /// Comparison cohort for an athlete
    #[must_use]
    pub fn select_cohort(&self, athlete: &AthleteMetrics) -> Cohort<'_> {
        let sex = resolve_athlete_sex(athlete.sex.as_ref());
        self.selector.select(&self.reference, sex)
    }

    /// Compare an athlete against the reference
    ///
    /// Never fails: unscorable metrics get the neutral score.
    #[must_use]
    pub fn compare_athlete(&self, athlete: &AthleteMetrics) -> ComparisonResult {
        let cohort = self.select_cohort(athlete);

        let scores: Vec<MetricScore> = self
            .config
            .metrics
            .iter()
            .map(|metric| self.score_metric(&cohort, metric, athlete.value(metric)))
            .collect();

        let axis_z = |metric: &str| {
            scores
                .iter()
                .find(|score| score.metric == metric)
                .map(|score| score.z_score)
        };
        let classification = define_quadrant(
            axis_z(&self.config.quadrant.structural_metric),
            axis_z(&self.config.quadrant.power_metric),
            &self.config.quadrant,
        );

        ComparisonResult {
            classification,
            cohort_basis: cohort.basis(),
            cohort_size: cohort.len(),
            scores,
        }
    }

    /// Score one metric against the cohort
    fn score_metric(&self, cohort: &Cohort<'_>, metric: &str, value: Option<f64>) -> MetricScore {
        let Some(value) = value else {
            return neutral(metric, NeutralReason::MissingAthleteValue);
        };
        let Some(cells) = cohort.cells(metric) else {
            return neutral(metric, NeutralReason::MissingColumn);
        };
        let Some(stat) = MetricStat::from_cells(cells) else {
            return neutral(metric, NeutralReason::EmptySample);
        };
        if !stat.mean.is_finite() || stat.std_dev.is_some_and(|std_dev| !std_dev.is_finite()) {
            return neutral(metric, NeutralReason::NonFiniteStatistics);
        }
        if stat.is_degenerate(self.config.zero_variance_threshold) {
            return neutral(metric, NeutralReason::ZeroVariance);
        }
        let z_score = stat.z_score(value);
        if !z_score.is_finite() {
            return neutral(metric, NeutralReason::NonFiniteStatistics);
        }

        MetricScore {
            metric: metric.to_owned(),
            z_score,
            percentile: stat.percentile(value),
            basis: ScoreBasis::Computed {
                sample_size: stat.sample_size,
                mean: stat.mean,
                std_dev: stat.std_dev.unwrap_or_default(),
            },
        }
    }
}

fn neutral(metric: &str, reason: NeutralReason) -> MetricScore {
    debug!(metric, ?reason, "Metric not scorable, using neutral score");
    MetricScore::neutral(metric, reason)
}
