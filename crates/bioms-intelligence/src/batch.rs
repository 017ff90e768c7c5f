// ABOUTME: Parallel team scoring against a global reference or the team itself
// ABOUTME: Builds per-athlete reports with short labels and per-metric Z rankings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioMS Normalizer Contributors

//! Team batch scoring
//!
//! Each athlete's comparison is independent, so the team is scored with a
//! rayon parallel iterator. Collection is indexed: report `i` belongs to
//! athlete `i`.

use crate::config::NormalizationConfig;
use crate::normalization::{ComparisonResult, NormalizationEngine};
use bioms_core::constants::metrics;
use bioms_core::errors::{AppError, AppResult};
use bioms_core::models::{AthleteMetrics, CellValue, ReferenceDataset};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::cmp::Ordering;
use std::iter;
use tracing::info;

/// Reference population used for a team batch
#[derive(Debug, Clone)]
pub enum ComparisonMode {
    /// Compare every athlete against an external reference (e.g. the elite database)
    Global(ReferenceDataset),
    /// Compare every athlete against the team's own values
    IntraGroup,
}

/// Scored athlete within a team batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AthleteReport {
    /// Athlete identifier, if supplied
    pub id: Option<String>,
    /// Short chart label
    pub label: String,
    /// Comparison outcome
    pub result: ComparisonResult,
}

impl AthleteReport {
    /// Flat map with `ID`, `Label` and the comparison keys
    #[must_use]
    pub fn to_flat_map(&self) -> Map<String, Value> {
        let mut map = self.result.to_flat_map();
        map.insert(
            metrics::ID_COLUMN.to_owned(),
            self.id.clone().map_or(Value::Null, Value::from),
        );
        map.insert("Label".to_owned(), Value::from(self.label.clone()));
        map
    }
}

/// One bar of a per-metric team ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRankEntry {
    /// Athlete label
    pub label: String,
    /// Z-score on the ranked metric
    pub z_score: f64,
}

/// Short label for charts: up to three uppercase initials
///
/// Names of two characters or fewer are used as-is.
#[must_use]
pub fn athlete_label(name: &str) -> String {
    if name.chars().count() <= 2 {
        return name.to_owned();
    }
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(3)
        .collect::<String>()
        .to_uppercase()
}

/// Reference dataset built from the team's own metric values
#[must_use]
pub fn team_reference(athletes: &[AthleteMetrics], config: &NormalizationConfig) -> ReferenceDataset {
    let mut reference = ReferenceDataset::new();
    for athlete in athletes {
        let sex = athlete.sex.clone().unwrap_or(CellValue::Missing);
        let values = athlete
            .values
            .iter()
            .map(|(metric, value)| (metric.clone(), CellValue::from(*value)));
        reference.push_row(iter::once((config.sex_column.clone(), sex)).chain(values));
    }
    reference
}

/// Score every athlete with an existing engine, preserving input order
#[must_use]
pub fn score_with_engine(
    engine: &NormalizationEngine,
    athletes: &[AthleteMetrics],
) -> Vec<AthleteReport> {
    athletes
        .par_iter()
        .enumerate()
        .map(|(index, athlete)| AthleteReport {
            id: athlete.id.clone(),
            label: athlete
                .id
                .as_deref()
                .map_or_else(|| format!("#{}", index + 1), athlete_label),
            result: engine.compare_athlete(athlete),
        })
        .collect()
}

/// Score a whole team
///
/// # Errors
///
/// Returns an error if the team is empty or the configuration is invalid
pub fn score_team(
    athletes: &[AthleteMetrics],
    mode: ComparisonMode,
    config: &NormalizationConfig,
) -> AppResult<Vec<AthleteReport>> {
    if athletes.is_empty() {
        return Err(AppError::invalid_input("No athletes to score"));
    }

    let intra_group = matches!(mode, ComparisonMode::IntraGroup);
    let reference = match mode {
        ComparisonMode::Global(reference) => reference,
        ComparisonMode::IntraGroup => team_reference(athletes, config),
    };
    let engine = NormalizationEngine::with_config(reference, config.clone())?;
    let reports = score_with_engine(&engine, athletes);

    info!(
        athletes = reports.len(),
        reference_rows = engine.reference().len(),
        intra_group,
        "Team batch scored"
    );
    Ok(reports)
}

/// Team ranking on one metric, highest Z first
///
/// Reports that did not score the metric are skipped; ties keep input order.
#[must_use]
pub fn rank_by_metric(reports: &[AthleteReport], metric: &str) -> Vec<MetricRankEntry> {
    let mut ranking: Vec<MetricRankEntry> = reports
        .iter()
        .filter_map(|report| {
            report
                .result
                .z_score(metric)
                .filter(|z_score| z_score.is_finite())
                .map(|z_score| MetricRankEntry {
                    label: report.label.clone(),
                    z_score,
                })
        })
        .collect();
    ranking.sort_by(|a, b| b.z_score.partial_cmp(&a.z_score).unwrap_or(Ordering::Equal));
    ranking
}

/// Check that a ranking metric is one the engine scores
///
/// # Errors
///
/// Returns a not-found error listing the configured metrics when it is not
pub fn require_configured_metric(config: &NormalizationConfig, metric: &str) -> AppResult<()> {
    if config.metrics.iter().any(|configured| configured == metric) {
        return Ok(());
    }
    Err(AppError::not_found(format!("Metric '{metric}'"))
        .with_resource_id(metric)
        .with_details(json!({ "configured_metrics": config.metrics })))
}
