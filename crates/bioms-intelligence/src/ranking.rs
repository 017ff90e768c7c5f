// ABOUTME: Universal Z-score ranking for arbitrary field tests within a group
// ABOUTME: Supports higher-is-better and lower-is-better tests, sorted by standardized score
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioMS Normalizer Contributors
#![allow(clippy::cast_precision_loss)] // Safe: group sizes far below 2^52

use crate::statistics::{mean, sample_std_dev};
use bioms_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Which direction of a raw test value is an improvement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankDirection {
    /// Larger values are better (jump height, load)
    #[default]
    HigherIsBetter,
    /// Smaller values are better (sprint time)
    LowerIsBetter,
}

/// One athlete's raw test value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreEntry {
    /// Athlete name
    pub name: String,
    /// Raw test value
    pub value: f64,
}

impl ScoreEntry {
    /// Create an entry
    #[must_use]
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Ranked athlete with a direction-adjusted Z-score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    /// Athlete name
    pub name: String,
    /// Raw test value
    pub value: f64,
    /// Z-score, negated for lower-is-better tests
    pub z_score: f64,
}

/// Group ranking for one test
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ranking {
    /// Entries sorted by Z-score, best first
    pub entries: Vec<RankedEntry>,
    /// Group mean of the raw values
    pub mean: f64,
    /// Group sample standard deviation of the raw values
    pub std_dev: f64,
    /// Direction used
    pub direction: RankDirection,
}

/// Rank a group on a single test by Z-score
///
/// Non-finite values are dropped before ranking. Equal Z-scores keep their
/// input order.
///
/// # Errors
///
/// Returns an error if fewer than two usable values remain, all values are
/// identical, or the group statistics overflow
pub fn rank_scores(entries: &[ScoreEntry], direction: RankDirection) -> AppResult<Ranking> {
    let usable: Vec<&ScoreEntry> = entries
        .iter()
        .filter(|entry| entry.value.is_finite())
        .collect();
    if usable.len() < 2 {
        return Err(AppError::invalid_input(format!(
            "At least 2 athletes are required to compute mean and standard deviation, got {}",
            usable.len()
        )));
    }

    let values: Vec<f64> = usable.iter().map(|entry| entry.value).collect();
    let (Some(group_mean), Some(std_dev)) = (mean(&values), sample_std_dev(&values)) else {
        return Err(AppError::internal("Group statistics unavailable"));
    };
    if !group_mean.is_finite() || !std_dev.is_finite() {
        return Err(AppError::value_out_of_range(
            "Group statistics overflow the floating-point range",
        ));
    }
    if std_dev <= 0.0 {
        return Err(AppError::invalid_input(
            "All athletes have exactly the same value",
        ));
    }

    let sign = match direction {
        RankDirection::HigherIsBetter => 1.0,
        RankDirection::LowerIsBetter => -1.0,
    };
    let mut ranked: Vec<RankedEntry> = usable
        .into_iter()
        .map(|entry| RankedEntry {
            name: entry.name.clone(),
            value: entry.value,
            z_score: sign * (entry.value - group_mean) / std_dev,
        })
        .collect();
    ranked.sort_by(|a, b| b.z_score.partial_cmp(&a.z_score).unwrap_or(Ordering::Equal));

    Ok(Ranking {
        entries: ranked,
        mean: group_mean,
        std_dev,
        direction,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bioms_core::errors::ErrorCode;

    #[test]
    fn test_higher_is_better_ranking() {
        let entries = vec![
            ScoreEntry::new("Ana", 30.0),
            ScoreEntry::new("Bia", 50.0),
            ScoreEntry::new("Caio", 40.0),
        ];
        let ranking = rank_scores(&entries, RankDirection::HigherIsBetter).unwrap();

        let names: Vec<_> = ranking.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Bia", "Caio", "Ana"]);
        assert!((ranking.mean - 40.0).abs() < f64::EPSILON);
        assert!((ranking.std_dev - 10.0).abs() < 1e-12);
        assert!((ranking.entries[0].z_score - 1.0).abs() < 1e-12);
        assert!(ranking.entries[1].z_score.abs() < 1e-12);
    }

    #[test]
    fn test_lower_is_better_negates() {
        let entries = vec![
            ScoreEntry::new("Ana", 11.2),
            ScoreEntry::new("Bia", 10.4),
            ScoreEntry::new("Caio", 12.0),
        ];
        let ranking = rank_scores(&entries, RankDirection::LowerIsBetter).unwrap();
        assert_eq!(ranking.entries[0].name, "Bia");
        assert!(ranking.entries[0].z_score > 0.0);
        assert_eq!(ranking.entries[2].name, "Caio");
    }

    #[test]
    fn test_rejects_small_or_flat_groups() {
        let single = vec![ScoreEntry::new("Ana", 1.0), ScoreEntry::new("Bia", f64::NAN)];
        assert!(rank_scores(&single, RankDirection::HigherIsBetter).is_err());

        let flat = vec![ScoreEntry::new("Ana", 2.0), ScoreEntry::new("Bia", 2.0)];
        let error = rank_scores(&flat, RankDirection::HigherIsBetter).unwrap_err();
        assert!(error.message.contains("same value"));
    }

    #[test]
    fn test_rejects_overflowing_group() {
        let entries = vec![
            ScoreEntry::new("Ana", f64::MAX),
            ScoreEntry::new("Bia", f64::MAX),
            ScoreEntry::new("Caio", 1.0),
        ];
        let error = rank_scores(&entries, RankDirection::HigherIsBetter).unwrap_err();
        assert_eq!(error.code, ErrorCode::ValueOutOfRange);
    }
}
