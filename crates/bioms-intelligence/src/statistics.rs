// ABOUTME: Sample statistics for cohort normalization (cleaning, mean, Bessel-corrected spread)
// ABOUTME: Implements Z-scores and empirical percentile-of-score ranks with midpoint tie handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioMS Normalizer Contributors
#![allow(clippy::cast_precision_loss)] // Safe: sample sizes far below 2^52

use bioms_core::models::CellValue;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Coerce cells to numbers, dropping non-numeric, missing, NaN and infinite entries
#[must_use]
pub fn clean_sample<'a, I>(cells: I) -> Vec<f64>
where
    I: IntoIterator<Item = &'a CellValue>,
{
    cells.into_iter().filter_map(CellValue::as_finite).collect()
}

/// Arithmetic mean, `None` for an empty slice
#[must_use]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation with the n-1 denominator
///
/// Undefined (`None`) for fewer than two values.
#[must_use]
pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let mean = mean(values)?;
    let sum_squares = values
        .iter()
        .map(|value| {
            let diff = value - mean;
            diff * diff
        })
        .sum::<f64>();
    Some((sum_squares / (values.len() - 1) as f64).sqrt())
}

/// Percentile rank of `score` within `sample`, 0-100
///
/// Counts the values strictly below the score plus half of those equal to it,
/// so ties split at the midpoint. An empty sample ranks everything at 50.
#[must_use]
pub fn percentile_of_score(sample: &[f64], score: f64) -> f64 {
    if sample.is_empty() {
        return 50.0;
    }
    let (below, equal) = sample
        .iter()
        .fold((0_usize, 0_usize), |(below, equal), value| {
            match value.partial_cmp(&score) {
                Some(Ordering::Less) => (below + 1, equal),
                Some(Ordering::Equal) => (below, equal + 1),
                _ => (below, equal),
            }
        });
    (below as f64 + equal as f64 * 0.5) * 100.0 / sample.len() as f64
}

/// Cleaned sample of one metric with its summary statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricStat {
    /// Finite values that survived cleaning
    #[serde(skip)]
    pub sample: Vec<f64>,
    /// Number of values in the sample
    pub sample_size: usize,
    /// Sample mean
    pub mean: f64,
    /// Sample standard deviation (n-1), undefined below two values
    pub std_dev: Option<f64>,
}

impl MetricStat {
    /// Summarize an already-cleaned sample, `None` when it is empty
    #[must_use]
    pub fn from_sample(sample: Vec<f64>) -> Option<Self> {
        let mean = mean(&sample)?;
        let std_dev = sample_std_dev(&sample);
        Some(Self {
            sample_size: sample.len(),
            mean,
            std_dev,
            sample,
        })
    }

    /// Clean raw cells and summarize them
    #[must_use]
    pub fn from_cells<'a, I>(cells: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a CellValue>,
    {
        Self::from_sample(clean_sample(cells))
    }

    /// Whether the spread is too small to score against
    ///
    /// An undefined deviation counts as zero.
    #[must_use]
    pub fn is_degenerate(&self, zero_variance_threshold: f64) -> bool {
        !self
            .std_dev
            .is_some_and(|std_dev| std_dev > zero_variance_threshold)
    }

    /// Standardized deviation of `value` from the sample mean
    ///
    /// Callers check [`Self::is_degenerate`] first; a degenerate sample yields 0.
    #[must_use]
    pub fn z_score(&self, value: f64) -> f64 {
        match self.std_dev {
            Some(std_dev) if std_dev > 0.0 => (value - self.mean) / std_dev,
            _ => 0.0,
        }
    }

    /// Percentile rank of `value` within the sample
    #[must_use]
    pub fn percentile(&self, value: f64) -> f64 {
        percentile_of_score(&self.sample, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_sample_drops_infinities_and_text() {
        let cells = vec![
            CellValue::from(1.0),
            CellValue::from("2"),
            CellValue::from(f64::INFINITY),
            CellValue::from("-inf"),
            CellValue::from("abc"),
            CellValue::Missing,
            CellValue::from(f64::NAN),
            CellValue::from(4.0),
        ];
        assert_eq!(clean_sample(&cells), vec![1.0, 2.0, 4.0]);
    }

    #[test]
    fn test_mean_and_std_dev() {
        let values = [10.0, 20.0, 30.0, 40.0, 50.0];
        assert_eq!(mean(&values), Some(30.0));
        // Variance = 1000 / 4 = 250
        let std_dev = sample_std_dev(&values).unwrap();
        assert!((std_dev - 250.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_std_dev_undefined_below_two_values() {
        assert_eq!(sample_std_dev(&[]), None);
        assert_eq!(sample_std_dev(&[3.0]), None);
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn test_percentile_midpoint_ties() {
        let sample = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert!((percentile_of_score(&sample, 3.0) - 50.0).abs() < f64::EPSILON);
        assert!((percentile_of_score(&sample, 0.0) - 0.0).abs() < f64::EPSILON);
        assert!((percentile_of_score(&sample, 6.0) - 100.0).abs() < f64::EPSILON);
        assert!((percentile_of_score(&sample, 1.0) - 10.0).abs() < f64::EPSILON);

        let tied = [2.0, 2.0, 2.0, 8.0];
        // 0 below, 3 equal: (0 + 1.5) / 4 = 37.5
        assert!((percentile_of_score(&tied, 2.0) - 37.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_metric_stat_degenerate_cases() {
        assert!(MetricStat::from_sample(Vec::new()).is_none());

        let single = MetricStat::from_sample(vec![5.0]).unwrap();
        assert!(single.is_degenerate(1e-6));

        let flat = MetricStat::from_sample(vec![5.0, 5.0, 5.0, 5.0]).unwrap();
        assert!(flat.is_degenerate(1e-6));
        assert!((flat.z_score(9.0)).abs() < f64::EPSILON);

        let tiny = MetricStat::from_sample(vec![1.0, 1.0 + 1e-9]).unwrap();
        assert!(tiny.is_degenerate(1e-6));
    }

    #[test]
    fn test_metric_stat_z_score() {
        let stat = MetricStat::from_cells(&[
            CellValue::from(1.0),
            CellValue::from(2.0),
            CellValue::from(f64::INFINITY),
            CellValue::from(4.0),
        ])
        .unwrap();
        assert_eq!(stat.sample_size, 3);
        let expected_mean = 7.0 / 3.0;
        assert!((stat.mean - expected_mean).abs() < 1e-12);
        assert!(!stat.is_degenerate(1e-6));
        let expected_z = (3.0 - expected_mean) / stat.std_dev.unwrap();
        assert!((stat.z_score(3.0) - expected_z).abs() < 1e-12);
    }
}
