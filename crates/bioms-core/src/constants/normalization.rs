// ABOUTME: Default thresholds for cohort selection and per-metric normalization
// ABOUTME: Minimum cohort size, zero-variance floor, and the neutral score pair
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioMS Normalizer Contributors

/// Filtered cohorts smaller than this fall back to the full reference dataset
pub const MIN_COHORT_SIZE: usize = 3;

/// Standard deviations at or below this are treated as zero
pub const ZERO_VARIANCE_THRESHOLD: f64 = 1e-6;

/// Z-score emitted when a metric cannot be scored
pub const NEUTRAL_Z_SCORE: f64 = 0.0;

/// Percentile emitted when a metric cannot be scored
pub const NEUTRAL_PERCENTILE: f64 = 50.0;

/// Sex group assumed when the athlete carries no sex indicator
pub const DEFAULT_SEX_GROUP: i64 = 0;
