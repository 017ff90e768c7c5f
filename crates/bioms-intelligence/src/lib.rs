// ABOUTME: Athlete normalization engine: cohort selection, statistics, scoring, and classification
// ABOUTME: Also hosts score interpretation, team batch scoring, and universal test rankings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioMS Normalizer Contributors

#![deny(unsafe_code)]

//! # BioMS Intelligence
//!
//! Scores an athlete's BioMS metrics against a reference population.
//!
//! ## Modules
//!
//! - **cohort**: Sex-filtered comparison cohort with full-dataset fallback
//! - **statistics**: Cleaning, mean, sample standard deviation, percentile rank
//! - **normalization**: `NormalizationEngine` producing per-metric Z/percentile scores
//! - **quadrant**: Performance quadrant from the structural and power axes
//! - **interpretation**: Score bands and narrative insight cards
//! - **batch**: Parallel team scoring (global or intra-group)
//! - **ranking**: Group Z-score ranking for arbitrary field tests
//! - **config**: Engine configuration with environment overrides

/// Parallel team scoring and per-metric team rankings
pub mod batch;

/// Comparison cohort selection
pub mod cohort;

/// Engine configuration
pub mod config;

/// Score bands and narrative report cards
pub mod interpretation;

/// Normalization engine
pub mod normalization;

/// Performance quadrant classification
pub mod quadrant;

/// Universal Z-score rankings
pub mod ranking;

/// Sample statistics
pub mod statistics;

pub use batch::{
    athlete_label, rank_by_metric, require_configured_metric, score_team, AthleteReport,
    ComparisonMode, MetricRankEntry,
};
pub use cohort::{select_cohort, Cohort, CohortBasis, CohortSelector};
pub use config::{ConfigError, NormalizationConfig, QuadrantConfig, ScoreBandConfig};
pub use interpretation::{ContextDisclaimer, Interpreter, MetricInsight, ScoreBand};
pub use normalization::{
    ComparisonResult, MetricScore, NeutralReason, NormalizationEngine, ScoreBasis,
};
pub use quadrant::{define_quadrant, Quadrant};
pub use ranking::{rank_scores, RankDirection, RankedEntry, Ranking, ScoreEntry};
pub use statistics::MetricStat;
