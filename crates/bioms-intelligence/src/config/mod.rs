// ABOUTME: Configuration module for bioms-intelligence crate
// ABOUTME: Re-exports normalization configuration and validation errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioMS Normalizer Contributors

/// Configuration validation errors
pub mod error;

/// Normalization engine configuration (metric set, thresholds, quadrant, bands)
pub mod normalization;

pub use error::ConfigError;
pub use normalization::{NormalizationConfig, QuadrantConfig, ScoreBandConfig};
