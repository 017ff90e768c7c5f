// ABOUTME: Configuration error types for normalization settings validation
// ABOUTME: Defines error variants for invalid ranges, empty metric sets, and ordering failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioMS Normalizer Contributors

//! Configuration error types for normalization settings validation.

use bioms_core::errors::{AppError, ErrorCode};
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Value outside acceptable range (e.g., a negative variance floor)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Required configuration field is missing or empty
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// The same metric was configured twice
    #[error("Duplicate metric: {0}")]
    DuplicateMetric(String),

    /// Thresholds that must be ordered are not
    #[error("Invalid threshold ordering: {0}")]
    InvalidOrdering(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::new(ErrorCode::ConfigInvalid, error.to_string()).with_source(error)
    }
}
