// ABOUTME: Main library entry point for the BioMS normalizer
// ABOUTME: Re-exports the core and engine crates and hosts logging and file loaders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioMS Normalizer Contributors

#![deny(unsafe_code)]

//! # BioMS Normalizer
//!
//! Compares an athlete's BioMS metrics against a reference population of
//! elite athletes and reports, per metric, a Z-score and a percentile rank,
//! plus a coarse performance quadrant.
//!
//! ## Architecture
//!
//! - **`bioms-core`**: errors, constants, reference dataset and athlete models
//! - **`bioms-intelligence`**: cohort selection, statistics, the normalization
//!   engine, interpretation, team batches and rankings
//! - **this crate**: logging setup, JSON file loaders and the `bioms-cli` binary
//!
//! ## Example Usage
//!
//! ```rust
//! use bioms_normalizer::models::{AthleteMetrics, ReferenceDataset};
//! use bioms_normalizer::intelligence::NormalizationEngine;
//!
//! let reference = ReferenceDataset::from_json_str(
//!     r#"[{"SEXO": 1, "BioMS_1": 10}, {"SEXO": 1, "BioMS_1": 20}, {"SEXO": 1, "BioMS_1": 30}]"#,
//! )?;
//! let engine = NormalizationEngine::new(reference);
//!
//! let athlete = AthleteMetrics::new().with_sex(1_i64).with_value("BioMS_1", 20.0);
//! let result = engine.compare_athlete(&athlete);
//!
//! assert_eq!(result.z_score("BioMS_1"), Some(0.0));
//! assert_eq!(result.to_flat_map()["Classification"], "Balanced/Developing");
//! # Ok::<(), bioms_normalizer::errors::AppError>(())
//! ```

/// Structured logging setup
pub mod logging;

/// JSON file loaders for reference data, athletes, teams and test entries
pub mod loaders;

pub use bioms_core::{constants, errors, models};
pub use bioms_intelligence as intelligence;
