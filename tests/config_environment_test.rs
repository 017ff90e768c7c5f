// ABOUTME: Integration tests for environment-driven normalization configuration
// ABOUTME: Verifies BIOMS_* overrides flow into cohort selection, bands, and the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioMS Normalizer Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use bioms_normalizer::intelligence::{
    CohortBasis, Interpreter, NormalizationConfig, NormalizationEngine, ScoreBand,
};
use bioms_normalizer::models::{AthleteMetrics, ReferenceDataset};
use common::elite_reference;
use serde_json::json;
use serial_test::serial;
use std::env;

const ENV_KEYS: [&str; 6] = [
    "BIOMS_SEX_COLUMN",
    "BIOMS_MIN_COHORT_SIZE",
    "BIOMS_BAND_ELITE_MIN",
    "BIOMS_BAND_HIGH_ABOVE",
    "BIOMS_QUADRANT_AT_RISK_CUT",
    "BIOMS_ZERO_VARIANCE_THRESHOLD",
];

fn with_env<T>(vars: &[(&str, &str)], body: impl FnOnce() -> T) -> T {
    for key in ENV_KEYS {
        env::remove_var(key);
    }
    for (key, value) in vars {
        env::set_var(key, value);
    }
    let result = body();
    for key in ENV_KEYS {
        env::remove_var(key);
    }
    result
}

#[test]
#[serial]
fn test_min_cohort_size_override_widens_cohort() {
    let config = with_env(&[("BIOMS_MIN_COHORT_SIZE", "6")], NormalizationConfig::from_env);
    let engine = NormalizationEngine::with_config(elite_reference(), config).unwrap();

    let result = engine.compare_athlete(&AthleteMetrics::new().with_sex(1_i64));
    assert_eq!(
        result.cohort_basis,
        CohortBasis::UndersizedGroup { sex: 1, matched: 5 }
    );
    assert_eq!(result.cohort_size, 9);
}

#[test]
#[serial]
fn test_sex_column_override() {
    let reference = ReferenceDataset::from_json_rows(&json!([
        {"gender": 1, "BioMS_1": 1.0},
        {"gender": 1, "BioMS_1": 2.0},
        {"gender": 1, "BioMS_1": 3.0},
        {"gender": 0, "BioMS_1": 40.0}
    ]))
    .unwrap();
    let config = with_env(&[("BIOMS_SEX_COLUMN", "gender")], NormalizationConfig::from_env);
    let engine = NormalizationEngine::with_config(reference, config).unwrap();

    let result = engine.compare_athlete(&AthleteMetrics::new().with_sex(1_i64));
    assert_eq!(result.cohort_basis, CohortBasis::SexFiltered { sex: 1 });
    assert_eq!(result.cohort_size, 3);
}

#[test]
#[serial]
fn test_band_overrides_change_interpretation() {
    let config = with_env(
        &[
            ("BIOMS_BAND_ELITE_MIN", "2.5"),
            ("BIOMS_BAND_HIGH_ABOVE", "1.0"),
        ],
        NormalizationConfig::from_env,
    );
    assert!(config.validate().is_ok());

    let interpreter = Interpreter::new(config.bands);
    assert_eq!(interpreter.interpret("BioMS_1", 2.0).band, ScoreBand::High);
    assert_eq!(interpreter.interpret("BioMS_1", 0.8).band, ScoreBand::Normal);
}

#[test]
#[serial]
fn test_misordered_env_values_fail_validation() {
    let config = with_env(
        &[("BIOMS_QUADRANT_AT_RISK_CUT", "0.9")],
        NormalizationConfig::from_env,
    );
    assert!(config.validate().is_err());
    assert!(NormalizationEngine::with_config(ReferenceDataset::new(), config).is_err());
}
