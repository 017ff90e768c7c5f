// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup, reference dataset builders, and JSON temp files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioMS Normalizer Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `bioms_normalizer`

use bioms_normalizer::models::{CellValue, ReferenceDataset};
use serde_json::{json, Value};
use std::env;
use std::io::Write;
use std::sync::Once;
use tempfile::NamedTempFile;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Single-column numeric dataset
pub fn numeric_dataset(column: &str, values: &[f64]) -> ReferenceDataset {
    let cells = values.iter().copied().map(CellValue::from).collect();
    ReferenceDataset::from_columns([(column, cells)]).unwrap()
}

/// Elite reference rows: five men (SEXO=1) and four women (SEXO=0)
///
/// Men: `BioMS_1` 10..50 step 10, `BioMS_9` 1..5.
/// Women: `BioMS_1` 2..8 step 2, `BioMS_9` 5.0 for all (zero variance).
pub fn elite_reference_rows() -> Value {
    json!([
        {"ID": "M1", "SEXO": 1, "BioMS_1": 10.0, "BioMS_5": 3.0, "BioMS_8": 0.9, "BioMS_9": 1.0},
        {"ID": "M2", "SEXO": 1, "BioMS_1": 20.0, "BioMS_5": 4.0, "BioMS_8": 1.0, "BioMS_9": 2.0},
        {"ID": "M3", "SEXO": 1, "BioMS_1": 30.0, "BioMS_5": 5.0, "BioMS_8": 1.1, "BioMS_9": 3.0},
        {"ID": "M4", "SEXO": 1, "BioMS_1": 40.0, "BioMS_5": 6.0, "BioMS_8": 1.2, "BioMS_9": 4.0},
        {"ID": "M5", "SEXO": 1, "BioMS_1": 50.0, "BioMS_5": 7.0, "BioMS_8": 1.3, "BioMS_9": 5.0},
        {"ID": "F1", "SEXO": 0, "BioMS_1": 2.0, "BioMS_5": 1.0, "BioMS_8": "n/a", "BioMS_9": 5.0},
        {"ID": "F2", "SEXO": 0, "BioMS_1": 4.0, "BioMS_5": 2.0, "BioMS_8": null, "BioMS_9": 5.0},
        {"ID": "F3", "SEXO": 0, "BioMS_1": 6.0, "BioMS_5": 3.0, "BioMS_9": 5.0},
        {"ID": "F4", "SEXO": 0, "BioMS_1": 8.0, "BioMS_5": 4.0, "BioMS_9": 5.0}
    ])
}

/// Elite reference as a dataset
pub fn elite_reference() -> ReferenceDataset {
    ReferenceDataset::from_json_rows(&elite_reference_rows()).unwrap()
}

/// Write a JSON value to a temporary file kept alive by the returned handle
pub fn json_file(value: &Value) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(value.to_string().as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Assert two floats agree to within `1e-9`
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
