// ABOUTME: Single-athlete comparison command for bioms-cli
// ABOUTME: Scores one athlete against a reference file, optionally with insight cards
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioMS Normalizer Contributors

use std::path::Path;

use bioms_normalizer::{
    errors::AppResult,
    intelligence::{Interpreter, NormalizationConfig, NormalizationEngine},
    loaders,
};
use serde_json::{json, Value};
use tracing::info;

use crate::helpers::output::print_json;

/// Compare one athlete against the reference and print the flat result map
pub fn run(
    reference: &Path,
    athlete: &Path,
    report: bool,
    config: NormalizationConfig,
) -> AppResult<()> {
    let reference = loaders::load_reference(reference)?;
    let athlete = loaders::load_athlete(athlete, &config.sex_column)?;
    let interpreter = Interpreter::new(config.bands);
    let engine = NormalizationEngine::with_config(reference, config)?;

    let result = engine.compare_athlete(&athlete);
    info!(
        athlete = athlete.id.as_deref().unwrap_or("<unnamed>"),
        classification = %result.classification,
        cohort_size = result.cohort_size,
        "Athlete compared"
    );

    let flat = Value::Object(result.to_flat_map());
    if report {
        print_json(&json!({
            "result": flat,
            "cohort": {
                "basis": result.cohort_basis,
                "size": result.cohort_size,
            },
            "insights": interpreter.build_report(&result),
            "disclaimer": Interpreter::context_disclaimer(),
        }))
    } else {
        print_json(&flat)
    }
}
