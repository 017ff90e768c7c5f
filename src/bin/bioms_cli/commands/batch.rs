// ABOUTME: Team batch scoring command for bioms-cli
// ABOUTME: Scores a team globally or intra-group and prints per-athlete maps or a metric ranking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioMS Normalizer Contributors

use std::path::Path;

use bioms_normalizer::{
    errors::AppResult,
    intelligence::{
        rank_by_metric, require_configured_metric, score_team, ComparisonMode,
        NormalizationConfig,
    },
    loaders,
};
use serde_json::Value;

use crate::helpers::output::print_json;

/// Score a team and print one flat map per athlete (or a ranking with `rank_by`)
pub fn run(
    team: &Path,
    reference: Option<&Path>,
    rank_by: Option<&str>,
    config: &NormalizationConfig,
) -> AppResult<()> {
    if let Some(metric) = rank_by {
        require_configured_metric(config, metric)?;
    }
    let athletes = loaders::load_team(team, &config.sex_column)?;
    let mode = match reference {
        Some(path) => ComparisonMode::Global(loaders::load_reference(path)?),
        None => ComparisonMode::IntraGroup,
    };

    let reports = score_team(&athletes, mode, config)?;

    if let Some(metric) = rank_by {
        return print_json(&rank_by_metric(&reports, metric));
    }
    let rows: Vec<Value> = reports
        .iter()
        .map(|report| Value::Object(report.to_flat_map()))
        .collect();
    print_json(&rows)
}
