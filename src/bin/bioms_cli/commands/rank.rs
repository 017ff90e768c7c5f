// ABOUTME: Universal test ranking command for bioms-cli
// ABOUTME: Ranks named raw test values by group Z-score
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioMS Normalizer Contributors

use std::path::Path;

use bioms_normalizer::{
    errors::AppResult,
    intelligence::{rank_scores, RankDirection},
    loaders,
};

use crate::helpers::output::print_json;

/// Rank entries from a JSON file and print the ranking
pub fn run(input: &Path, lower_is_better: bool) -> AppResult<()> {
    let entries = loaders::load_score_entries(input)?;
    let direction = if lower_is_better {
        RankDirection::LowerIsBetter
    } else {
        RankDirection::HigherIsBetter
    };
    print_json(&rank_scores(&entries, direction)?)
}
