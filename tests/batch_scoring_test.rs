// ABOUTME: Integration tests for parallel team scoring and team rankings
// ABOUTME: Validates global and intra-group modes, order preservation, labels, and metric rankings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioMS Normalizer Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use bioms_normalizer::errors::ErrorCode;
use bioms_normalizer::intelligence::{
    rank_by_metric, score_team, CohortBasis, ComparisonMode, NormalizationConfig,
    NormalizationEngine, Quadrant,
};
use bioms_normalizer::models::AthleteMetrics;
use common::{assert_close, elite_reference, init_test_logging};

fn squad(size: usize) -> Vec<AthleteMetrics> {
    (0..size)
        .map(|index| {
            AthleteMetrics::new()
                .with_id(format!("Player Number {index}"))
                .with_sex(1_i64)
                .with_value("BioMS_1", 10.0 + index as f64)
                .with_value("BioMS_9", 1.0 + (index % 5) as f64)
        })
        .collect()
}

#[test]
fn test_global_batch_matches_single_comparisons() {
    init_test_logging();
    let team = squad(40);
    let config = NormalizationConfig::default();

    let reports = score_team(
        &team,
        ComparisonMode::Global(elite_reference()),
        &config,
    )
    .unwrap();
    let engine = NormalizationEngine::new(elite_reference());

    assert_eq!(reports.len(), team.len());
    for (athlete, report) in team.iter().zip(&reports) {
        assert_eq!(report.id, athlete.id);
        assert!(report.label.starts_with("PN"));
        assert_eq!(report.result, engine.compare_athlete(athlete));
        assert_eq!(report.result.cohort_basis, CohortBasis::SexFiltered { sex: 1 });
    }
}

#[test]
fn test_intra_group_uses_team_as_reference() {
    init_test_logging();
    let team = vec![
        AthleteMetrics::new()
            .with_id("Ana Souza")
            .with_value("BioMS_1", 10.0)
            .with_value("BioMS_9", 1.0),
        AthleteMetrics::new()
            .with_id("Bia Reis")
            .with_value("BioMS_1", 20.0)
            .with_value("BioMS_9", 2.0),
        AthleteMetrics::new()
            .with_id("Caio Dias")
            .with_value("BioMS_1", 30.0)
            .with_value("BioMS_9", 3.0),
    ];
    let reports = score_team(
        &team,
        ComparisonMode::IntraGroup,
        &NormalizationConfig::default(),
    )
    .unwrap();

    // No sex indicator anywhere: everyone falls in group 0 and the team is the cohort
    let middle = &reports[1].result;
    assert_eq!(middle.cohort_basis, CohortBasis::SexFiltered { sex: 0 });
    assert_eq!(middle.cohort_size, 3);
    assert_close(middle.z_score("BioMS_1").unwrap(), 0.0);
    assert_close(middle.percentile("BioMS_1").unwrap(), 50.0);

    assert_close(reports[2].result.z_score("BioMS_1").unwrap(), 1.0);
    assert_eq!(reports[2].result.classification, Quadrant::HybridElite);
    assert_eq!(reports[0].result.classification, Quadrant::UndertrainedAtRisk);

    // Metrics nobody supplied stay neutral
    assert!(reports[0].result.score("BioMS_5").unwrap().is_neutral());
}

#[test]
fn test_rank_by_metric_orders_by_z_descending() {
    let team = squad(6);
    let reports = score_team(
        &team,
        ComparisonMode::Global(elite_reference()),
        &NormalizationConfig::default(),
    )
    .unwrap();

    let ranking = rank_by_metric(&reports, "BioMS_9");
    assert_eq!(ranking.len(), 6);
    assert!(ranking
        .windows(2)
        .all(|pair| pair[0].z_score >= pair[1].z_score));
    // Players 0 and 5 share BioMS_9 = 1.0; input order breaks the tie
    let tied: Vec<_> = ranking
        .iter()
        .filter(|entry| entry.z_score < -1.0)
        .collect();
    assert_eq!(tied.len(), 2);
    assert_eq!(tied[0].label, "PN0");
    assert_eq!(tied[1].label, "PN5");
}

#[test]
fn test_empty_team_is_invalid_input() {
    let error = score_team(
        &[],
        ComparisonMode::Global(elite_reference()),
        &NormalizationConfig::default(),
    )
    .unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = NormalizationConfig {
        metrics: vec!["BioMS_1".to_owned(), "BioMS_1".to_owned()],
        ..NormalizationConfig::default()
    };
    let error = score_team(&squad(3), ComparisonMode::IntraGroup, &config).unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
}
