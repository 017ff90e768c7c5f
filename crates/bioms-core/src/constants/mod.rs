// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Default metric identities, normalization thresholds, and score band cut points
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioMS Normalizer Contributors

//! Constants module
//!
//! Defaults only. Every value here is injected through `NormalizationConfig`
//! so deployments can tune them without touching the engine.

/// Normalization engine defaults (cohort size, variance floor, neutral score)
pub mod normalization;

/// BioMS metric identifiers and reference column names
pub mod metrics {
    /// Structural reserve index (muscle volume and density)
    pub const BIOMS_STRUCTURAL: &str = "BioMS_1";
    /// Contractile power index (rate of force development)
    pub const BIOMS_POWER: &str = "BioMS_5";
    /// Metabolic integrity index
    pub const BIOMS_METABOLIC: &str = "BioMS_8";
    /// Neuromuscular readiness index (membrane quality and conduction speed)
    pub const BIOMS_NEUROMUSCULAR_SPEED: &str = "BioMS_9";

    /// Metrics scored by default, in report order
    pub const DEFAULT_METRICS: [&str; 4] = [
        BIOMS_STRUCTURAL,
        BIOMS_POWER,
        BIOMS_METABOLIC,
        BIOMS_NEUROMUSCULAR_SPEED,
    ];

    /// Column holding the binary sex indicator in reference data
    pub const SEX_COLUMN: &str = "SEXO";
    /// Field holding the athlete identifier in team uploads
    pub const ID_COLUMN: &str = "ID";

    /// Prefix of Z-score keys in the flat result map
    pub const Z_PREFIX: &str = "Z_";
    /// Prefix of percentile keys in the flat result map
    pub const P_PREFIX: &str = "P_";
    /// Key of the quadrant label in the flat result map
    pub const CLASSIFICATION_KEY: &str = "Classification";
}

/// Quadrant classifier defaults
pub mod quadrant {
    use super::metrics;

    /// Z threshold for the "above reference" side of each axis
    pub const CUT: f64 = 0.2;
    /// Both axes must fall below this Z for the at-risk label
    pub const AT_RISK_CUT: f64 = -0.5;
    /// Metric on the structural axis
    pub const STRUCTURAL_AXIS: &str = metrics::BIOMS_STRUCTURAL;
    /// Metric on the power/speed axis
    ///
    /// Deliberately `BioMS_9` (neuromuscular conduction speed), not the
    /// contractile power index `BioMS_5`.
    pub const POWER_AXIS: &str = metrics::BIOMS_NEUROMUSCULAR_SPEED;
}

/// Z-score interpretation band boundaries
pub mod score_bands {
    /// Z at or above this is elite
    pub const ELITE_MIN: f64 = 1.5;
    /// Z strictly above this is high
    pub const HIGH_ABOVE: f64 = 0.5;
    /// Z at or above this is normal
    pub const NORMAL_MIN: f64 = -0.5;
    /// Z strictly above this is alert, anything lower is critical
    pub const ALERT_ABOVE: f64 = -1.5;
}
