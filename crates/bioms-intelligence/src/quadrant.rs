// ABOUTME: Performance quadrant classification from structural and power Z-scores
// ABOUTME: Five tiered labels plus Undefined when an axis score is unavailable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioMS Normalizer Contributors

use crate::config::QuadrantConfig;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse performance category derived from two orthogonal Z-scores
///
/// The at-risk tier needs a larger deficit on both axes than the main cut,
/// so mildly below-reference athletes land in `BalancedDeveloping`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quadrant {
    /// Above the cut on both axes
    #[serde(rename = "Hybrid Elite")]
    HybridElite,
    /// Above the cut on structure only
    #[serde(rename = "Pure-Strength")]
    PureStrength,
    /// Above the cut on power only
    #[serde(rename = "Speed-Dominant")]
    SpeedDominant,
    /// Below the at-risk cut on both axes
    #[serde(rename = "Undertrained/At-Risk")]
    UndertrainedAtRisk,
    /// Anything in between
    #[serde(rename = "Balanced/Developing")]
    BalancedDeveloping,
    /// An axis score is unavailable
    #[serde(rename = "Undefined")]
    Undefined,
}

impl Quadrant {
    /// Human-readable label used in reports
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::HybridElite => "Hybrid Elite",
            Self::PureStrength => "Pure-Strength",
            Self::SpeedDominant => "Speed-Dominant",
            Self::UndertrainedAtRisk => "Undertrained/At-Risk",
            Self::BalancedDeveloping => "Balanced/Developing",
            Self::Undefined => "Undefined",
        }
    }

    /// Classify with the default cut points (0.2 and -0.5)
    #[must_use]
    pub fn classify(z_struct: Option<f64>, z_power: Option<f64>) -> Self {
        define_quadrant(z_struct, z_power, &QuadrantConfig::default())
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify an athlete from structural and power Z-scores
///
/// Branches are evaluated in order; the first match wins.
#[must_use]
pub fn define_quadrant(
    z_struct: Option<f64>,
    z_power: Option<f64>,
    config: &QuadrantConfig,
) -> Quadrant {
    let (Some(z_struct), Some(z_power)) = (z_struct, z_power) else {
        return Quadrant::Undefined;
    };
    let cut = config.cut;

    if z_struct >= cut && z_power >= cut {
        Quadrant::HybridElite
    } else if z_struct >= cut && z_power < cut {
        Quadrant::PureStrength
    } else if z_struct < cut && z_power >= cut {
        Quadrant::SpeedDominant
    } else if z_struct < config.at_risk_cut && z_power < config.at_risk_cut {
        Quadrant::UndertrainedAtRisk
    } else {
        Quadrant::BalancedDeveloping
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        assert_eq!(
            Quadrant::classify(Some(0.2), Some(0.2)),
            Quadrant::HybridElite
        );
        assert_eq!(
            Quadrant::classify(Some(0.19), Some(0.3)),
            Quadrant::SpeedDominant
        );
        assert_eq!(
            Quadrant::classify(Some(0.2), Some(0.19)),
            Quadrant::PureStrength
        );
        assert_eq!(
            Quadrant::classify(Some(-0.6), Some(-0.6)),
            Quadrant::UndertrainedAtRisk
        );
        assert_eq!(
            Quadrant::classify(Some(-0.3), Some(-0.3)),
            Quadrant::BalancedDeveloping
        );
        // At-risk requires both axes strictly below -0.5
        assert_eq!(
            Quadrant::classify(Some(-0.5), Some(-2.0)),
            Quadrant::BalancedDeveloping
        );
    }

    #[test]
    fn test_missing_axis_is_undefined() {
        assert_eq!(Quadrant::classify(None, Some(1.0)), Quadrant::Undefined);
        assert_eq!(Quadrant::classify(Some(1.0), None), Quadrant::Undefined);
    }

    #[test]
    fn test_custom_cuts() {
        let config = QuadrantConfig {
            cut: 1.0,
            at_risk_cut: -1.0,
            ..QuadrantConfig::default()
        };
        assert_eq!(
            define_quadrant(Some(0.5), Some(0.5), &config),
            Quadrant::BalancedDeveloping
        );
        assert_eq!(
            define_quadrant(Some(-0.6), Some(-0.6), &config),
            Quadrant::BalancedDeveloping
        );
    }

    #[test]
    fn test_label_serialization() {
        assert_eq!(Quadrant::UndertrainedAtRisk.to_string(), "Undertrained/At-Risk");
        assert_eq!(
            serde_json::to_string(&Quadrant::HybridElite).unwrap(),
            "\"Hybrid Elite\""
        );
    }
}
