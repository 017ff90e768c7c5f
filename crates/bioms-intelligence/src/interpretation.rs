// ABOUTME: Translates metric Z-scores into five-tier score bands and narrative insight cards
// ABOUTME: Static knowledge base of titles, concepts, and per-band narratives for each BioMS index
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioMS Normalizer Contributors

//! Score interpretation
//!
//! Reference Z=0 is the ceiling of federated athletes, so "normal" here means
//! typical for an active non-athlete, not typical for the population.

use crate::config::ScoreBandConfig;
use crate::normalization::ComparisonResult;
use bioms_core::constants::metrics;
use serde::{Deserialize, Serialize};

/// Five-tier interpretation of a single Z-score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    /// Comparable to the physiological ceiling of elite athletes
    Elite,
    /// Well above the reference
    High,
    /// Functional, within half a deviation of the reference
    Normal,
    /// Below the reference, worth attention
    Alert,
    /// Far below the reference
    Critical,
}

impl ScoreBand {
    /// Band of a Z-score under the given boundaries
    #[must_use]
    pub fn from_z(z_score: f64, bounds: &ScoreBandConfig) -> Self {
        if z_score >= bounds.elite_min {
            Self::Elite
        } else if z_score > bounds.high_above {
            Self::High
        } else if z_score >= bounds.normal_min {
            Self::Normal
        } else if z_score > bounds.alert_above {
            Self::Alert
        } else {
            Self::Critical
        }
    }

    /// Display colour for report renderers
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Elite => "#00fa21",
            Self::High => "#37e5f1",
            Self::Normal => "#34495e",
            Self::Alert => "#f39c12",
            Self::Critical => "#e74c3c",
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Elite => 0,
            Self::High => 1,
            Self::Normal => 2,
            Self::Alert => 3,
            Self::Critical => 4,
        }
    }
}

/// Knowledge base entry for one metric
struct MetricNarrative {
    title: &'static str,
    concept: &'static str,
    /// (headline, narrative) indexed by [`ScoreBand::index`]
    bands: [(&'static str, &'static str); 5],
}

const STRUCTURAL: MetricNarrative = MetricNarrative {
    title: "Muscle Profile",
    concept: "Measures structural reserve (muscle volume and density). The reference (Z=0) is the ceiling of federated athletes.",
    bands: [
        ("Elite Reserve", "Highly developed structure. Muscle volume is comparable to the physiological ceiling of high-performance athletes, with excellent joint protection and raw strength potential."),
        ("High Density", "A robust chassis, well above the population average, able to sustain high volumes of intense training safely."),
        ("Functional Structure", "Muscle volume adequate for an active life. Far from athletic hypertrophy, but fully functional for health, daily demands, and regular training."),
        ("Moderate Volume", "Lean mass reserve sits below the athletic reference. Strength training focused on hypertrophy will help protect the joints over the long term."),
        ("Far From the Athletic Ceiling", "Low lean mass reserve relative to the elite. Structural gain should be a strong priority to improve autonomy, metabolism, and longevity."),
    ],
};

const POWER: MetricNarrative = MetricNarrative {
    title: "Muscle Power",
    concept: "Ability to generate fast force and explosiveness (RFD). The reference (Z=0) is power-sport athletes.",
    bands: [
        ("Explosive Power (Elite)", "The neuromuscular system fires with the same efficiency and explosiveness as professional jumpers or sprinters."),
        ("High Reactivity", "Powerful, reactive muscles with a strong ability to turn force into fast movement, an edge in dynamic sports."),
        ("Standard Capacity (Non-Athlete)", "Contractile response in line with the general population. Strength is present, but without the drive and explosiveness of elite athletes."),
        ("Low Explosiveness", "Slow-twitch dominance or neural lethargy. Rapid acceleration will be harder, pointing to a need for power training."),
        ("Slow Contractile Response", "Significant distance from athletic explosive efficiency. Gradual introduction of neuromuscular stimuli is recommended."),
    ],
};

const METABOLIC: MetricNarrative = MetricNarrative {
    title: "Metabolic Integrity",
    concept: "Cellular efficiency in converting energy, inversely proportional to inflammatory noise. The elite level requires an extremely clean engine.",
    bands: [
        ("Optimal Homeostasis", "A highly optimized cellular environment without metabolic friction. Energy is produced and used at the very low cost of an elite athlete."),
        ("Preserved Cellular Environment", "Excellent efficiency with a very low likelihood of metabolic resistance, pointing to fast recovery and fluid energy processing."),
        ("Functional Metabolism", "Adequate energy processing for daily life, without the extreme efficiency demanded by high performance."),
        ("Early Metabolic Friction", "The body spends a little more energy to maintain basic functions. May indicate accumulated stress or a need to adjust recovery and nutrition."),
        ("Low Systemic Efficiency", "Metabolism is running at a high cost with possible inflammatory noise, making recovery and efficient fat use harder."),
    ],
};

const RESILIENCE: MetricNarrative = MetricNarrative {
    title: "Neuromuscular Readiness",
    concept: "Cell membrane quality combined with nerve conduction to resist rapid fatigue. Compared against sprinters.",
    bands: [
        ("Maximum Neural Readiness", "Top-level nerve-to-muscle signalling. Fatigue resilience and reaction time comparable to explosive athletes."),
        ("High Resilience", "Intact membranes and fast nerve conduction. The system handles intensity well and recovers quickly between efforts."),
        ("Operational Readiness", "Adequate nerve communication. Far from competitive reactivity, but fully able to sustain an exercise routine."),
        ("Early Fatigue", "Signal conduction quality may be reduced, so the system loses efficiency quickly under sustained stress."),
        ("Slow Signalling", "Considerable distance from athletic readiness. Suggests membrane wear or nervous system lethargy; focus on recovery and training modulation."),
    ],
};

const GENERIC: MetricNarrative = MetricNarrative {
    title: "Custom Metric",
    concept: "Standardized distance from the reference group mean.",
    bands: [
        ("Elite", "Far above the reference group."),
        ("High", "Above the reference group."),
        ("Normal", "Close to the reference group mean."),
        ("Alert", "Below the reference group."),
        ("Critical", "Far below the reference group."),
    ],
};

fn narrative_for(metric: &str) -> &'static MetricNarrative {
    match metric {
        metrics::BIOMS_STRUCTURAL => &STRUCTURAL,
        metrics::BIOMS_POWER => &POWER,
        metrics::BIOMS_METABOLIC => &METABOLIC,
        metrics::BIOMS_NEUROMUSCULAR_SPEED => &RESILIENCE,
        _ => &GENERIC,
    }
}

/// Report card for one metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricInsight {
    /// Metric name
    pub metric: String,
    /// Card title for the metric
    pub title: String,
    /// What the metric measures
    pub concept: String,
    /// Band headline
    pub headline: String,
    /// Band narrative
    pub narrative: String,
    /// Interpretation band
    pub band: ScoreBand,
    /// Display colour of the band
    pub color: String,
    /// Z-score being interpreted
    pub z_score: f64,
}

/// Framing text shown alongside every report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextDisclaimer {
    /// Heading
    pub title: String,
    /// Body text
    pub text: String,
}

/// Builds narrative insight cards from comparison results
#[derive(Debug, Clone, Default)]
pub struct Interpreter {
    bounds: ScoreBandConfig,
}

impl Interpreter {
    /// Interpreter using the given band boundaries
    #[must_use]
    pub const fn new(bounds: ScoreBandConfig) -> Self {
        Self { bounds }
    }

    /// Insight card for a single metric Z-score
    #[must_use]
    pub fn interpret(&self, metric: &str, z_score: f64) -> MetricInsight {
        let band = ScoreBand::from_z(z_score, &self.bounds);
        let narrative = narrative_for(metric);
        let (headline, text) = narrative.bands[band.index()];
        MetricInsight {
            metric: metric.to_owned(),
            title: narrative.title.to_owned(),
            concept: narrative.concept.to_owned(),
            headline: headline.to_owned(),
            narrative: text.to_owned(),
            band,
            color: band.color().to_owned(),
            z_score,
        }
    }

    /// One card per scored metric, in result order
    #[must_use]
    pub fn build_report(&self, result: &ComparisonResult) -> Vec<MetricInsight> {
        result
            .scores
            .iter()
            .map(|score| self.interpret(&score.metric, score.z_score))
            .collect()
    }

    /// Framing text explaining what the reference represents
    #[must_use]
    pub fn context_disclaimer() -> ContextDisclaimer {
        ContextDisclaimer {
            title: "Understanding Your Results: The BioMS Perspective".to_owned(),
            text: "This assessment does not diagnose disease. It measures the distance between your \
                   current condition and the physiological ceiling of the human species (federated \
                   elite athletes).\n\nResults classified as 'Standard' or 'Functional' do not indicate \
                   weakness; they reflect the normal profile of someone who does not live from sport. \
                   Use these scores as a long-term compass for building a more resilient, strong, and \
                   efficient body, with high-performance sport as the horizon."
                .to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cohort::CohortBasis;
    use crate::normalization::MetricScore;
    use crate::normalization::NeutralReason;
    use crate::quadrant::Quadrant;

    #[test]
    fn test_band_boundaries() {
        let bounds = ScoreBandConfig::default();
        assert_eq!(ScoreBand::from_z(1.5, &bounds), ScoreBand::Elite);
        assert_eq!(ScoreBand::from_z(1.49, &bounds), ScoreBand::High);
        assert_eq!(ScoreBand::from_z(0.5, &bounds), ScoreBand::Normal);
        assert_eq!(ScoreBand::from_z(-0.5, &bounds), ScoreBand::Normal);
        assert_eq!(ScoreBand::from_z(-0.51, &bounds), ScoreBand::Alert);
        assert_eq!(ScoreBand::from_z(-1.5, &bounds), ScoreBand::Critical);
    }

    #[test]
    fn test_interpret_known_and_unknown_metrics() {
        let interpreter = Interpreter::default();

        let card = interpreter.interpret("BioMS_5", 2.0);
        assert_eq!(card.title, "Muscle Power");
        assert_eq!(card.headline, "Explosive Power (Elite)");
        assert_eq!(card.color, "#00fa21");

        let card = interpreter.interpret("CMJ", -2.0);
        assert_eq!(card.title, "Custom Metric");
        assert_eq!(card.band, ScoreBand::Critical);
    }

    #[test]
    fn test_build_report_follows_result_order() {
        let result = ComparisonResult {
            scores: vec![
                MetricScore::neutral("BioMS_9", NeutralReason::MissingColumn),
                MetricScore::neutral("BioMS_1", NeutralReason::MissingColumn),
            ],
            classification: Quadrant::BalancedDeveloping,
            cohort_basis: CohortBasis::MissingSexColumn,
            cohort_size: 0,
        };
        let report = Interpreter::default().build_report(&result);

        assert_eq!(report.len(), 2);
        assert_eq!(report[0].title, "Neuromuscular Readiness");
        assert_eq!(report[1].title, "Muscle Profile");
        assert!(report.iter().all(|card| card.band == ScoreBand::Normal));
    }

    #[test]
    fn test_disclaimer_has_text() {
        let disclaimer = Interpreter::context_disclaimer();
        assert!(disclaimer.text.contains("physiological ceiling"));
    }
}
