use super::decision::{Decision, Label, Source};

/// CGPA tiers, highest first: `(threshold, points)`.
const CGPA_TIERS: &[(f64, u32)] = &[
    (9.0, 60),
    (8.0, 50),
    (7.5, 40),
    (7.0, 30),
    (6.5, 20),
    (6.0, 15),
];
const CGPA_FLOOR: u32 = 10;

/// IQ tiers, highest first: `(threshold, points)`.
const IQ_TIERS: &[(f64, u32)] = &[
    (140.0, 40),
    (130.0, 35),
    (120.0, 30),
    (110.0, 20),
    (100.0, 15),
];
const IQ_FLOOR: u32 = 10;

/// Probability strictly above this is a placement; exactly 0.5 is not.
pub const PLACEMENT_THRESHOLD: f64 = 0.5;

/// Breakdown of a heuristic score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeuristicScore {
    pub cgpa_points: u32,
    pub iq_points: u32,
}

impl HeuristicScore {
    pub fn total(&self) -> u32 {
        self.cgpa_points + self.iq_points
    }

    pub fn probability(&self) -> f64 {
        f64::from(self.total()) / 100.0
    }
}

/// First tier whose threshold the value reaches, or the floor.
fn tier_points(value: f64, tiers: &[(f64, u32)], floor: u32) -> u32 {
    tiers
        .iter()
        .find(|(threshold, _)| value >= *threshold)
        .map(|(_, points)| *points)
        .unwrap_or(floor)
}

pub fn cgpa_points(cgpa: f64) -> u32 {
    tier_points(cgpa, CGPA_TIERS, CGPA_FLOOR)
}

pub fn iq_points(iq: f64) -> u32 {
    tier_points(iq, IQ_TIERS, IQ_FLOOR)
}

pub fn score(cgpa: f64, iq: f64) -> HeuristicScore {
    HeuristicScore {
        cgpa_points: cgpa_points(cgpa),
        iq_points: iq_points(iq),
    }
}

/// Deterministic tiered-threshold decision.
///
/// Inputs must already be finite; the engine checks that before calling.
pub fn heuristic_decision(cgpa: f64, iq: f64) -> Decision {
    let probability = score(cgpa, iq).probability();
    let label = if probability > PLACEMENT_THRESHOLD {
        Label::Placed
    } else {
        Label::NotPlaced
    };

    Decision::new(label, probability, Source::Heuristic)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
