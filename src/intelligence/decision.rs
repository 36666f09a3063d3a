use std::fmt;

/// Placement outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Placed,
    NotPlaced,
}

impl Label {
    /// Wire encoding: 1 = placed, 0 = not placed.
    pub fn as_int(&self) -> u8 {
        match self {
            Label::Placed => 1,
            Label::NotPlaced => 0,
        }
    }

    pub fn from_int(value: u8) -> Option<Self> {
        match value {
            1 => Some(Label::Placed),
            0 => Some(Label::NotPlaced),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Placed => "placed",
            Label::NotPlaced => "not_placed",
        }
    }

    /// Human-readable message returned to clients.
    pub fn message(&self) -> &'static str {
        match self {
            Label::Placed => "Placed",
            Label::NotPlaced => "Not Placed",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which path produced a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    TrainedClassifier,
    Heuristic,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::TrainedClassifier => "trained_classifier",
            Source::Heuristic => "heuristic",
        }
    }

    /// `model_type` field of the prediction response.
    pub fn model_type(&self) -> &'static str {
        match self {
            Source::TrainedClassifier => "real",
            Source::Heuristic => "demo",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `(label, probability, source)` triple produced per classification.
///
/// `probability` is always the confidence in `label` itself, never in its
/// complement. Fields are private so a decision cannot be altered after the
/// engine produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decision {
    label: Label,
    probability: f64,
    source: Source,
}

impl Decision {
    pub(crate) fn new(label: Label, probability: f64, source: Source) -> Self {
        Self {
            label,
            probability,
            source,
        }
    }

    pub fn label(&self) -> Label {
        self.label
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    pub fn source(&self) -> Source {
        self.source
    }

    pub fn is_placed(&self) -> bool {
        self.label == Label::Placed
    }

    /// Integer percentage, `round(probability * 100)`.
    pub fn confidence(&self) -> u8 {
        (self.probability * 100.0).round().clamp(0.0, 100.0) as u8
    }
}
