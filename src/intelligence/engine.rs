use std::sync::Arc;

use thiserror::Error;

use super::classifier::{ClassifierUnavailable, Features, TrainedClassifier};
use super::decision::{Decision, Label, Source};
use super::scorer::heuristic_decision;

/// Tolerance on `P(0) + P(1) == 1`.
const PROBABILITY_SUM_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Error, PartialEq)]
pub enum DecisionError {
    #[error("invalid input: {field} must be a finite number, got {value}")]
    InvalidInput { field: &'static str, value: f64 },
}

/// A decision plus, when the heuristic path ran despite a classifier being
/// configured, the reason the classifier was skipped.
#[derive(Debug)]
pub struct Evaluation {
    pub decision: Decision,
    pub fallback: Option<ClassifierUnavailable>,
}

/// Maps `(cgpa, iq)` to a [`Decision`].
///
/// Holds no mutable state; one instance is built at startup and shared by
/// every request.
#[derive(Clone, Default)]
pub struct DecisionEngine {
    classifier: Option<Arc<dyn TrainedClassifier>>,
}

impl DecisionEngine {
    pub fn new(classifier: Option<Arc<dyn TrainedClassifier>>) -> Self {
        Self { classifier }
    }

    pub fn heuristic_only() -> Self {
        Self::default()
    }

    pub fn with_classifier(classifier: Arc<dyn TrainedClassifier>) -> Self {
        Self::new(Some(classifier))
    }

    pub fn has_classifier(&self) -> bool {
        self.classifier.is_some()
    }

    pub fn classifier_name(&self) -> Option<&str> {
        self.classifier.as_deref().map(|c| c.name())
    }

    pub fn classify(&self, cgpa: f64, iq: f64) -> Result<Decision, DecisionError> {
        self.evaluate(cgpa, iq).map(|e| e.decision)
    }

    pub fn evaluate(&self, cgpa: f64, iq: f64) -> Result<Evaluation, DecisionError> {
        evaluate(cgpa, iq, self.classifier.as_deref())
    }
}

impl std::fmt::Debug for DecisionEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecisionEngine")
            .field("classifier", &self.classifier_name())
            .finish()
    }
}

/// Classify with an optional classifier, falling back to the heuristic
/// scorer whenever the classifier cannot answer.
pub fn classify(
    cgpa: f64,
    iq: f64,
    classifier: Option<&dyn TrainedClassifier>,
) -> Result<Decision, DecisionError> {
    evaluate(cgpa, iq, classifier).map(|e| e.decision)
}

fn evaluate(
    cgpa: f64,
    iq: f64,
    classifier: Option<&dyn TrainedClassifier>,
) -> Result<Evaluation, DecisionError> {
    ensure_finite("cgpa", cgpa)?;
    ensure_finite("iq", iq)?;

    let Some(classifier) = classifier else {
        return Ok(Evaluation {
            decision: heuristic_decision(cgpa, iq),
            fallback: None,
        });
    };

    match trained_decision(classifier, &[cgpa, iq]) {
        Ok(decision) => Ok(Evaluation {
            decision,
            fallback: None,
        }),
        Err(reason) => Ok(Evaluation {
            decision: heuristic_decision(cgpa, iq),
            fallback: Some(reason),
        }),
    }
}

fn ensure_finite(field: &'static str, value: f64) -> Result<(), DecisionError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(DecisionError::InvalidInput { field, value })
    }
}

fn trained_decision(
    classifier: &dyn TrainedClassifier,
    features: &Features,
) -> Result<Decision, ClassifierUnavailable> {
    let raw_label = classifier.predict(features)?;
    let label = Label::from_int(raw_label).ok_or_else(|| {
        ClassifierUnavailable::InvalidOutput(format!("label {raw_label} is not 0 or 1"))
    })?;

    let pair = classifier.predict_probability(features)?;
    validate_probabilities(&pair)?;

    let probability = pair[usize::from(label.as_int())];
    Ok(Decision::new(label, probability, Source::TrainedClassifier))
}

fn validate_probabilities(pair: &[f64; 2]) -> Result<(), ClassifierUnavailable> {
    if pair.iter().any(|p| !p.is_finite() || !(0.0..=1.0).contains(p)) {
        return Err(ClassifierUnavailable::InvalidOutput(format!(
            "probabilities {pair:?} outside [0, 1]"
        )));
    }
    if (pair[0] + pair[1] - 1.0).abs() > PROBABILITY_SUM_TOLERANCE {
        return Err(ClassifierUnavailable::InvalidOutput(format!(
            "probabilities {pair:?} do not sum to 1"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
