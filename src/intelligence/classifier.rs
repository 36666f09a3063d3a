use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// `[cgpa, iq]`
pub type Features = [f64; 2];

/// Reasons a trained classifier cannot produce a usable answer.
///
/// Only ever observed by the decision engine, which falls back to the
/// heuristic scorer. Never surfaced to API clients.
#[derive(Debug, Error)]
pub enum ClassifierUnavailable {
    #[error("model artifact not found at {0}")]
    MissingArtifact(PathBuf),

    #[error("failed to read model artifact: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed model artifact: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("{what} shape mismatch: expected {expected}, got {actual}")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("classifier returned invalid output: {0}")]
    InvalidOutput(String),
}

/// Capability of an externally trained binary classifier.
///
/// Injected into the decision engine at construction time; implementations
/// must be ready to predict (any artifact I/O happens before construction).
pub trait TrainedClassifier: Send + Sync {
    /// Predicted class: 0 = not placed, 1 = placed.
    fn predict(&self, features: &Features) -> Result<u8, ClassifierUnavailable>;

    /// `[P(class 0), P(class 1)]`, summing to 1.
    fn predict_probability(&self, features: &Features) -> Result<[f64; 2], ClassifierUnavailable>;

    fn name(&self) -> &str {
        "trained"
    }
}

// ---------------------------------------------------------------------------
// Logistic regression artifact
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
struct Scaler {
    mean: Vec<f64>,
    scale: Vec<f64>,
}

#[derive(Debug, Clone, Deserialize)]
struct LogisticArtifact {
    coefficients: Vec<f64>,
    intercept: f64,
    #[serde(default)]
    scaler: Option<Scaler>,
}

/// Binary logistic regression exported from a trained model as JSON.
///
/// ```json
/// { "coefficients": [0.9, 0.02], "intercept": -8.1,
///   "scaler": { "mean": [6.9, 123.0], "scale": [1.1, 15.0] } }
/// ```
///
/// `scaler` is optional; when present features are standardised before the
/// linear term.
#[derive(Debug, Clone, PartialEq)]
pub struct LogisticModel {
    weights: Features,
    intercept: f64,
    mean: Features,
    scale: Features,
}

impl LogisticModel {
    pub fn new(weights: Features, intercept: f64) -> Self {
        Self {
            weights,
            intercept,
            mean: [0.0, 0.0],
            scale: [1.0, 1.0],
        }
    }

    pub fn with_scaler(mut self, mean: Features, scale: Features) -> Self {
        self.mean = mean;
        self.scale = scale;
        self
    }

    /// Load and validate an artifact from disk.
    pub fn from_path(path: &Path) -> Result<Self, ClassifierUnavailable> {
        if !path.exists() {
            return Err(ClassifierUnavailable::MissingArtifact(path.to_path_buf()));
        }
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, ClassifierUnavailable> {
        let artifact: LogisticArtifact = serde_json::from_str(raw)?;

        let weights = to_pair("coefficients", &artifact.coefficients)?;
        let mut model = Self::new(weights, artifact.intercept);

        if let Some(scaler) = artifact.scaler {
            let mean = to_pair("scaler.mean", &scaler.mean)?;
            let scale = to_pair("scaler.scale", &scaler.scale)?;
            model = model.with_scaler(mean, scale);
        }

        model.validate()?;
        Ok(model)
    }

    fn validate(&self) -> Result<(), ClassifierUnavailable> {
        let all_finite = self
            .weights
            .iter()
            .chain(self.mean.iter())
            .chain(self.scale.iter())
            .chain(std::iter::once(&self.intercept))
            .all(|v| v.is_finite());

        if !all_finite {
            return Err(ClassifierUnavailable::InvalidOutput(
                "artifact contains non-finite parameters".into(),
            ));
        }
        if self.scale.iter().any(|s| *s == 0.0) {
            return Err(ClassifierUnavailable::InvalidOutput(
                "scaler has a zero scale".into(),
            ));
        }
        Ok(())
    }

    /// P(placed) for the given features.
    fn positive_probability(&self, features: &Features) -> f64 {
        let z: f64 = features
            .iter()
            .zip(self.mean.iter().zip(self.scale.iter()))
            .zip(self.weights.iter())
            .map(|((x, (m, s)), w)| w * (x - m) / s)
            .sum::<f64>()
            + self.intercept;

        1.0 / (1.0 + (-z).exp())
    }
}

impl TrainedClassifier for LogisticModel {
    fn predict(&self, features: &Features) -> Result<u8, ClassifierUnavailable> {
        Ok(u8::from(self.positive_probability(features) > 0.5))
    }

    fn predict_probability(&self, features: &Features) -> Result<[f64; 2], ClassifierUnavailable> {
        let p = self.positive_probability(features);
        Ok([1.0 - p, p])
    }

    fn name(&self) -> &str {
        "logistic_regression"
    }
}

fn to_pair(what: &'static str, values: &[f64]) -> Result<Features, ClassifierUnavailable> {
    match values {
        [a, b] => Ok([*a, *b]),
        _ => Err(ClassifierUnavailable::ShapeMismatch {
            what,
            expected: 2,
            actual: values.len(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_artifact_without_scaler() {
        let model = LogisticModel::from_json(r#"{"coefficients": [1.0, 0.05], "intercept": -13.0}"#)
            .expect("valid artifact");
        assert_eq!(model, LogisticModel::new([1.0, 0.05], -13.0));
    }

    #[test]
    fn test_parse_artifact_with_scaler() {
        let raw = r#"{
            "coefficients": [2.0, 1.0],
            "intercept": 0.5,
            "scaler": { "mean": [7.0, 125.0], "scale": [1.0, 15.0] }
        }"#;
        let model = LogisticModel::from_json(raw).expect("valid artifact");
        assert_eq!(
            model,
            LogisticModel::new([2.0, 1.0], 0.5).with_scaler([7.0, 125.0], [1.0, 15.0])
        );
    }

    #[test]
    fn test_bundled_example_artifact_loads() {
        let raw = include_str!("../../backend/model.example.json");
        let model = LogisticModel::from_json(raw).expect("example artifact should be valid");
        assert_eq!(model.predict(&[9.0, 140.0]).unwrap(), 1);
        assert_eq!(model.predict(&[5.0, 80.0]).unwrap(), 0);
    }

    #[test]
    fn test_coefficient_shape_mismatch() {
        let err = LogisticModel::from_json(r#"{"coefficients": [1.0, 2.0, 3.0], "intercept": 0.0}"#)
            .unwrap_err();
        assert!(matches!(
            err,
            ClassifierUnavailable::ShapeMismatch { expected: 2, actual: 3, .. }
        ));
    }

    #[test]
    fn test_zero_scale_rejected() {
        let raw = r#"{"coefficients": [1.0, 1.0], "intercept": 0.0,
                      "scaler": {"mean": [0.0, 0.0], "scale": [0.0, 1.0]}}"#;
        assert!(matches!(
            LogisticModel::from_json(raw),
            Err(ClassifierUnavailable::InvalidOutput(_))
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            LogisticModel::from_json("not json"),
            Err(ClassifierUnavailable::Malformed(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let path = Path::new("/definitely/not/here/model.json");
        assert!(matches!(
            LogisticModel::from_path(path),
            Err(ClassifierUnavailable::MissingArtifact(_))
        ));
    }

    #[test]
    fn test_probabilities_sum_to_one_and_agree_with_label() {
        let model = LogisticModel::new([1.0, 0.05], -13.0);

        // z = 9 + 7 - 13 = 3 → placed
        let high = [9.0, 140.0];
        let [p0, p1] = model.predict_probability(&high).unwrap();
        assert!((p0 + p1 - 1.0).abs() < 1e-12);
        assert!(p1 > 0.5);
        assert_eq!(model.predict(&high).unwrap(), 1);

        // z = 5 + 4 - 13 = -4 → not placed
        let low = [5.0, 80.0];
        let [p0, p1] = model.predict_probability(&low).unwrap();
        assert!(p0 > 0.5);
        assert_eq!(model.predict(&low).unwrap(), 0);
    }

    #[test]
    fn test_decision_boundary_is_not_placed() {
        // z = 0 → p = 0.5 → class 0
        let model = LogisticModel::new([0.0, 0.0], 0.0);
        assert_eq!(model.predict(&[7.0, 120.0]).unwrap(), 0);
    }
}
