use std::ops::RangeInclusive;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::intelligence::{Decision, Label};

pub const CGPA_RANGE: RangeInclusive<f64> = 0.0..=10.0;
pub const IQ_RANGE: RangeInclusive<f64> = 50.0..=200.0;

const PLACED_MESSAGES: &[&str] = &[
    "🎯 Placement hogya! Jaa, jee le apni zindagi! 🥳",
    "🚀 Company ne pakad liya! Ab bas chutti! 🏖️",
    "💰 Package mil gaya! Party time! 🍾",
    "🏆 Selection ho gaya! Champion! 🏅",
    "🎊 Congratulations! Ab trip plan kar! ✈️",
];

const NOT_PLACED_MESSAGES: &[&str] = &[
    "😢 Nhi hoga placement! Lage reh! 📚",
    "💔 Aaj nahi toh kal! Keep trying! 💪",
    "📉 Thoda aur mehnat chahiye! 🤓",
    "😅 Chill kar! Abhi time hai! 🕰️",
    "🤔 CGPA improve kar, IQ badha! Next time pakka! ✨",
];

/// Request field rejected before it reaches the decision engine.
#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("missing field: {0}")]
    Missing(&'static str),

    #[error("{field} must be numeric, got {value:?}")]
    NotNumeric { field: &'static str, value: String },

    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },

    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// A JSON number, or a string holding one (`"7.5"`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    Number(f64),
    Text(String),
}

impl NumericInput {
    fn parse(&self, field: &'static str) -> Result<f64, InputError> {
        let value = match self {
            NumericInput::Number(n) => *n,
            NumericInput::Text(s) => s.trim().parse::<f64>().map_err(|_| InputError::NotNumeric {
                field,
                value: s.clone(),
            })?,
        };

        if value.is_finite() {
            Ok(value)
        } else {
            Err(InputError::NonFinite { field })
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PredictRequest {
    #[serde(default)]
    pub cgpa: Option<NumericInput>,
    #[serde(default)]
    pub iq: Option<NumericInput>,
}

/// Coerced and range-checked request values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scores {
    pub cgpa: f64,
    pub iq: f64,
}

impl PredictRequest {
    pub fn validate(&self) -> Result<Scores, InputError> {
        let cgpa = require("cgpa", self.cgpa.as_ref(), &CGPA_RANGE)?;
        let iq = require("iq", self.iq.as_ref(), &IQ_RANGE)?;
        Ok(Scores { cgpa, iq })
    }
}

fn require(
    field: &'static str,
    input: Option<&NumericInput>,
    range: &RangeInclusive<f64>,
) -> Result<f64, InputError> {
    let value = input.ok_or(InputError::Missing(field))?.parse(field)?;
    if !range.contains(&value) {
        return Err(InputError::OutOfRange {
            field,
            value,
            min: *range.start(),
            max: *range.end(),
        });
    }
    Ok(value)
}

#[derive(Debug, Clone, Serialize)]
pub struct PredictResponse {
    pub success: bool,
    pub prediction: u8,
    pub probability: f64,
    pub message: &'static str,
    pub fun_message: &'static str,
    pub cgpa: f64,
    pub iq: f64,
    pub model_type: &'static str,
    pub confidence: u8,
}

impl PredictResponse {
    pub fn new(decision: &Decision, scores: Scores, fun_message: &'static str) -> Self {
        Self {
            success: true,
            prediction: decision.label().as_int(),
            probability: decision.probability(),
            message: decision.label().message(),
            fun_message,
            cgpa: scores.cgpa,
            iq: scores.iq,
            model_type: decision.source().model_type(),
            confidence: decision.confidence(),
        }
    }
}

/// Random flavour text for the given outcome.
pub fn fun_message<R: Rng + ?Sized>(label: Label, rng: &mut R) -> &'static str {
    let pool = match label {
        Label::Placed => PLACED_MESSAGES,
        Label::NotPlaced => NOT_PLACED_MESSAGES,
    };
    pool.choose(rng).copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intelligence::heuristic_decision;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn parse(body: &str) -> PredictRequest {
        serde_json::from_str(body).expect("request should deserialize")
    }

    #[test]
    fn test_numbers_and_numeric_strings_accepted() {
        let scores = parse(r#"{"cgpa": 7.5, "iq": 130}"#).validate().unwrap();
        assert_eq!(scores, Scores { cgpa: 7.5, iq: 130.0 });

        let scores = parse(r#"{"cgpa": " 8.1 ", "iq": "135"}"#).validate().unwrap();
        assert_eq!(scores, Scores { cgpa: 8.1, iq: 135.0 });
    }

    #[test]
    fn test_missing_fields_rejected() {
        assert_eq!(parse(r#"{"iq": 120}"#).validate(), Err(InputError::Missing("cgpa")));
        assert_eq!(
            parse(r#"{"cgpa": 7, "iq": null}"#).validate(),
            Err(InputError::Missing("iq"))
        );
    }

    #[test]
    fn test_non_numeric_string_rejected() {
        let err = parse(r#"{"cgpa": "seven", "iq": 120}"#).validate().unwrap_err();
        assert_eq!(
            err,
            InputError::NotNumeric {
                field: "cgpa",
                value: "seven".into()
            }
        );
    }

    #[test]
    fn test_nan_string_rejected_as_non_finite() {
        let err = parse(r#"{"cgpa": "NaN", "iq": 120}"#).validate().unwrap_err();
        assert_eq!(err, InputError::NonFinite { field: "cgpa" });

        let err = parse(r#"{"cgpa": 7, "iq": "inf"}"#).validate().unwrap_err();
        assert_eq!(err, InputError::NonFinite { field: "iq" });
    }

    #[test]
    fn test_range_is_inclusive() {
        assert!(parse(r#"{"cgpa": 0, "iq": 50}"#).validate().is_ok());
        assert!(parse(r#"{"cgpa": 10, "iq": 200}"#).validate().is_ok());

        assert!(matches!(
            parse(r#"{"cgpa": 10.1, "iq": 120}"#).validate(),
            Err(InputError::OutOfRange { field: "cgpa", .. })
        ));
        assert!(matches!(
            parse(r#"{"cgpa": 7, "iq": 49}"#).validate(),
            Err(InputError::OutOfRange { field: "iq", .. })
        ));
    }

    #[test]
    fn test_response_from_heuristic_decision() {
        let scores = Scores { cgpa: 6.0, iq: 100.0 };
        let decision = heuristic_decision(scores.cgpa, scores.iq);
        let resp = PredictResponse::new(&decision, scores, "msg");

        assert!(resp.success);
        assert_eq!(resp.prediction, 0);
        assert_eq!(resp.message, "Not Placed");
        assert_eq!(resp.model_type, "demo");
        assert_eq!(resp.confidence, 30);
    }

    #[test]
    fn test_fun_message_matches_label() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            assert!(PLACED_MESSAGES.contains(&fun_message(Label::Placed, &mut rng)));
            assert!(NOT_PLACED_MESSAGES.contains(&fun_message(Label::NotPlaced, &mut rng)));
        }
    }
}
