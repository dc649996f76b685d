//! Match score normalization.
//!
//! Models disagree on score scale: most return 0–100, some return a 0–1 confidence.
//! Values in (0, 1] are read as fractions; everything is rounded and clamped to [0, 100].

use serde_json::Value;
use thiserror::Error;

pub const MAX_SCORE: u8 = 100;

#[derive(Debug, Error, PartialEq)]
pub enum ScoreCoercionError {
    #[error("match_score is missing")]
    Missing,

    #[error("match_score is not numeric: {0}")]
    NotNumeric(String),

    #[error("match_score is not finite")]
    NotFinite,
}

/// Coerces a raw `match_score` value into the [0, 100] integer range.
pub fn normalize_match_score(raw: Option<&Value>) -> Result<u8, ScoreCoercionError> {
    let value = coerce_to_f64(raw)?;
    Ok(scale_and_clamp(value))
}

fn coerce_to_f64(raw: Option<&Value>) -> Result<f64, ScoreCoercionError> {
    let value = match raw {
        None | Some(Value::Null) => return Err(ScoreCoercionError::Missing),
        Some(Value::Number(n)) => n
            .as_f64()
            .ok_or_else(|| ScoreCoercionError::NotNumeric(n.to_string()))?,
        Some(Value::String(s)) => s
            .trim()
            .trim_end_matches('%')
            .trim()
            .parse::<f64>()
            .map_err(|_| ScoreCoercionError::NotNumeric(s.clone()))?,
        Some(other) => return Err(ScoreCoercionError::NotNumeric(other.to_string())),
    };

    if !value.is_finite() {
        return Err(ScoreCoercionError::NotFinite);
    }
    Ok(value)
}

fn scale_and_clamp(value: f64) -> u8 {
    let scaled = if value > 0.0 && value <= 1.0 {
        value * 100.0
    } else {
        value
    };
    scaled.round().clamp(0.0, f64::from(MAX_SCORE)) as u8
}
