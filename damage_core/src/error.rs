//! Calculation errors

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Numeric inputs the engine validates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputField {
    TotalAttack,
    SkillPower,
    HitCount,
}

impl InputField {
    pub fn name(&self) -> &'static str {
        match self {
            InputField::TotalAttack => "totalAttack",
            InputField::SkillPower => "skillPower",
            InputField::HitCount => "hitCount",
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Validation failure raised before any arithmetic happens
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalculationError {
    #[error("Invalid input for {field}: {value} (must be a valid number)")]
    InvalidNumber { field: InputField, value: String },
    #[error("{field} value {value} is out of range ({min}-{max})")]
    OutOfRange {
        field: InputField,
        value: f64,
        min: f64,
        max: f64,
    },
}

impl CalculationError {
    /// The field that failed validation
    pub fn field(&self) -> InputField {
        match self {
            CalculationError::InvalidNumber { field, .. } => *field,
            CalculationError::OutOfRange { field, .. } => *field,
        }
    }
}

/// Check that a value is finite
pub fn ensure_finite(field: InputField, value: f64) -> Result<f64, CalculationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalculationError::InvalidNumber {
            field,
            value: value.to_string(),
        })
    }
}

/// Check that a finite value lies in `[min, max]`
pub fn ensure_in_range(field: InputField, value: f64, min: f64, max: f64) -> Result<f64, CalculationError> {
    if value < min || value > max {
        return Err(CalculationError::OutOfRange { field, value, min, max });
    }
    Ok(value)
}

/// Parse user-entered text into a finite number
pub fn parse_number(field: InputField, text: &str) -> Result<f64, CalculationError> {
    let trimmed = text.trim();
    let value: f64 = trimmed.parse().map_err(|_| CalculationError::InvalidNumber {
        field,
        value: trimmed.to_string(),
    })?;
    ensure_finite(field, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nan_is_invalid() {
        let err = ensure_finite(InputField::TotalAttack, f64::NAN).unwrap_err();
        assert_eq!(err.field(), InputField::TotalAttack);
        assert!(matches!(err, CalculationError::InvalidNumber { .. }));
    }

    #[test]
    fn test_infinity_is_invalid() {
        assert!(ensure_finite(InputField::HitCount, f64::INFINITY).is_err());
        assert!(ensure_finite(InputField::HitCount, f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_range_bounds_inclusive() {
        assert!(ensure_in_range(InputField::HitCount, 1.0, 1.0, 20.0).is_ok());
        assert!(ensure_in_range(InputField::HitCount, 20.0, 1.0, 20.0).is_ok());

        let err = ensure_in_range(InputField::HitCount, 0.0, 1.0, 20.0).unwrap_err();
        assert_eq!(
            err,
            CalculationError::OutOfRange {
                field: InputField::HitCount,
                value: 0.0,
                min: 1.0,
                max: 20.0,
            }
        );
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number(InputField::SkillPower, " 150.5 ").unwrap(), 150.5);

        let err = parse_number(InputField::SkillPower, "abc").unwrap_err();
        assert_eq!(
            err,
            CalculationError::InvalidNumber {
                field: InputField::SkillPower,
                value: "abc".to_string(),
            }
        );

        // "inf" parses as f64 but is not finite
        assert!(parse_number(InputField::SkillPower, "inf").is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = CalculationError::OutOfRange {
            field: InputField::HitCount,
            value: 0.0,
            min: 1.0,
            max: 20.0,
        };
        assert_eq!(err.to_string(), "hitCount value 0 is out of range (1-20)");

        let err = CalculationError::InvalidNumber {
            field: InputField::TotalAttack,
            value: "NaN".to_string(),
        };
        assert!(err.to_string().contains("totalAttack"));
    }
}
