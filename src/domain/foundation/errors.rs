//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Message shown in the result table when the composition does not add up.
pub const SUM_MUST_BE_100_MESSAGE: &str = "La somme des pourcentages doit être 100";

/// Errors raised while validating a composition request.
///
/// These are recoverable: callers receive them as values and render them,
/// the process never aborts on user input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("The sum of percentages must be 100, got {total_percent}")]
    CompositionSumInvalid { total_percent: f64 },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        actual: f64,
    },

    #[error("Expected {expected} element percentages, got {actual}")]
    WrongElementCount { expected: usize, actual: usize },
}

impl ValidationError {
    /// Creates a composition sum error.
    pub fn composition_sum_invalid(total_percent: f64) -> Self {
        ValidationError::CompositionSumInvalid { total_percent }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: f64, max: f64, actual: f64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an element count mismatch error.
    pub fn wrong_element_count(expected: usize, actual: usize) -> Self {
        ValidationError::WrongElementCount { expected, actual }
    }

    /// Returns the machine-readable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::CompositionSumInvalid { .. } => ErrorCode::CompositionSumInvalid,
            ValidationError::OutOfRange { .. } => ErrorCode::OutOfRange,
            ValidationError::WrongElementCount { .. } => ErrorCode::WrongElementCount,
        }
    }

    /// Returns the message displayed to the person filling in the form.
    pub fn user_message(&self) -> String {
        match self {
            ValidationError::CompositionSumInvalid { .. } => SUM_MUST_BE_100_MESSAGE.to_string(),
            ValidationError::OutOfRange { field, .. } => {
                format!("{} must range between 0 and 100", field)
            }
            ValidationError::WrongElementCount { .. } => self.to_string(),
        }
    }

    /// Whether this error is caused by the caller breaking the input contract
    /// rather than by the values a user typed.
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, ValidationError::WrongElementCount { .. })
    }
}

/// Machine-readable codes of rejected compositions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    CompositionSumInvalid,
    OutOfRange,
    WrongElementCount,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::CompositionSumInvalid => "COMPOSITION_SUM_INVALID",
            ErrorCode::OutOfRange => "OUT_OF_RANGE",
            ErrorCode::WrongElementCount => "WRONG_ELEMENT_COUNT",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composition_sum_invalid_displays_total() {
        let err = ValidationError::composition_sum_invalid(99.99);
        assert_eq!(
            format!("{}", err),
            "The sum of percentages must be 100, got 99.99"
        );
    }

    #[test]
    fn composition_sum_invalid_user_message_is_the_form_message() {
        let err = ValidationError::composition_sum_invalid(50.0);
        assert_eq!(err.user_message(), SUM_MUST_BE_100_MESSAGE);
    }

    #[test]
    fn out_of_range_displays_correctly() {
        let err = ValidationError::out_of_range("Fe", 0.0, 100.0, 120.5);
        assert_eq!(
            format!("{}", err),
            "Field 'Fe' must be between 0 and 100, got 120.5"
        );
        assert_eq!(err.user_message(), "Fe must range between 0 and 100");
    }

    #[test]
    fn only_wrong_element_count_is_a_contract_violation() {
        assert!(ValidationError::wrong_element_count(20, 3).is_contract_violation());
        assert!(!ValidationError::composition_sum_invalid(10.0).is_contract_violation());
        assert!(!ValidationError::out_of_range("C", 0.0, 100.0, -1.0).is_contract_violation());
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(
            format!("{}", ErrorCode::CompositionSumInvalid),
            "COMPOSITION_SUM_INVALID"
        );
        assert_eq!(format!("{}", ErrorCode::WrongElementCount), "WRONG_ELEMENT_COUNT");
    }

    #[test]
    fn every_error_code_comes_from_a_validation_error() {
        let codes: Vec<ErrorCode> = [
            ValidationError::composition_sum_invalid(99.0),
            ValidationError::out_of_range("Fe", 0.0, 100.0, 101.0),
            ValidationError::wrong_element_count(20, 0),
        ]
        .iter()
        .map(ValidationError::code)
        .collect();

        assert_eq!(
            codes,
            vec![
                ErrorCode::CompositionSumInvalid,
                ErrorCode::OutOfRange,
                ErrorCode::WrongElementCount,
            ]
        );
    }
}
