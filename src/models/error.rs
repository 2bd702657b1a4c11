//! Validation errors raised by the question model.

use thiserror::Error;

use super::question::{
    MAX_CHOICE_TEXT_LENGTH, MAX_POINTS, MAX_TITLE_LENGTH, MIN_POINTS,
};

/// A constraint on a question or choice was violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Title must be 1 to {limit} characters, got {len}", limit = MAX_TITLE_LENGTH)]
    TitleLength { len: usize },

    #[error("Points must be between {lo} and {hi}, got {points}", lo = MIN_POINTS, hi = MAX_POINTS)]
    PointsOutOfRange { points: u32 },

    #[error("max_selections must be at least 1")]
    ZeroMaxSelections,

    #[error("Choice text must be 1 to {limit} characters, got {len}", limit = MAX_CHOICE_TEXT_LENGTH)]
    ChoiceTextLength { len: usize },

    #[error("Selected {given} choices but at most {max} are allowed")]
    TooManySelections { given: usize, max: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_values() {
        let err = ValidationError::TitleLength { len: 201 };
        assert_eq!(err.to_string(), "Title must be 1 to 200 characters, got 201");

        let err = ValidationError::TooManySelections { given: 2, max: 1 };
        assert_eq!(
            err.to_string(),
            "Selected 2 choices but at most 1 are allowed"
        );
    }
}
