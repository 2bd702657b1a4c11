mod error;
mod id;
mod question;

pub use error::ValidationError;
pub use id::{ChoiceId, QuestionId, QuestionIds};
pub use question::{
    Choice, Question, QuestionBuilder, DEFAULT_MAX_SELECTIONS, DEFAULT_POINTS,
    MAX_CHOICE_TEXT_LENGTH, MAX_POINTS, MAX_TITLE_LENGTH, MIN_POINTS,
};

/// Which screen the interactive session is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Answering,
    Result,
}
