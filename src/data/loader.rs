use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::models::{Question, ValidationError, DEFAULT_MAX_SELECTIONS, DEFAULT_POINTS};

/// Error raised while loading a question definition.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read file: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid question: {0}")]
    Invalid(#[from] ValidationError),

    #[error("Invalid choice #{index}: {source}")]
    InvalidChoice {
        index: usize,
        #[source]
        source: ValidationError,
    },
}

/// On-disk shape of a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuestionDefinition {
    pub title: String,
    #[serde(default = "default_points")]
    pub points: u32,
    #[serde(default = "default_max_selections")]
    pub max_selections: usize,
    #[serde(default)]
    pub choices: Vec<ChoiceDefinition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChoiceDefinition {
    pub text: String,
    #[serde(default)]
    pub correct: bool,
}

fn default_points() -> u32 {
    DEFAULT_POINTS
}

fn default_max_selections() -> usize {
    DEFAULT_MAX_SELECTIONS
}

impl QuestionDefinition {
    /// Build a question, running every model validation.
    pub fn build(self) -> Result<Question, LoadError> {
        let mut question = Question::builder(self.title)
            .points(self.points)
            .max_selections(self.max_selections)
            .build()?;

        for (index, choice) in self.choices.into_iter().enumerate() {
            question
                .add_choice_with(choice.text, choice.correct)
                .map_err(|source| LoadError::InvalidChoice { index, source })?;
        }

        Ok(question)
    }
}

impl From<&Question> for QuestionDefinition {
    fn from(question: &Question) -> Self {
        Self {
            title: question.title().to_string(),
            points: question.points(),
            max_selections: question.max_selections(),
            choices: question
                .choices()
                .iter()
                .map(|c| ChoiceDefinition {
                    text: c.text().to_string(),
                    correct: c.is_correct(),
                })
                .collect(),
        }
    }
}

pub fn parse_question(json: &str) -> Result<Question, LoadError> {
    let definition: QuestionDefinition = serde_json::from_str(json)?;
    debug!(choices = definition.choices.len(), "Parsed question definition");
    definition.build()
}

pub fn load_question_from_json<P: AsRef<Path>>(path: P) -> Result<Question, LoadError> {
    let path = path.as_ref();
    let json_content = fs::read_to_string(path)?;
    let question = parse_question(&json_content)?;
    info!(path = %path.display(), id = %question.id(), "Loaded question");
    Ok(question)
}
