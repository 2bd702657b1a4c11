//! # quiz-model
//!
//! An in-memory model of a multiple-choice quiz question, with a JSON
//! definition loader and a terminal front end for answering one question.
//!
//! ## Usage
//!
//! ```rust
//! use quiz_model::{Question, ValidationError};
//!
//! fn main() -> Result<(), ValidationError> {
//!     let mut question = Question::builder("Which are Rust keywords?")
//!         .points(2)
//!         .max_selections(2)
//!         .build()?;
//!
//!     let fn_kw = question.add_choice_with("fn", true)?.id();
//!     let func = question.add_choice("func")?.id();
//!
//!     let correct = question.select_choices(&[func, fn_kw])?;
//!     assert_eq!(correct, vec![fn_kw]);
//!     Ok(())
//! }
//! ```

mod app;
mod data;
mod models;
pub mod terminal;
mod ui;

use std::io;
use std::path::Path;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use thiserror::Error;
use tracing::debug;

pub use app::App;
pub use data::{
    load_question_from_json, parse_question, ChoiceDefinition, LoadError, QuestionDefinition,
};
pub use models::{
    AppState, Choice, ChoiceId, Question, QuestionBuilder, QuestionId, QuestionIds,
    ValidationError, DEFAULT_MAX_SELECTIONS, DEFAULT_POINTS, MAX_CHOICE_TEXT_LENGTH, MAX_POINTS,
    MAX_TITLE_LENGTH, MIN_POINTS,
};

/// Error type for session operations.
#[derive(Error, Debug)]
pub enum QuizError {
    #[error("Failed to load question: {0}")]
    Load(#[from] LoadError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A single question answered interactively in the terminal.
pub struct Session {
    app: App,
}

impl Session {
    pub fn new(question: Question) -> Self {
        Self {
            app: App::new(question),
        }
    }

    /// Load the question from a JSON definition file.
    ///
    /// ```rust,no_run
    /// use quiz_model::Session;
    ///
    /// let session = Session::from_json("question.json").expect("Failed to load question");
    /// ```
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, QuizError> {
        let question = load_question_from_json(path)?;
        Ok(Self::new(question))
    }

    /// Take over the terminal until the user quits.
    ///
    /// Returns the final state, so the caller can report the last selection.
    pub fn run(mut self) -> Result<App, QuizError> {
        let mut term = terminal::init()?;
        run_event_loop(&mut term, &mut self.app)?;
        Ok(self.app)
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::AppTerminal, app: &mut App) -> Result<(), QuizError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code) {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the session should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    match app.state {
        AppState::Answering => handle_answering_input(app, key),
        AppState::Result => handle_result_input(app, key),
    }
}

fn handle_answering_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.select_previous_choice();
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.select_next_choice();
            false
        }
        KeyCode::Char(' ') => {
            app.toggle_current();
            false
        }
        KeyCode::Enter => {
            // The error is already shown on screen.
            if let Err(err) = app.submit() {
                debug!(error = %err, "Selection rejected");
            }
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        _ => false,
    }
}

fn handle_result_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.restart();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        _ => false,
    }
}
