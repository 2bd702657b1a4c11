use tracing::{debug, info};

use crate::models::{AppState, Choice, ChoiceId, Question, ValidationError};

/// Interactive selection state for a single question.
pub struct App {
    pub state: AppState,
    question: Question,
    cursor: usize,
    selected: Vec<ChoiceId>,
    correct: Vec<ChoiceId>,
    message: Option<String>,
}

impl App {
    pub fn new(question: Question) -> Self {
        Self {
            state: AppState::Answering,
            question,
            cursor: 0,
            selected: Vec::new(),
            correct: Vec::new(),
            message: None,
        }
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Toggled choice ids, in the question's choice order.
    pub fn selected(&self) -> &[ChoiceId] {
        &self.selected
    }

    /// Ids returned by the last submitted selection.
    pub fn correct(&self) -> &[ChoiceId] {
        &self.correct
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_selected(&self, choice: &Choice) -> bool {
        self.selected.contains(&choice.id())
    }

    pub fn select_next_choice(&mut self) {
        let count = self.question.choices().len();
        if count > 0 {
            self.cursor = (self.cursor + 1) % count;
        }
    }

    pub fn select_previous_choice(&mut self) {
        let count = self.question.choices().len();
        if count > 0 {
            self.cursor = (self.cursor + count - 1) % count;
        }
    }

    /// Toggle the choice under the cursor. Refuses to go past the
    /// question's selection limit.
    pub fn toggle_current(&mut self) {
        let Some(choice) = self.question.choices().get(self.cursor) else {
            return;
        };
        let id = choice.id();

        if let Some(pos) = self.selected.iter().position(|s| *s == id) {
            self.selected.remove(pos);
            self.message = None;
            return;
        }

        let max = self.question.max_selections();
        if self.selected.len() >= max {
            self.message = Some(format!("At most {} selection(s) allowed", max));
            return;
        }

        self.selected.push(id);
        let order: Vec<ChoiceId> = self.question.choices().iter().map(|c| c.id()).collect();
        self.selected
            .sort_by_key(|s| order.iter().position(|o| o == s));
        self.message = None;
        debug!(choice = %id, selected = self.selected.len(), "Toggled choice");
    }

    pub fn submit(&mut self) -> Result<(), ValidationError> {
        match self.question.select_choices(&self.selected) {
            Ok(correct) => {
                info!(
                    question = %self.question.id(),
                    selected = self.selected.len(),
                    correct = correct.len(),
                    "Submitted selection"
                );
                self.correct = correct;
                self.message = None;
                self.state = AppState::Result;
                Ok(())
            }
            Err(err) => {
                self.message = Some(err.to_string());
                Err(err)
            }
        }
    }

    pub fn restart(&mut self) {
        self.state = AppState::Answering;
        self.cursor = 0;
        self.selected.clear();
        self.correct.clear();
        self.message = None;
    }
}
