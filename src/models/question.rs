use tracing::debug;

use super::error::ValidationError;
use super::id::{ChoiceId, ChoiceIds, QuestionId, QuestionIds};

pub const MAX_TITLE_LENGTH: usize = 200;
pub const MIN_POINTS: u32 = 1;
pub const MAX_POINTS: u32 = 100;
pub const MAX_CHOICE_TEXT_LENGTH: usize = 100;

pub const DEFAULT_POINTS: u32 = 1;
pub const DEFAULT_MAX_SELECTIONS: usize = 1;

/// An answer option. Only exists inside the [`Question`] that created it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    id: ChoiceId,
    text: String,
    is_correct: bool,
}

impl Choice {
    pub fn id(&self) -> ChoiceId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_correct(&self) -> bool {
        self.is_correct
    }
}

/// A quiz question owning an ordered list of choices.
///
/// Every instance holds a valid title, points value and selection limit;
/// there is no way to build or mutate one into an invalid state.
#[derive(Debug)]
pub struct Question {
    id: QuestionId,
    title: String,
    points: u32,
    max_selections: usize,
    choices: Vec<Choice>,
    choice_ids: ChoiceIds,
}

impl Question {
    /// Create a question worth one point that allows a single selection.
    pub fn new(title: impl Into<String>) -> Result<Self, ValidationError> {
        Self::builder(title).build()
    }

    pub fn builder(title: impl Into<String>) -> QuestionBuilder<'static> {
        QuestionBuilder {
            title: title.into(),
            points: DEFAULT_POINTS,
            max_selections: DEFAULT_MAX_SELECTIONS,
            ids: QuestionIds::process(),
        }
    }

    pub fn id(&self) -> QuestionId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn max_selections(&self) -> usize {
        self.max_selections
    }

    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    pub fn choice(&self, id: ChoiceId) -> Option<&Choice> {
        self.choices.iter().find(|c| c.id == id)
    }

    /// Append an incorrect choice.
    pub fn add_choice(&mut self, text: impl Into<String>) -> Result<&Choice, ValidationError> {
        self.add_choice_with(text, false)
    }

    pub fn add_choice_with(
        &mut self,
        text: impl Into<String>,
        is_correct: bool,
    ) -> Result<&Choice, ValidationError> {
        let text = text.into();
        let len = text.chars().count();
        if len == 0 || len > MAX_CHOICE_TEXT_LENGTH {
            return Err(ValidationError::ChoiceTextLength { len });
        }

        let id = self.choice_ids.next_id();
        debug!(question = %self.id, choice = %id, is_correct, "Adding choice");
        self.choices.push(Choice {
            id,
            text,
            is_correct,
        });

        let index = self.choices.len() - 1;
        Ok(&self.choices[index])
    }

    /// Remove the choice with `id`, if there is one.
    ///
    /// The id is not handed out again.
    pub fn remove_choice_by_id(&mut self, id: ChoiceId) -> Option<Choice> {
        let index = self.choices.iter().position(|c| c.id == id)?;
        debug!(question = %self.id, choice = %id, "Removing choice");
        Some(self.choices.remove(index))
    }

    /// Drop every choice. Ids keep counting from where they were.
    pub fn remove_all_choices(&mut self) {
        debug!(question = %self.id, count = self.choices.len(), "Removing all choices");
        self.choices.clear();
    }

    /// Mark the listed choices as correct.
    ///
    /// Choices that are not listed keep their current flag. Unknown ids are
    /// ignored.
    pub fn set_correct_choices(&mut self, ids: &[ChoiceId]) {
        for choice in self.choices.iter_mut().filter(|c| ids.contains(&c.id)) {
            choice.is_correct = true;
        }
    }

    /// Reset every choice to incorrect.
    pub fn clear_correct_choices(&mut self) {
        for choice in &mut self.choices {
            choice.is_correct = false;
        }
    }

    /// Select up to `max_selections` choices and return the ids of the
    /// selected ones that are correct, in the question's choice order.
    ///
    /// Ids that match no choice are ignored, but still count towards the
    /// limit.
    pub fn select_choices(&self, ids: &[ChoiceId]) -> Result<Vec<ChoiceId>, ValidationError> {
        if ids.len() > self.max_selections {
            return Err(ValidationError::TooManySelections {
                given: ids.len(),
                max: self.max_selections,
            });
        }

        let correct: Vec<ChoiceId> = self
            .choices
            .iter()
            .filter(|c| c.is_correct && ids.contains(&c.id))
            .map(|c| c.id)
            .collect();

        debug!(
            question = %self.id,
            selected = ids.len(),
            correct = correct.len(),
            "Selected choices"
        );
        Ok(correct)
    }
}

/// Builder for a [`Question`] with non-default points, selection limit or id
/// sequence.
#[derive(Debug)]
pub struct QuestionBuilder<'a> {
    title: String,
    points: u32,
    max_selections: usize,
    ids: &'a QuestionIds,
}

impl<'a> QuestionBuilder<'a> {
    pub fn points(mut self, points: u32) -> Self {
        self.points = points;
        self
    }

    pub fn max_selections(mut self, max_selections: usize) -> Self {
        self.max_selections = max_selections;
        self
    }

    /// Take the id from `ids` instead of the process-wide sequence.
    pub fn ids<'b>(self, ids: &'b QuestionIds) -> QuestionBuilder<'b> {
        QuestionBuilder {
            title: self.title,
            points: self.points,
            max_selections: self.max_selections,
            ids,
        }
    }

    /// Validate and build. An id is only consumed on success.
    pub fn build(self) -> Result<Question, ValidationError> {
        let len = self.title.chars().count();
        if len == 0 || len > MAX_TITLE_LENGTH {
            return Err(ValidationError::TitleLength { len });
        }
        if !(MIN_POINTS..=MAX_POINTS).contains(&self.points) {
            return Err(ValidationError::PointsOutOfRange {
                points: self.points,
            });
        }
        if self.max_selections == 0 {
            return Err(ValidationError::ZeroMaxSelections);
        }

        let id = self.ids.next_id();
        debug!(question = %id, points = self.points, max_selections = self.max_selections, "Created question");
        Ok(Question {
            id,
            title: self.title,
            points: self.points,
            max_selections: self.max_selections,
            choices: Vec::new(),
            choice_ids: ChoiceIds::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(question: &Question) -> Vec<u64> {
        question.choices().iter().map(|c| c.id().get()).collect()
    }

    #[test]
    fn test_create_question_defaults() {
        let question = Question::new("q1").unwrap();
        assert_eq!(question.title(), "q1");
        assert_eq!(question.points(), 1);
        assert_eq!(question.max_selections(), 1);
        assert!(question.choices().is_empty());
    }

    #[test]
    fn test_questions_get_distinct_ids() {
        let q1 = Question::new("q1").unwrap();
        let q2 = Question::new("q2").unwrap();
        assert_ne!(q1.id(), q2.id());
        assert!(q2.id() > q1.id());
    }

    #[test]
    fn test_injected_sequence() {
        let seq = QuestionIds::new();
        let q1 = Question::builder("q1").ids(&seq).build().unwrap();
        let q2 = Question::builder("q2").ids(&seq).build().unwrap();
        assert_eq!(q1.id().get(), 1);
        assert_eq!(q2.id().get(), 2);
    }

    #[test]
    fn test_failed_build_does_not_consume_id() {
        let seq = QuestionIds::new();
        assert!(Question::builder("").ids(&seq).build().is_err());
        let question = Question::builder("q").ids(&seq).build().unwrap();
        assert_eq!(question.id().get(), 1);
    }

    #[test]
    fn test_title_length_bounds() {
        assert!(Question::new("a").is_ok());
        assert!(Question::new("a".repeat(200)).is_ok());
        assert_eq!(
            Question::new("").unwrap_err(),
            ValidationError::TitleLength { len: 0 }
        );
        assert_eq!(
            Question::new("a".repeat(201)).unwrap_err(),
            ValidationError::TitleLength { len: 201 }
        );
        assert!(Question::new("a".repeat(500)).is_err());
    }

    #[test]
    fn test_title_counts_characters_not_bytes() {
        // 200 two-byte characters
        assert!(Question::new("é".repeat(200)).is_ok());
    }

    #[test]
    fn test_points_bounds() {
        assert_eq!(Question::builder("q").points(1).build().unwrap().points(), 1);
        assert_eq!(Question::builder("q").points(100).build().unwrap().points(), 100);
        assert_eq!(
            Question::builder("q").points(0).build().unwrap_err(),
            ValidationError::PointsOutOfRange { points: 0 }
        );
        assert_eq!(
            Question::builder("q").points(101).build().unwrap_err(),
            ValidationError::PointsOutOfRange { points: 101 }
        );
    }

    #[test]
    fn test_zero_max_selections_rejected() {
        assert_eq!(
            Question::builder("q").max_selections(0).build().unwrap_err(),
            ValidationError::ZeroMaxSelections
        );
    }

    #[test]
    fn test_add_choice() {
        let mut question = Question::new("q1").unwrap();
        let choice = question.add_choice_with("a", false).unwrap();
        assert_eq!(choice.text(), "a");
        assert!(!choice.is_correct());
        assert_eq!(question.choices().len(), 1);
    }

    #[test]
    fn test_choice_text_bounds() {
        let mut question = Question::new("q1").unwrap();
        assert_eq!(
            question.add_choice("").unwrap_err(),
            ValidationError::ChoiceTextLength { len: 0 }
        );
        assert_eq!(
            question.add_choice("a".repeat(101)).unwrap_err(),
            ValidationError::ChoiceTextLength { len: 101 }
        );
        assert!(question.add_choice("a".repeat(100)).is_ok());
        assert_eq!(question.choices().len(), 1);
    }

    #[test]
    fn test_rejected_choice_does_not_consume_id() {
        let mut question = Question::new("q1").unwrap();
        assert!(question.add_choice("").is_err());
        assert_eq!(question.add_choice("a").unwrap().id().get(), 1);
    }

    #[test]
    fn test_choice_ids_increment() {
        let mut question = Question::new("q1").unwrap();
        for text in ["a", "b", "c"] {
            question.add_choice(text).unwrap();
        }
        assert_eq!(ids(&question), vec![1, 2, 3]);
    }

    #[test]
    fn test_remove_choice_keeps_order_and_counter() {
        let mut question = Question::new("q1").unwrap();
        let c1 = question.add_choice("a").unwrap().id();
        let c2 = question.add_choice("b").unwrap().id();

        let removed = question.remove_choice_by_id(c1).unwrap();
        assert_eq!(removed.text(), "a");

        let c3 = question.add_choice("c").unwrap().id();
        assert_eq!(c3.get(), c2.get() + 1);
        assert_eq!(ids(&question), vec![c2.get(), c3.get()]);
    }

    #[test]
    fn test_remove_unknown_choice_is_noop() {
        let mut question = Question::new("q1").unwrap();
        question.add_choice("a").unwrap();
        assert!(question.remove_choice_by_id(ChoiceId::from(42)).is_none());
        assert_eq!(ids(&question), vec![1]);
    }

    #[test]
    fn test_remove_all_choices_keeps_counter() {
        let mut question = Question::new("q1").unwrap();
        question.add_choice("a").unwrap();
        question.add_choice("b").unwrap();
        question.remove_all_choices();
        assert!(question.choices().is_empty());

        assert_eq!(question.add_choice("c").unwrap().id().get(), 3);
    }

    #[test]
    fn test_set_correct_choices_marks_listed() {
        let mut question = Question::new("q1").unwrap();
        let c1 = question.add_choice("a").unwrap().id();
        let c2 = question.add_choice("b").unwrap().id();
        question.set_correct_choices(&[c1, c2]);
        assert!(question.choice(c1).unwrap().is_correct());
        assert!(question.choice(c2).unwrap().is_correct());
    }

    #[test]
    fn test_set_correct_choices_leaves_unlisted_unchanged() {
        let mut question = Question::new("q1").unwrap();
        let c1 = question.add_choice_with("a", true).unwrap().id();
        let c2 = question.add_choice("b").unwrap().id();
        let c3 = question.add_choice("c").unwrap().id();

        question.set_correct_choices(&[c2]);

        assert!(question.choice(c1).unwrap().is_correct());
        assert!(question.choice(c2).unwrap().is_correct());
        assert!(!question.choice(c3).unwrap().is_correct());
    }

    #[test]
    fn test_clear_correct_choices() {
        let mut question = Question::new("q1").unwrap();
        question.add_choice_with("a", true).unwrap();
        question.add_choice_with("b", true).unwrap();
        question.clear_correct_choices();
        assert!(question.choices().iter().all(|c| !c.is_correct()));
    }

    #[test]
    fn test_select_returns_correct_in_question_order() {
        let mut question = Question::builder("q1").max_selections(3).build().unwrap();
        let c1 = question.add_choice("a").unwrap().id();
        let c2 = question.add_choice_with("b", true).unwrap().id();
        let c3 = question.add_choice_with("c", true).unwrap().id();

        assert_eq!(question.select_choices(&[c1, c2, c3]).unwrap(), vec![c2, c3]);
        assert_eq!(question.select_choices(&[c3, c2]).unwrap(), vec![c2, c3]);
    }

    #[test]
    fn test_select_ignores_unknown_ids() {
        let mut question = Question::builder("q1").max_selections(2).build().unwrap();
        let c1 = question.add_choice_with("a", true).unwrap().id();
        let selected = question.select_choices(&[ChoiceId::from(999), c1]).unwrap();
        assert_eq!(selected, vec![c1]);
    }

    #[test]
    fn test_select_more_than_max_fails() {
        let mut question = Question::builder("q1").max_selections(1).build().unwrap();
        question.add_choice_with("a", true).unwrap();
        let err = question
            .select_choices(&[ChoiceId::from(999), ChoiceId::from(54)])
            .unwrap_err();
        assert_eq!(err, ValidationError::TooManySelections { given: 2, max: 1 });
    }
}
