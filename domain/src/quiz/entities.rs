//! Quiz domain entities
//!
//! [`Question`] is the aggregate root: it owns its [`Choice`]s, assigns
//! their ids, and is the only place correctness flags change. A choice
//! never exists outside a question and is dropped together with it.

use super::value_objects::{ChoiceId, QuestionId};
use crate::core::error::DomainError;
use serde::Serialize;

/// A single answer option owned by a [`Question`] (Entity)
///
/// Identity and text are fixed at creation. The correctness flag is only
/// ever changed by the owning question, through
/// [`Question::set_correct_choices`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    id: ChoiceId,
    text: String,
    is_correct: bool,
}

impl Choice {
    fn new(id: ChoiceId, text: String, is_correct: bool) -> Self {
        Self {
            id,
            text,
            is_correct,
        }
    }

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

/// A quiz question (Aggregate Root)
///
/// Holds the title, scoring weight, selection cap, and an ordered
/// collection of choices. `points` and `max_selections` are fixed once
/// construction finishes; choices are managed through
/// [`Question::add_choice`] and [`Question::remove_choice_by_id`].
///
/// # Example
///
/// ```
/// use quizcraft_domain::Question;
///
/// let mut question = Question::new("What is Rust?")?.with_max_selections(2)?;
/// let first = question.add_choice("A language", true)?.id();
/// question.add_choice("A fungus", false)?;
///
/// assert_eq!(question.correct_selected_choices(&[first])?, vec![first]);
/// # Ok::<(), quizcraft_domain::DomainError>(())
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Question {
    id: QuestionId,
    title: String,
    points: u32,
    max_selections: usize,
    choices: Vec<Choice>,
    next_choice_id: u64,
}

impl Question {
    /// Create a new question worth 1 point with a single-selection cap.
    ///
    /// The title must be 1 to 200 characters long. A fresh process-wide
    /// unique id is drawn only after validation passes.
    pub fn new(title: impl Into<String>) -> Result<Self, DomainError> {
        let title = title.into();
        if title.is_empty() || title.chars().count() > 200 {
            return Err(DomainError::InvalidTitle);
        }
        Ok(Self {
            id: QuestionId::next(),
            title,
            points: 1,
            max_selections: 1,
            choices: Vec::new(),
            next_choice_id: 1,
        })
    }

    /// Set the scoring weight (1 to 100).
    pub fn with_points(mut self, points: u32) -> Result<Self, DomainError> {
        if !(1..=100).contains(&points) {
            return Err(DomainError::InvalidPoints);
        }
        self.points = points;
        Ok(self)
    }

    /// Set how many choices may be submitted in one grading call.
    pub fn with_max_selections(mut self, max_selections: usize) -> Result<Self, DomainError> {
        if max_selections == 0 {
            return Err(DomainError::InvalidMaxSelections);
        }
        self.max_selections = max_selections;
        Ok(self)
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

    /// The choices in insertion order.
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    pub fn choice_count(&self) -> usize {
        self.choices.len()
    }

    /// Find a choice by id.
    pub fn find_choice(&self, id: ChoiceId) -> Option<&Choice> {
        self.choices.iter().find(|choice| choice.id == id)
    }

    /// Ids of the choices currently marked correct, in insertion order.
    pub fn correct_choice_ids(&self) -> Vec<ChoiceId> {
        self.choices
            .iter()
            .filter(|choice| choice.is_correct)
            .map(|choice| choice.id)
            .collect()
    }

    /// Add a choice to the end of the collection.
    ///
    /// The text must be 1 to 100 characters long. The choice receives the
    /// next sequential id for this question, starting at 1; ids are never
    /// reused, even after removal. On error nothing is added and the id
    /// counter does not advance.
    pub fn add_choice(
        &mut self,
        text: impl Into<String>,
        is_correct: bool,
    ) -> Result<&Choice, DomainError> {
        let text = text.into();
        if text.is_empty() {
            return Err(DomainError::EmptyChoiceText);
        }
        if text.chars().count() > 100 {
            return Err(DomainError::ChoiceTextTooLong);
        }

        let id = ChoiceId::new(self.next_choice_id);
        self.next_choice_id += 1;

        let index = self.choices.len();
        self.choices.push(Choice::new(id, text, is_correct));
        Ok(&self.choices[index])
    }

    /// Remove the choice with the given id.
    ///
    /// The remaining choices keep their ids and relative order. An unknown
    /// id leaves the question untouched.
    pub fn remove_choice_by_id(&mut self, id: ChoiceId) -> Result<(), DomainError> {
        let index = self
            .choices
            .iter()
            .position(|choice| choice.id == id)
            .ok_or(DomainError::InvalidChoiceId)?;
        self.choices.remove(index);
        Ok(())
    }

    /// Replace the correctness marking wholesale.
    ///
    /// After the call a choice is marked correct exactly when its id
    /// appears in `ids`. Ids with no matching choice are ignored.
    pub fn set_correct_choices(&mut self, ids: &[ChoiceId]) {
        for choice in &mut self.choices {
            choice.is_correct = ids.contains(&choice.id);
        }
    }

    /// Grade a submitted selection.
    ///
    /// Returns the selected ids that are marked correct, in the order the
    /// choices were added (not the order they were selected). Selected ids
    /// with no matching choice are ignored. Submitting more ids than
    /// `max_selections` is an error; an empty selection is allowed and
    /// grades to an empty result.
    pub fn correct_selected_choices(
        &self,
        selected: &[ChoiceId],
    ) -> Result<Vec<ChoiceId>, DomainError> {
        if selected.len() > self.max_selections {
            return Err(DomainError::TooManySelections(self.max_selections));
        }
        Ok(self
            .choices
            .iter()
            .filter(|choice| choice.is_correct && selected.contains(&choice.id))
            .map(|choice| choice.id)
            .collect())
    }
}
