//! Quiz domain value objects - identifier types for questions and choices.
//!
//! # Identifiers
//! - [`QuestionId`] - Process-wide unique identifier for a question
//! - [`ChoiceId`] - Identifier for a choice within its owning question

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Global question ID counter.
static QUESTION_ID: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for a question.
///
/// Ids are drawn from a process-wide monotonic counter at construction
/// time, so two questions created in the same process never share an id,
/// even when constructed from different threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QuestionId(u64);

impl QuestionId {
    /// Draws the next fresh id from the process-wide counter.
    pub(crate) fn next() -> Self {
        Self(QUESTION_ID.fetch_add(1, Ordering::SeqCst))
    }

    /// Returns the numeric value of the id.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier for a choice within its owning question.
///
/// Assigned sequentially starting at 1 in the order choices are added.
/// An id is never reused within its question, even after the choice is
/// removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChoiceId(u64);

impl ChoiceId {
    /// Creates a ChoiceId from a raw value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the numeric value of the id.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for ChoiceId {
    fn from(id: u64) -> Self {
        Self::new(id)
    }
}

impl std::fmt::Display for ChoiceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_ids_are_unique_and_increasing() {
        let first = QuestionId::next();
        let second = QuestionId::next();
        let third = QuestionId::next();
        assert_ne!(first, second);
        assert!(second > first);
        assert!(third > second);
    }

    #[test]
    fn test_choice_id_from_raw_value() {
        let id = ChoiceId::new(7);
        assert_eq!(id.value(), 7);
        assert_eq!(ChoiceId::from(7), id);
    }

    #[test]
    fn test_id_display() {
        assert_eq!(ChoiceId::new(3).to_string(), "3");
        let id = QuestionId::next();
        assert_eq!(id.to_string(), id.value().to_string());
    }
}
