//! Quiz domain module
//!
//! Contains the [`Question`] aggregate root, its owned [`Choice`]s, and
//! the identifier types for both.

pub mod entities;
pub mod value_objects;

pub use entities::{Choice, Question};
pub use value_objects::{ChoiceId, QuestionId};
