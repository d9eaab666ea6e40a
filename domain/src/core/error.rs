//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Two kinds share this enum: validation failures (malformed construction
/// arguments, malformed choice text, oversized selections) and lookup
/// failures (removing a choice id that does not exist). Callers that only
/// care about the kind can branch on [`DomainError::is_validation`] and
/// [`DomainError::is_lookup`] instead of matching variants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("title length must be between 1 and 200")]
    InvalidTitle,

    #[error("Points must be between 1 and 100")]
    InvalidPoints,

    #[error("max_selections must be at least 1")]
    InvalidMaxSelections,

    #[error("Text cannot be empty")]
    EmptyChoiceText,

    #[error("Text cannot be longer than 100 characters")]
    ChoiceTextTooLong,

    #[error("Invalid choice id")]
    InvalidChoiceId,

    #[error("Cannot select more than {0} choice(s)")]
    TooManySelections(usize),
}

impl DomainError {
    /// Check if this error is a validation failure
    pub fn is_validation(&self) -> bool {
        !self.is_lookup()
    }

    /// Check if this error is a lookup failure
    pub fn is_lookup(&self) -> bool {
        matches!(self, DomainError::InvalidChoiceId)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            DomainError::InvalidTitle.to_string(),
            "title length must be between 1 and 200"
        );
        assert_eq!(
            DomainError::InvalidPoints.to_string(),
            "Points must be between 1 and 100"
        );
        assert_eq!(
            DomainError::EmptyChoiceText.to_string(),
            "Text cannot be empty"
        );
        assert_eq!(
            DomainError::ChoiceTextTooLong.to_string(),
            "Text cannot be longer than 100 characters"
        );
        assert_eq!(DomainError::InvalidChoiceId.to_string(), "Invalid choice id");
    }

    #[test]
    fn test_too_many_selections_display_carries_the_cap() {
        assert_eq!(
            DomainError::TooManySelections(1).to_string(),
            "Cannot select more than 1 choice(s)"
        );
        assert_eq!(
            DomainError::TooManySelections(3).to_string(),
            "Cannot select more than 3 choice(s)"
        );
    }

    #[test]
    fn test_kind_predicates_partition_the_variants() {
        let validation = [
            DomainError::InvalidTitle,
            DomainError::InvalidPoints,
            DomainError::InvalidMaxSelections,
            DomainError::EmptyChoiceText,
            DomainError::ChoiceTextTooLong,
            DomainError::TooManySelections(2),
        ];
        for error in validation {
            assert!(error.is_validation());
            assert!(!error.is_lookup());
        }

        assert!(DomainError::InvalidChoiceId.is_lookup());
        assert!(!DomainError::InvalidChoiceId.is_validation());
    }
}
