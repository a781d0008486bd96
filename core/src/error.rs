//! Error types for the shopping list.
//!
//! # Design
//! Only item validation can fail: a blank field, or an id that clashes with
//! one already in the list. Lookups of unknown ids are reported as
//! `None` / `false` by the store operations and never surface here.

use thiserror::Error;

/// A field of an [`Item`](crate::Item) was given a value it cannot hold.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The value was absent, empty, or whitespace only.
    #[error("{field} cannot be null, empty, or whitespace")]
    Blank { field: &'static str },

    /// Two items in one list carry the same id.
    #[error("id {id} is already in the list")]
    DuplicateId { id: String },
}

impl ValidationError {
    pub fn blank(field: &'static str) -> Self {
        ValidationError::Blank { field }
    }

    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::Blank { field } => *field,
            ValidationError::DuplicateId { .. } => "id",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_the_field() {
        let err = ValidationError::blank("name");
        assert_eq!(err.field(), "name");
        assert_eq!(err.to_string(), "name cannot be null, empty, or whitespace");
    }

    #[test]
    fn duplicate_id_reports_the_id() {
        let err = ValidationError::DuplicateId { id: "x".to_string() };
        assert_eq!(err.field(), "id");
        assert_eq!(err.to_string(), "id x is already in the list");
    }
}
