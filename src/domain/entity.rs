//! Domain Layer - Core Entity Trait
//!
//! Every catalog record has a unique ID within its owning collection.
//! Records are plain values, so they are thread-safe by construction.

use serde::{Deserialize, Serialize};

/// Core trait for all catalog records
pub trait Entity: Sized + Send + Sync + Clone {
    /// Returns the record's unique identifier within its collection
    fn id(&self) -> u32;
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
pub enum DomainError {
    #[error("Division by zero: {0}")]
    DivisionByZero(String),

    #[error("Duplicate id {id} in {collection}")]
    DuplicateId { collection: String, id: u32 },

    #[error("Unknown category '{value}' in {collection}")]
    UnknownCategory { collection: String, value: String },

    #[error("Category '{value}' declared twice in {collection}")]
    DuplicateCategory { collection: String, value: String },

    #[error("Reserved category '{value}' declared in {collection}")]
    ReservedCategory { collection: String, value: String },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DomainError::DuplicateId {
            collection: "articles".to_string(),
            id: 3,
        };
        assert_eq!(err.to_string(), "Duplicate id 3 in articles");

        let err = DomainError::DivisionByZero("average of videos".to_string());
        assert_eq!(err.to_string(), "Division by zero: average of videos");

        let err = DomainError::DuplicateCategory {
            collection: "videos".to_string(),
            value: "Tools".to_string(),
        };
        assert_eq!(err.to_string(), "Category 'Tools' declared twice in videos");
    }

    #[test]
    fn test_error_serializes_for_presentation() {
        let err = DomainError::NotFound("article 9".to_string());
        let json = serde_json::to_string(&err).unwrap();
        let back: DomainError = serde_json::from_str(&json).unwrap();
        assert_eq!(back, err);
    }
}
