//! Domain-level error types.

use thiserror::Error;

use crate::validation::ValidationErrors;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: String },
}

/// Repository-level errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepoError {
    #[error("No post with id {id}")]
    NotFound { id: String },
}

impl From<RepoError> for DomainError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound { id } => DomainError::NotFound {
                entity_type: "Post",
                id,
            },
        }
    }
}
