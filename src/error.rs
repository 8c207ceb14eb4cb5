use thiserror::Error;

use crate::entity::EntityId;

// Error types shared by the entity, catalog and booking modules
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TourError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid rating: {0} (expected 1-5)")]
    InvalidRating(i32),

    #[error("Entity not found: {0}")]
    EntityNotFound(EntityId),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

// Rejects empty or whitespace-only text for a named field
pub(crate) fn require_non_empty(field: &str, value: &str) -> Result<(), TourError> {
    if value.trim().is_empty() {
        tracing::warn!(field, "rejected empty field");
        return Err(TourError::InvalidInput(format!("{} must not be empty", field)));
    }
    Ok(())
}
