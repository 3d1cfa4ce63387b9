//! Error types for the fitness coach

use thiserror::Error;

/// Rejection of a log entry or profile at the write boundary
#[derive(Error, Debug)]
pub enum EntryError {
    #[error("{field}: {message}")]
    Invalid { field: String, message: String },

    #[error("Validation failed: {0}")]
    Fields(#[from] validator::ValidationErrors),
}

impl EntryError {
    pub fn invalid(field: &str, message: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// Offending field, when a single one is known
    pub fn field(&self) -> Option<String> {
        match self {
            Self::Invalid { field, .. } => Some(field.clone()),
            Self::Fields(errors) => errors.field_errors().keys().min().map(|k| k.to_string()),
        }
    }
}
