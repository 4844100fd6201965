//! Error types shared across the domain layer.

use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i32,
        max: i32,
        actual: i32,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: i32, max: i32, actual: i32) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Errors surfaced by aggregate repositories.
///
/// `Conflict` is distinct so callers can tell a lost optimistic-lock race
/// apart from plain storage failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("Version conflict on {aggregate} {id}: saved from v{loaded}, store holds v{stored}")]
    Conflict {
        aggregate: &'static str,
        id: String,
        loaded: u64,
        stored: u64,
    },

    #[error("Storage failure: {0}")]
    Storage(String),
}

impl RepositoryError {
    /// Creates a version conflict error.
    pub fn conflict(
        aggregate: &'static str,
        id: impl Into<String>,
        loaded: u64,
        stored: u64,
    ) -> Self {
        RepositoryError::Conflict {
            aggregate,
            id: id.into(),
            loaded,
            stored,
        }
    }

    /// Creates a storage failure error.
    pub fn storage(message: impl Into<String>) -> Self {
        RepositoryError::Storage(message.into())
    }
}

/// Errors surfaced by event transport and event handlers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventError {
    #[error("Payload decode failed for '{event_type}': {reason}")]
    Decode { event_type: String, reason: String },

    #[error("Handler '{handler}' failed: {message}")]
    Handler {
        handler: &'static str,
        message: String,
    },

    #[error("Event delivery failed: {0}")]
    Delivery(String),
}

impl EventError {
    /// Creates a payload decode error.
    pub fn decode(event_type: impl Into<String>, source: impl std::fmt::Display) -> Self {
        EventError::Decode {
            event_type: event_type.into(),
            reason: source.to_string(),
        }
    }

    /// Creates a handler failure error.
    pub fn handler(handler: &'static str, source: impl std::fmt::Display) -> Self {
        EventError::Handler {
            handler,
            message: source.to_string(),
        }
    }

    /// Creates an event delivery error.
    pub fn delivery(message: impl Into<String>) -> Self {
        EventError::Delivery(message.into())
    }
}
