//! Error types for calendar-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalendarError {
    #[error("Event not found")]
    EventNotFound(String),

    #[error("Invalid event: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CalendarError {
    /// The user-facing messages carried by this error.
    ///
    /// Validation failures expand to one message per violated rule; every
    /// other variant is a single message.
    pub fn messages(&self) -> Vec<String> {
        match self {
            CalendarError::Validation(errors) => errors.clone(),
            other => vec![other.to_string()],
        }
    }
}

pub type Result<T> = std::result::Result<T, CalendarError>;
