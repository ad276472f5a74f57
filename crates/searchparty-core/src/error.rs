//! Search Error Types
//!
//! Failures are plain values. Building one has no side effects; the adapter
//! that first observes a failure is responsible for logging it once before
//! returning it.

use thiserror::Error;

/// Result type for a search run
pub type SearchResult<T> = Result<T, SearchError>;

/// The instruction source could not supply instructions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct InstructionFetchError {
    message: String,
}

impl InstructionFetchError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// The position oracle could not evaluate the submitted position
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct PositionSubmissionError {
    message: String,
}

impl PositionSubmissionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Terminal failure of a search run
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Fetching the instruction sequence failed
    #[error(transparent)]
    InstructionFetch(#[from] InstructionFetchError),

    /// Submitting the final position failed
    #[error(transparent)]
    PositionSubmission(#[from] PositionSubmissionError),
}

impl SearchError {
    /// Human-readable message carried by the underlying failure
    pub fn message(&self) -> &str {
        match self {
            SearchError::InstructionFetch(err) => err.message(),
            SearchError::PositionSubmission(err) => err.message(),
        }
    }

    /// Get the error code suitable for logging or reporting.
    pub fn error_code(&self) -> &'static str {
        match self {
            SearchError::InstructionFetch(_) => "INSTRUCTION_FETCH_FAILED",
            SearchError::PositionSubmission(_) => "POSITION_SUBMISSION_FAILED",
        }
    }
}
