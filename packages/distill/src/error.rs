//! Typed errors for the distillation pipeline.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.

use thiserror::Error;

/// Maximum length of backend error messages surfaced to callers.
///
/// Model and document-store services can return multi-kilobyte error
/// bodies; anything past this is noise for display purposes.
pub const MAX_ERROR_MESSAGE_LEN: usize = 80;

/// Errors that can occur during pipeline operations.
#[derive(Debug, Error)]
pub enum DistillError {
    /// Missing or unusable configuration (credentials).
    ///
    /// Fatal to the operation that requested it. Never retried
    /// automatically; the user supplies configuration and retries.
    #[error("config error: {0}")]
    Config(String),

    /// Transcript failed pre-flight validation.
    ///
    /// Raised before any network call is made.
    #[error("invalid input: {reason}")]
    InputValidation { reason: String },

    /// The model call failed or did not yield a schema-conforming result.
    ///
    /// Carries the backend's message truncated to [`MAX_ERROR_MESSAGE_LEN`].
    /// Not retried.
    #[error("extraction error: {0}")]
    Extraction(String),

    /// The remote document store rejected a publish call.
    ///
    /// The already-computed bundle is preserved by the caller so publish
    /// can be retried without re-running extraction.
    #[error("publish error: {0}")]
    Publish(String),

    /// Transcript acquisition failed (audio or caption source).
    #[error("transcript error: {0}")]
    Transcript(String),
}

impl DistillError {
    /// Build an extraction error with the message truncated for display.
    pub fn extraction(message: impl Into<String>) -> Self {
        Self::Extraction(truncate_message(&message.into(), MAX_ERROR_MESSAGE_LEN))
    }

    /// Build a publish error with the message truncated for display.
    pub fn publish(message: impl Into<String>) -> Self {
        Self::Publish(truncate_message(&message.into(), MAX_ERROR_MESSAGE_LEN))
    }
}

/// Truncate a message to at most `max` characters on a char boundary.
pub fn truncate_message(message: &str, max: usize) -> String {
    if message.chars().count() <= max {
        return message.to_string();
    }
    message.chars().take(max).collect()
}

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, DistillError>;
