//! Error types for the message store.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur when reading or writing messages.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No message is stored under the given id.
    ///
    /// Carries the id exactly as the caller wrote it, so the rendered
    /// message echoes their input back at them.
    #[error("no message exists with id {0}")]
    MessageNotFound(String),
}
