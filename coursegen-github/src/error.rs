//! Error types for coursegen-github.

use thiserror::Error;

/// Errors that end a publish run before any file is committed.
///
/// Per-file commit failures are not errors; they are reported inside
/// [`coursegen_core::PublishResult`] as failed paths.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PublishError {
    /// Every creation attempt collided, or the remote rejected creation
    /// outright. The user must pick a different name or retry later.
    #[error("repository creation exhausted after {attempts} attempt(s): {reason}")]
    RepositoryCreationExhausted { attempts: usize, reason: String },

    /// The run was cancelled before the repository was created; nothing
    /// exists remotely.
    #[error("publish cancelled before repository creation")]
    Cancelled,
}
