//! Remote-repository-host collaborator contract.
//!
//! Blocking, backend-agnostic trait; the concrete GitHub client and the
//! in-memory fake both satisfy it. `Send + Sync` because the publisher's
//! worker pool shares one host reference across threads.

use thiserror::Error;

/// A repository that exists on the remote host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedRepo {
    /// Browser URL, e.g. `https://github.com/owner/lab-3-sorting`.
    pub repo_url: String,
    /// `owner/name`, used to address subsequent file commits.
    pub full_name: String,
}

/// Why a repository could not be created.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CreateRepoError {
    /// The name is already taken for this owner; the caller may retry
    /// with a different name.
    #[error("repository name {0:?} already taken")]
    NameCollision(String),

    /// Any non-collision rejection (permissions, invalid owner, transport).
    #[error("repository creation failed: {0}")]
    Creation(String),
}

/// Why a single file commit failed.
///
/// The transient/permanent split drives the publisher's retry policy:
/// transient failures are retried with backoff, permanent ones are
/// recorded immediately.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FileCommitError {
    /// Rate limiting, timeouts, server errors. Worth retrying.
    #[error("transient failure: {0}")]
    Transient(String),

    /// Authorization failures, invalid paths. Retrying cannot help.
    #[error("{0}")]
    Permanent(String),
}

/// Write access to a remote repository host.
pub trait RepoHost: Send + Sync {
    /// Create a repository under the configured owner.
    fn create_repository(
        &self,
        name: &str,
        description: &str,
    ) -> Result<CreatedRepo, CreateRepoError>;

    /// Commit one file to the repository's default branch. Calls for
    /// distinct paths are commutative; callers may issue them concurrently.
    fn create_file(
        &self,
        repo: &CreatedRepo,
        path: &str,
        content: &str,
    ) -> Result<(), FileCommitError>;
}
