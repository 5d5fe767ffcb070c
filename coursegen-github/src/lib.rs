//! # coursegen-github
//!
//! GitHub repository-host client and the repository publisher.
//!
//! The [`RepoHost`] trait is the collaborator boundary: [`GitHubClient`]
//! speaks the GitHub REST API over blocking HTTP, [`FakeRepoHost`] backs
//! tests, and [`RepositoryPublisher`] drives the Creating → Committing →
//! Done/Partial state machine over either.

pub mod api;
pub mod client;
pub mod error;
pub mod fakes;
pub mod publisher;

pub use api::{CreateRepoError, CreatedRepo, FileCommitError, RepoHost};
pub use client::GitHubClient;
pub use error::PublishError;
pub use fakes::FakeRepoHost;
pub use publisher::{PublishOptions, RepositoryPublisher};
