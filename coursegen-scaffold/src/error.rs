//! Error types for coursegen-scaffold.

use thiserror::Error;

/// All errors that can arise from scaffold rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The assignment name contains nothing usable for a repository slug.
    #[error("assignment name {name:?} yields an empty repository slug")]
    InvalidAssignmentName { name: String },

    /// Tera template engine error.
    #[error("template engine error: {0}")]
    Tera(#[from] tera::Error),
}
