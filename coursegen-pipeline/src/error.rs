//! Error types for coursegen-pipeline.

use thiserror::Error;

use coursegen_canvas::LmsError;
use coursegen_github::PublishError;
use coursegen_scaffold::RenderError;

/// All errors that can end a pipeline run.
///
/// Each stage's error is propagated unchanged inside its variant; nothing
/// remote exists until the publish stage, so earlier failures need no
/// cleanup.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Assignment resolution failed.
    #[error("resolve error: {0}")]
    Resolve(#[from] LmsError),

    /// Scaffold rendering failed.
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// Publishing failed before any file was committed.
    #[error("publish error: {0}")]
    Publish(#[from] PublishError),

    /// Cancelled at a checkpoint between stages.
    #[error("pipeline cancelled")]
    Cancelled,
}
