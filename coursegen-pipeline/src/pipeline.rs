//! Pipeline orchestrator — resolve, render, publish.

use coursegen_canvas::{AssignmentResolver, LearningApi};
use coursegen_core::{AssignmentId, CancelToken, CourseId, Language, PublishResult};
use coursegen_github::{PublishOptions, RepoHost, RepositoryPublisher};
use coursegen_scaffold::ScaffoldRenderer;

use crate::error::PipelineError;

/// Sequences the three pipeline stages over the two remote collaborators.
///
/// Stages run strictly in order and short-circuit on the first terminal
/// failure. Cancellation is cooperative: checked before each stage, and
/// per file inside the publish stage.
///
/// Re-running with identical inputs after a successful publish creates a
/// *second*, suffix-disambiguated repository — the pipeline does not
/// detect "already published for this assignment". Callers needing
/// stronger idempotency must track published assignments themselves.
pub struct Pipeline<'a> {
    lms: &'a dyn LearningApi,
    host: &'a dyn RepoHost,
    publish_options: PublishOptions,
}

impl<'a> Pipeline<'a> {
    pub fn new(lms: &'a dyn LearningApi, host: &'a dyn RepoHost) -> Self {
        Self::with_publish_options(lms, host, PublishOptions::default())
    }

    pub fn with_publish_options(
        lms: &'a dyn LearningApi,
        host: &'a dyn RepoHost,
        publish_options: PublishOptions,
    ) -> Self {
        Pipeline {
            lms,
            host,
            publish_options,
        }
    }

    /// Run the full pipeline for one assignment.
    ///
    /// With `assignment_id = None`, the next upcoming assignment of the
    /// course is used.
    pub fn run(
        &self,
        course_id: CourseId,
        assignment_id: Option<AssignmentId>,
        language: Language,
        cancel: &CancelToken,
    ) -> Result<PublishResult, PipelineError> {
        checkpoint(cancel)?;
        let resolver = AssignmentResolver::new(self.lms);
        let assignment = resolver.resolve(course_id, assignment_id)?;
        log::info!(
            "resolved assignment {} '{}' (due {})",
            assignment.assignment_id,
            assignment.name,
            assignment
                .due_at
                .map(|d| d.to_rfc3339())
                .unwrap_or_else(|| "never".to_string())
        );

        checkpoint(cancel)?;
        let renderer = ScaffoldRenderer::new()?;
        let plan = renderer.render(&assignment, language)?;
        log::info!(
            "rendered {} {language} file(s) for '{}'",
            plan.files.len(),
            plan.target_repo_name
        );

        checkpoint(cancel)?;
        let publisher = RepositoryPublisher::with_options(self.host, self.publish_options.clone());
        Ok(publisher.publish(&plan, cancel)?)
    }
}

fn checkpoint(cancel: &CancelToken) -> Result<(), PipelineError> {
    if cancel.is_cancelled() {
        Err(PipelineError::Cancelled)
    } else {
        Ok(())
    }
}
