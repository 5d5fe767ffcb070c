//! `coursegen create` — run the full assignment-to-repository pipeline.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use coursegen_canvas::{CanvasClient, LmsError};
use coursegen_core::{AssignmentId, CancelToken, CourseId, PublishResult};
use coursegen_github::GitHubClient;
use coursegen_pipeline::{Pipeline, PipelineError};

use crate::config::Config;
use crate::LanguageArg;

/// Arguments for `coursegen create`.
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Canvas course ID (see `coursegen courses`).
    pub course_id: u64,

    /// Specific assignment ID. Defaults to the next upcoming assignment.
    #[arg(long)]
    pub assignment_id: Option<u64>,

    /// Scaffold language: python | java | javascript | cpp.
    #[arg(long, short = 'l', default_value = "python")]
    pub language: LanguageArg,
}

impl CreateArgs {
    pub fn run(self, config: &Config) -> Result<()> {
        let lms = CanvasClient::new(&config.canvas_base_url, &config.canvas_token);
        let host = GitHubClient::new(&config.github_token, config.github_org.clone());
        let pipeline = Pipeline::new(&lms, &host);

        let result = pipeline.run(
            CourseId(self.course_id),
            self.assignment_id.map(AssignmentId),
            self.language.into(),
            &CancelToken::new(),
        );

        match result {
            Ok(result) => {
                print_result(&result);
                Ok(())
            }
            Err(PipelineError::Resolve(LmsError::NoUpcomingAssignment(course_id))) => {
                println!(
                    "{} course {course_id} has no assignment with a future due date.",
                    "✗".yellow().bold()
                );
                println!("  Pick one explicitly: coursegen assignments {course_id}");
                Ok(())
            }
            Err(err) => Err(err.into()),
        }
    }
}

fn print_result(result: &PublishResult) {
    println!("✓ repository ready: {}", result.repo_url.bold());
    for path in &result.committed_paths {
        println!("  ✎  {path}");
    }

    if result.is_partial() {
        println!(
            "{}",
            format!(
                "partial publish — {} file(s) need manual attention:",
                result.failed_paths.len()
            )
            .yellow()
            .bold()
        );
        for (path, reason) in &result.failed_paths {
            println!("  ✗  {path} — {reason}");
        }
    }
}
