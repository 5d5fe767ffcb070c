//! # coursegen-pipeline
//!
//! The canonical entrypoint for one assignment-to-repository run:
//! resolve the assignment, render the scaffold, publish the repository.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use coursegen_canvas::CanvasClient;
//! use coursegen_core::{CancelToken, CourseId, Language};
//! use coursegen_github::GitHubClient;
//! use coursegen_pipeline::Pipeline;
//!
//! fn create_repo() {
//!     let lms = CanvasClient::new("https://canvas.example.edu", "canvas-token");
//!     let host = GitHubClient::new("github-token", None);
//!     let pipeline = Pipeline::new(&lms, &host);
//!     match pipeline.run(CourseId(12345), None, Language::Python, &CancelToken::new()) {
//!         Ok(result) => println!("published {}", result.repo_url),
//!         Err(err) => eprintln!("{err}"),
//!     }
//! }
//! ```

pub mod error;
pub mod pipeline;

pub use error::PipelineError;
pub use pipeline::Pipeline;
