//! # coursegen-scaffold
//!
//! Template catalog plus the tera-based scaffold renderer that turns an
//! assignment descriptor and a language selection into a
//! [`coursegen_core::PublishPlan`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use coursegen_core::{AssignmentDescriptor, Language};
//! use coursegen_scaffold::ScaffoldRenderer;
//!
//! fn render(assignment: &AssignmentDescriptor) {
//!     if let Ok(renderer) = ScaffoldRenderer::new() {
//!         if let Ok(plan) = renderer.render(assignment, Language::Python) {
//!             for file in &plan.files {
//!                 println!("{}: {} bytes", file.relative_path, file.content.len());
//!             }
//!         }
//!     }
//! }
//! ```

pub mod catalog;
pub mod context;
pub mod engine;
pub mod error;

pub use context::ScaffoldContext;
pub use engine::ScaffoldRenderer;
pub use error::RenderError;
