//! # coursegen-canvas
//!
//! Canvas learning-management client and the assignment resolver.
//!
//! The [`LearningApi`] trait is the collaborator boundary: [`CanvasClient`]
//! speaks the Canvas REST v1 API over blocking HTTP, [`FakeLearningApi`]
//! backs tests, and [`AssignmentResolver`] applies the "next upcoming"
//! default on top of either.

pub mod api;
pub mod client;
pub mod error;
pub mod fakes;
pub mod resolver;

pub use api::LearningApi;
pub use client::CanvasClient;
pub use error::LmsError;
pub use fakes::FakeLearningApi;
pub use resolver::AssignmentResolver;
