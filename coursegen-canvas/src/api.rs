//! Learning-management collaborator contract.
//!
//! Backend-agnostic blocking trait; the concrete Canvas client and the
//! in-memory fake both satisfy it, so the resolver and pipeline are
//! testable without a live remote.

use coursegen_core::{AssignmentDescriptor, AssignmentId, Course, CourseId};

use crate::error::LmsError;

/// Read-only view of a learning-management system.
pub trait LearningApi: Send + Sync {
    /// List all courses visible to the configured credentials.
    fn list_courses(&self) -> Result<Vec<Course>, LmsError>;

    /// List every assignment of one course.
    fn list_assignments(&self, course_id: CourseId) -> Result<Vec<AssignmentDescriptor>, LmsError>;

    /// Fetch one specific assignment.
    fn get_assignment(
        &self,
        course_id: CourseId,
        assignment_id: AssignmentId,
    ) -> Result<AssignmentDescriptor, LmsError>;
}
