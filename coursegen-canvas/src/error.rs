//! Error types for coursegen-canvas.

use thiserror::Error;

use coursegen_core::{AssignmentId, CourseId};

/// All errors that can arise from learning-management operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LmsError {
    /// The course identifier is unknown to the remote.
    #[error("course {0} not found")]
    CourseNotFound(CourseId),

    /// The remote reports no such assignment for the course.
    #[error("assignment {assignment_id} not found in course {course_id}")]
    AssignmentNotFound {
        course_id: CourseId,
        assignment_id: AssignmentId,
    },

    /// Every assignment is undated or already due. Reported to the user;
    /// not a crash.
    #[error("course {0} has no assignment with a future due date")]
    NoUpcomingAssignment(CourseId),

    /// Transport or authentication failure from the remote. Terminal for
    /// the current run; never retried here.
    #[error("learning-management upstream unavailable: {0}")]
    Upstream(String),
}
