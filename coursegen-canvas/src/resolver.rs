//! Assignment resolution — explicit id, or the next-upcoming default.

use chrono::{DateTime, Utc};

use coursegen_core::{select, AssignmentDescriptor, AssignmentId, CourseId};

use crate::api::LearningApi;
use crate::error::LmsError;

/// Resolves "which assignment" for a pipeline run.
pub struct AssignmentResolver<'a> {
    api: &'a dyn LearningApi,
}

impl<'a> AssignmentResolver<'a> {
    pub fn new(api: &'a dyn LearningApi) -> Self {
        AssignmentResolver { api }
    }

    /// Resolve against the current wall clock.
    pub fn resolve(
        &self,
        course_id: CourseId,
        assignment_id: Option<AssignmentId>,
    ) -> Result<AssignmentDescriptor, LmsError> {
        self.resolve_at(course_id, assignment_id, Utc::now())
    }

    /// Resolve against an explicit `now`, for deterministic tests.
    ///
    /// With an explicit id, the assignment is fetched directly. Without
    /// one, all assignments are fetched and [`select::next_upcoming`]
    /// picks the earliest future due date (ties broken on lowest id).
    pub fn resolve_at(
        &self,
        course_id: CourseId,
        assignment_id: Option<AssignmentId>,
        now: DateTime<Utc>,
    ) -> Result<AssignmentDescriptor, LmsError> {
        match assignment_id {
            Some(id) => self.api.get_assignment(course_id, id),
            None => {
                let assignments = self.api.list_assignments(course_id)?;
                log::debug!(
                    "course {course_id}: {} assignments fetched, selecting next upcoming",
                    assignments.len()
                );
                select::next_upcoming(&assignments, now)
                    .cloned()
                    .ok_or(LmsError::NoUpcomingAssignment(course_id))
            }
        }
    }
}
