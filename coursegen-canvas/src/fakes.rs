//! In-memory fake for [`LearningApi`] (testing only).

use std::collections::HashMap;

use coursegen_core::{AssignmentDescriptor, AssignmentId, Course, CourseId};

use crate::api::LearningApi;
use crate::error::LmsError;

/// Builder-style fake learning-management backend.
#[derive(Debug, Default)]
pub struct FakeLearningApi {
    courses: Vec<Course>,
    assignments: HashMap<CourseId, Vec<AssignmentDescriptor>>,
    upstream_down: bool,
}

impl FakeLearningApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_course(mut self, id: u64, name: &str) -> Self {
        let id = CourseId(id);
        self.courses.push(Course {
            id,
            name: name.to_string(),
        });
        self.assignments.entry(id).or_default();
        self
    }

    /// Register an assignment; its course must have been added first.
    pub fn with_assignment(mut self, assignment: AssignmentDescriptor) -> Self {
        self.assignments
            .get_mut(&assignment.course_id)
            .expect("register the course before its assignments")
            .push(assignment);
        self
    }

    /// Make every call fail with [`LmsError::Upstream`].
    pub fn with_upstream_down(mut self) -> Self {
        self.upstream_down = true;
        self
    }

    fn check_up(&self) -> Result<(), LmsError> {
        if self.upstream_down {
            Err(LmsError::Upstream("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}

impl LearningApi for FakeLearningApi {
    fn list_courses(&self) -> Result<Vec<Course>, LmsError> {
        self.check_up()?;
        Ok(self.courses.clone())
    }

    fn list_assignments(&self, course_id: CourseId) -> Result<Vec<AssignmentDescriptor>, LmsError> {
        self.check_up()?;
        self.assignments
            .get(&course_id)
            .cloned()
            .ok_or(LmsError::CourseNotFound(course_id))
    }

    fn get_assignment(
        &self,
        course_id: CourseId,
        assignment_id: AssignmentId,
    ) -> Result<AssignmentDescriptor, LmsError> {
        self.check_up()?;
        let assignments = self
            .assignments
            .get(&course_id)
            .ok_or(LmsError::CourseNotFound(course_id))?;
        assignments
            .iter()
            .find(|a| a.assignment_id == assignment_id)
            .cloned()
            .ok_or(LmsError::AssignmentNotFound {
                course_id,
                assignment_id,
            })
    }
}
