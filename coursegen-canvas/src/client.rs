//! Canvas REST client (API v1) implementing [`LearningApi`].

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use coursegen_core::{AssignmentDescriptor, AssignmentId, Course, CourseId};

use crate::api::LearningApi;
use crate::error::LmsError;

const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Blocking Canvas client authenticated with a bearer token.
pub struct CanvasClient {
    agent: ureq::Agent,
    base_url: String,
    token: String,
}

impl CanvasClient {
    /// `base_url` is the instance root, e.g. `https://canvas.instructure.com`.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        CanvasClient {
            agent: ureq::AgentBuilder::new().timeout(HTTP_TIMEOUT).build(),
            base_url,
            token: token.into(),
        }
    }

    fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        not_found: impl FnOnce() -> LmsError,
    ) -> Result<T, LmsError> {
        let url = format!("{}/api/v1/{path}", self.base_url);
        log::debug!("GET {url}");
        let response = self
            .agent
            .get(&url)
            .set("Authorization", &format!("Bearer {}", self.token))
            .call()
            .map_err(|e| classify(e, not_found))?;
        response
            .into_json::<T>()
            .map_err(|e| LmsError::Upstream(format!("malformed canvas response: {e}")))
    }
}

/// 404 means the addressed entity does not exist; everything else is an
/// upstream availability problem (including 401/403 auth rejections).
fn classify(err: ureq::Error, not_found: impl FnOnce() -> LmsError) -> LmsError {
    match err {
        ureq::Error::Status(404, _) => not_found(),
        ureq::Error::Status(code, response) => LmsError::Upstream(format!(
            "canvas returned HTTP {code} {}",
            response.status_text()
        )),
        ureq::Error::Transport(transport) => LmsError::Upstream(transport.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Wire rows
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct CourseRow {
    id: u64,
    #[serde(default)]
    name: String,
}

#[derive(Debug, Deserialize)]
struct AssignmentRow {
    id: u64,
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    due_at: Option<DateTime<Utc>>,
}

impl AssignmentRow {
    fn into_descriptor(self, course_id: CourseId) -> AssignmentDescriptor {
        AssignmentDescriptor {
            course_id,
            assignment_id: AssignmentId(self.id),
            name: self.name,
            description: self.description.unwrap_or_default(),
            due_at: self.due_at,
        }
    }
}

impl LearningApi for CanvasClient {
    fn list_courses(&self) -> Result<Vec<Course>, LmsError> {
        let rows: Vec<CourseRow> = self.get_json("courses", || {
            LmsError::Upstream("course listing endpoint missing".to_string())
        })?;
        Ok(rows
            .into_iter()
            .map(|row| Course {
                id: CourseId(row.id),
                name: row.name,
            })
            .collect())
    }

    fn list_assignments(&self, course_id: CourseId) -> Result<Vec<AssignmentDescriptor>, LmsError> {
        let rows: Vec<AssignmentRow> = self.get_json(
            &format!("courses/{course_id}/assignments"),
            || LmsError::CourseNotFound(course_id),
        )?;
        Ok(rows
            .into_iter()
            .map(|row| row.into_descriptor(course_id))
            .collect())
    }

    fn get_assignment(
        &self,
        course_id: CourseId,
        assignment_id: AssignmentId,
    ) -> Result<AssignmentDescriptor, LmsError> {
        let row: AssignmentRow = self.get_json(
            &format!("courses/{course_id}/assignments/{assignment_id}"),
            || LmsError::AssignmentNotFound {
                course_id,
                assignment_id,
            },
        )?;
        Ok(row.into_descriptor(course_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assignment_row_parses_canvas_payload() {
        let json = r#"{
            "id": 67890,
            "name": "Lab 3: Sorting",
            "description": "<p>Sort things.</p>",
            "due_at": "2026-08-11T23:59:00Z",
            "points_possible": 100,
            "submission_types": ["online_upload"]
        }"#;
        let row: AssignmentRow = serde_json::from_str(json).expect("parse");
        let descriptor = row.into_descriptor(CourseId(12345));
        assert_eq!(descriptor.assignment_id, AssignmentId(67890));
        assert_eq!(descriptor.name, "Lab 3: Sorting");
        assert_eq!(descriptor.description, "<p>Sort things.</p>");
        assert!(descriptor.due_at.is_some());
    }

    #[test]
    fn assignment_row_tolerates_null_description_and_due_at() {
        let json = r#"{"id": 1, "name": "HW", "description": null, "due_at": null}"#;
        let row: AssignmentRow = serde_json::from_str(json).expect("parse");
        let descriptor = row.into_descriptor(CourseId(1));
        assert_eq!(descriptor.description, "");
        assert!(descriptor.due_at.is_none());
    }

    #[test]
    fn course_row_defaults_missing_name() {
        // Restricted-enrollment courses come back without a name field.
        let json = r#"{"id": 42, "access_restricted_by_date": true}"#;
        let row: CourseRow = serde_json::from_str(json).expect("parse");
        assert_eq!(row.id, 42);
        assert_eq!(row.name, "");
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = CanvasClient::new("https://canvas.example.edu/", "token");
        assert_eq!(client.base_url, "https://canvas.example.edu");
    }
}
