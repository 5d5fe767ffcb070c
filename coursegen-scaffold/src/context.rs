//! Scaffold context — serializable rendering payload built from an
//! [`AssignmentDescriptor`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use coursegen_core::{slug, AssignmentDescriptor};

use crate::error::RenderError;

/// Literal substituted for a missing due date.
pub const NO_DUE_DATE: &str = "No due date";

/// Descriptions are truncated to this many characters after cleanup.
const DESCRIPTION_MAX_LEN: usize = 200;

/// Rendering payload for one assignment.
///
/// Every template placeholder maps to exactly one field here; an unresolved
/// placeholder is a template bug, not a runtime condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaffoldContext {
    /// Raw assignment title.
    pub assignment_name: String,
    /// Cleaned description: HTML stripped, whitespace collapsed, bounded
    /// length, comment-safe.
    pub assignment_description: String,
    /// `%Y-%m-%d` or [`NO_DUE_DATE`].
    pub due_date: String,
    pub repo_slug: String,
}

impl ScaffoldContext {
    /// Build a [`ScaffoldContext`] from an assignment descriptor.
    pub fn from_assignment(assignment: &AssignmentDescriptor) -> Result<Self, RenderError> {
        let repo_slug = slug::repo_slug(&assignment.name).ok_or_else(|| {
            RenderError::InvalidAssignmentName {
                name: assignment.name.clone(),
            }
        })?;

        Ok(ScaffoldContext {
            assignment_name: assignment.name.clone(),
            assignment_description: clean_description(&assignment.description),
            due_date: format_due_date(assignment.due_at),
            repo_slug,
        })
    }

    /// Convert to a [`tera::Context`] for rendering.
    pub fn to_tera_context(&self) -> Result<tera::Context, RenderError> {
        tera::Context::from_serialize(self).map_err(RenderError::from)
    }
}

fn format_due_date(due_at: Option<DateTime<Utc>>) -> String {
    match due_at {
        Some(due) => due.format("%Y-%m-%d").to_string(),
        None => NO_DUE_DATE.to_string(),
    }
}

/// Strip HTML tags, collapse whitespace, bound the length, and neutralise
/// sequences that would terminate the comment blocks the templates embed
/// the description in.
fn clean_description(raw: &str) -> String {
    let mut text = String::with_capacity(raw.len());
    let mut in_tag = false;
    for c in raw.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            c if !in_tag => text.push(c),
            _ => {}
        }
    }

    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    let bounded: String = collapsed.chars().take(DESCRIPTION_MAX_LEN).collect();
    bounded.replace("*/", "* /").replace("\"\"\"", "'''")
}
