//! Domain types for the coursegen pipeline.
//!
//! Everything here is owned by a single pipeline run and discarded when it
//! completes; nothing is persisted. All types are serializable via serde so
//! the CLI can emit them as JSON.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed learning-management course identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CourseId(pub u64);

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u64> for CourseId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// A strongly-typed assignment identifier within a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AssignmentId(pub u64);

impl fmt::Display for AssignmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u64> for AssignmentId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

// ---------------------------------------------------------------------------
// Language
// ---------------------------------------------------------------------------

/// The closed set of languages coursegen can scaffold.
///
/// The template catalog is a total function over this enum; rejecting an
/// unknown language happens here, at the parse boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Python,
    Java,
    Javascript,
    Cpp,
}

impl Language {
    /// All supported languages in a stable order.
    pub fn all() -> &'static [Language] {
        &[
            Language::Python,
            Language::Java,
            Language::Javascript,
            Language::Cpp,
        ]
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::Python => write!(f, "python"),
            Language::Java => write!(f, "java"),
            Language::Javascript => write!(f, "javascript"),
            Language::Cpp => write!(f, "cpp"),
        }
    }
}

/// Returned when a language tag is not in the supported set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported language '{0}'; expected: python, java, javascript, cpp")]
pub struct UnsupportedLanguage(pub String);

impl FromStr for Language {
    type Err = UnsupportedLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "python" | "py" => Ok(Language::Python),
            "java" => Ok(Language::Java),
            "javascript" | "js" | "node" => Ok(Language::Javascript),
            "cpp" | "c++" => Ok(Language::Cpp),
            other => Err(UnsupportedLanguage(other.to_owned())),
        }
    }
}

// ---------------------------------------------------------------------------
// Domain structs
// ---------------------------------------------------------------------------

/// A course summary row, as returned by the course-listing operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub name: String,
}

/// Normalized record of one course assignment, as fetched from the
/// learning-management system. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentDescriptor {
    pub course_id: CourseId,
    pub assignment_id: AssignmentId,
    /// Human-readable assignment title; non-empty at the source.
    pub name: String,
    /// Rich-text description, possibly empty, possibly containing HTML.
    #[serde(default)]
    pub description: String,
    /// Assignments may have no due date at all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_at: Option<DateTime<Utc>>,
}

/// One rendered scaffold file, ready to commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedFile {
    /// Path relative to the repository root, forward slashes.
    pub relative_path: String,
    pub content: String,
}

/// The fully rendered file set plus target repository name.
///
/// Invariants (upheld by the renderer): `files` is non-empty and
/// `relative_path` values are unique within one plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishPlan {
    /// Base repository name, derived from the assignment slug. The
    /// publisher may append a numeric suffix on collision.
    pub target_repo_name: String,
    /// One-line repository description shown on the remote host.
    pub repo_description: String,
    pub files: Vec<RenderedFile>,
}

/// Phases of a single publish run.
///
/// `Creating → Committing → Done`, with `Partial` reachable from
/// `Committing` when one or more files fail permanently. `Done` and
/// `Partial` are the terminal phases carried in [`PublishResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublishPhase {
    Creating,
    Committing,
    Done,
    Partial,
}

impl fmt::Display for PublishPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PublishPhase::Creating => write!(f, "creating"),
            PublishPhase::Committing => write!(f, "committing"),
            PublishPhase::Done => write!(f, "done"),
            PublishPhase::Partial => write!(f, "partial"),
        }
    }
}

/// Outcome of one publish run.
///
/// A non-empty `failed_paths` means the run ended in [`PublishPhase::Partial`]:
/// the repository exists and every listed path needs manual remediation.
/// BTree containers keep reporting order deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishResult {
    pub repo_url: String,
    /// Terminal phase: `Done` or `Partial`.
    pub phase: PublishPhase,
    pub committed_paths: BTreeSet<String>,
    /// Relative path → human-readable failure reason.
    pub failed_paths: BTreeMap<String, String>,
}

impl PublishResult {
    pub fn is_partial(&self) -> bool {
        matches!(self.phase, PublishPhase::Partial)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
