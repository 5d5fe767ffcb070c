//! Next-upcoming assignment selection.
//!
//! Pure function over a descriptor slice: no clock reads, no network. The
//! caller supplies `now`, which keeps the comparator independently testable.

use chrono::{DateTime, Utc};

use crate::types::AssignmentDescriptor;

/// Select the next upcoming assignment from `assignments`.
///
/// Keeps assignments whose `due_at` is non-null and strictly after `now`,
/// then picks the minimum `due_at`; equal timestamps tie-break on the
/// lowest `assignment_id` so repeated runs are reproducible.
///
/// Returns `None` when every assignment is undated or already due.
pub fn next_upcoming(
    assignments: &[AssignmentDescriptor],
    now: DateTime<Utc>,
) -> Option<&AssignmentDescriptor> {
    assignments
        .iter()
        .filter_map(|a| a.due_at.filter(|due| *due > now).map(|due| (due, a)))
        .min_by_key(|(due, a)| (*due, a.assignment_id))
        .map(|(_, a)| a)
}
