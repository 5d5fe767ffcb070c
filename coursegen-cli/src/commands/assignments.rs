//! `coursegen assignments` — list a course's assignments.

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Args;
use colored::Colorize;
use tabled::{settings::Style, Table, Tabled};

use coursegen_canvas::{CanvasClient, LearningApi};
use coursegen_core::{select, AssignmentDescriptor, CourseId};

use crate::config::Config;

/// Arguments for `coursegen assignments`.
#[derive(Args, Debug)]
pub struct AssignmentsArgs {
    /// Canvas course ID (see `coursegen courses`).
    pub course_id: u64,

    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Tabled)]
struct AssignmentTableRow {
    #[tabled(rename = "id")]
    id: u64,
    #[tabled(rename = "assignment")]
    name: String,
    #[tabled(rename = "due")]
    due: String,
}

impl AssignmentsArgs {
    pub fn run(self, config: &Config) -> Result<()> {
        let course_id = CourseId(self.course_id);
        let client = CanvasClient::new(&config.canvas_base_url, &config.canvas_token);
        let assignments = client
            .list_assignments(course_id)
            .with_context(|| format!("failed to list assignments for course {course_id}"))?;

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&assignments)
                    .context("failed to serialize assignments")?
            );
            return Ok(());
        }

        print_table(&assignments);
        Ok(())
    }
}

fn print_table(assignments: &[AssignmentDescriptor]) {
    if assignments.is_empty() {
        println!("No assignments in this course.");
        return;
    }

    let rows: Vec<AssignmentTableRow> = assignments
        .iter()
        .map(|a| AssignmentTableRow {
            id: a.assignment_id.0,
            name: a.name.clone(),
            due: match a.due_at {
                Some(due) => due.format("%Y-%m-%d %H:%M").to_string(),
                None => "no due date".to_string(),
            },
        })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");

    match select::next_upcoming(assignments, Utc::now()) {
        Some(next) => println!(
            "Next upcoming: {} (id {})",
            next.name.bold(),
            next.assignment_id
        ),
        None => println!(
            "{}",
            "No upcoming assignment — every entry is undated or past due.".yellow()
        ),
    }
}
