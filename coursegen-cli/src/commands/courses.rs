//! `coursegen courses` — list Canvas courses.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use tabled::{settings::Style, Table, Tabled};

use coursegen_canvas::{CanvasClient, LearningApi};
use coursegen_core::Course;

use crate::config::Config;

/// Arguments for `coursegen courses`.
#[derive(Args, Debug)]
pub struct CoursesArgs {
    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Tabled)]
struct CourseTableRow {
    #[tabled(rename = "id")]
    id: u64,
    #[tabled(rename = "course")]
    name: String,
}

impl CoursesArgs {
    pub fn run(self, config: &Config) -> Result<()> {
        let client = CanvasClient::new(&config.canvas_base_url, &config.canvas_token);
        let courses = client
            .list_courses()
            .context("failed to list courses — check CANVAS_API_URL and CANVAS_API_TOKEN")?;

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&courses).context("failed to serialize courses")?
            );
            return Ok(());
        }

        print_table(&courses);
        Ok(())
    }
}

fn print_table(courses: &[Course]) {
    if courses.is_empty() {
        println!("No courses visible to this token.");
        return;
    }

    let rows: Vec<CourseTableRow> = courses
        .iter()
        .map(|course| CourseTableRow {
            id: course.id.0,
            name: course.name.clone(),
        })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");
    println!("{}", format!("{} course(s)", courses.len()).bright_black());
}
