//! Coursegen — assignment-to-repository scaffolding CLI.
//!
//! # Usage
//!
//! ```text
//! coursegen courses [--json]
//! coursegen assignments <course-id> [--json]
//! coursegen create <course-id> [--assignment-id <id>] [--language python|java|javascript|cpp]
//! ```
//!
//! Configuration comes from the environment: `CANVAS_API_URL`,
//! `CANVAS_API_TOKEN`, `GITHUB_TOKEN`, and optionally `GITHUB_ORG`.

mod commands;
mod config;

use std::fmt;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use commands::{assignments::AssignmentsArgs, courses::CoursesArgs, create::CreateArgs};
use config::Config;
use coursegen_core::{Language, UnsupportedLanguage};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "coursegen",
    version,
    about = "Create ready-to-use assignment repositories from Canvas courses",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List Canvas courses visible to the configured token.
    Courses(CoursesArgs),

    /// List the assignments of a course with their due dates.
    Assignments(AssignmentsArgs),

    /// Create a remote repository scaffold for an assignment.
    Create(CreateArgs),
}

// ---------------------------------------------------------------------------
// Shared Language argument — parsed from CLI strings, converts to core type
// ---------------------------------------------------------------------------

/// Thin wrapper so clap can parse [`Language`] from CLI args.
#[derive(Debug, Clone, Default)]
pub struct LanguageArg(pub Language);

impl FromStr for LanguageArg {
    type Err = UnsupportedLanguage;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.parse::<Language>().map(Self)
    }
}

impl fmt::Display for LanguageArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<LanguageArg> for Language {
    fn from(arg: LanguageArg) -> Self {
        arg.0
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = Config::from_env().context("incomplete configuration")?;
    match cli.command {
        Commands::Courses(args) => args.run(&config),
        Commands::Assignments(args) => args.run(&config),
        Commands::Create(args) => args.run(&config),
    }
}
