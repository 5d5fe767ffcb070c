//! Repository publisher — creates the remote repository and commits the
//! rendered file set.
//!
//! ## State machine
//!
//! `Creating → Committing → Done`, with `Partial` reachable from
//! `Committing` when at least one file fails permanently. Both terminal
//! phases return a [`PublishResult`]; a created repository is never rolled
//! back.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;
use std::time::Duration;

use coursegen_core::{CancelToken, PublishPhase, PublishPlan, PublishResult, RenderedFile};

use crate::api::{CreateRepoError, CreatedRepo, FileCommitError, RepoHost};
use crate::error::PublishError;

/// Tunable bounds for one publish run.
#[derive(Debug, Clone)]
pub struct PublishOptions {
    /// Total repository-creation attempts, counting the unsuffixed name.
    pub max_create_attempts: usize,
    /// Per-file attempts for transient commit failures.
    pub max_file_attempts: usize,
    /// First backoff delay; doubles per retry.
    pub retry_base_delay: Duration,
    /// Concurrent file uploads.
    pub workers: usize,
}

impl Default for PublishOptions {
    fn default() -> Self {
        PublishOptions {
            max_create_attempts: 5,
            max_file_attempts: 3,
            retry_base_delay: Duration::from_millis(250),
            workers: 4,
        }
    }
}

/// Publishes a [`PublishPlan`] against a [`RepoHost`].
pub struct RepositoryPublisher<'a> {
    host: &'a dyn RepoHost,
    options: PublishOptions,
}

impl<'a> RepositoryPublisher<'a> {
    pub fn new(host: &'a dyn RepoHost) -> Self {
        Self::with_options(host, PublishOptions::default())
    }

    pub fn with_options(host: &'a dyn RepoHost, options: PublishOptions) -> Self {
        RepositoryPublisher { host, options }
    }

    /// Run the full publish state machine for `plan`.
    ///
    /// Returns `Err` only when no repository was created (exhausted names,
    /// rejected creation, or cancellation beforehand). Once the repository
    /// exists, the outcome is always a [`PublishResult`] — `Partial` when
    /// files remain uncommitted.
    pub fn publish(
        &self,
        plan: &PublishPlan,
        cancel: &CancelToken,
    ) -> Result<PublishResult, PublishError> {
        if cancel.is_cancelled() {
            return Err(PublishError::Cancelled);
        }

        log::info!(
            "phase {}: repository '{}'",
            PublishPhase::Creating,
            plan.target_repo_name
        );
        let repo = self.create_with_suffix(plan)?;

        log::info!(
            "phase {}: {} file(s) with {} worker(s)",
            PublishPhase::Committing,
            plan.files.len(),
            self.options.workers
        );
        let outcomes = self.commit_files(&repo, &plan.files, cancel);

        let mut committed_paths = BTreeSet::new();
        let mut failed_paths = BTreeMap::new();
        for (path, outcome) in outcomes {
            match outcome {
                Ok(()) => {
                    committed_paths.insert(path);
                }
                Err(reason) => {
                    failed_paths.insert(path, reason);
                }
            }
        }

        let phase = if failed_paths.is_empty() {
            PublishPhase::Done
        } else {
            PublishPhase::Partial
        };
        log::info!(
            "phase {phase}: {} committed, {} failed",
            committed_paths.len(),
            failed_paths.len()
        );

        Ok(PublishResult {
            repo_url: repo.repo_url,
            phase,
            committed_paths,
            failed_paths,
        })
    }

    /// Creation with bounded numeric disambiguation: `name`, `name-2`,
    /// `name-3`, … A non-collision rejection ends the run immediately.
    fn create_with_suffix(&self, plan: &PublishPlan) -> Result<CreatedRepo, PublishError> {
        for attempt in 1..=self.options.max_create_attempts {
            let name = if attempt == 1 {
                plan.target_repo_name.clone()
            } else {
                format!("{}-{attempt}", plan.target_repo_name)
            };

            match self.host.create_repository(&name, &plan.repo_description) {
                Ok(repo) => {
                    log::info!("created {}", repo.repo_url);
                    return Ok(repo);
                }
                Err(CreateRepoError::NameCollision(taken)) => {
                    log::warn!("name '{taken}' taken (attempt {attempt}), trying next suffix");
                }
                Err(err @ CreateRepoError::Creation(_)) => {
                    return Err(PublishError::RepositoryCreationExhausted {
                        attempts: attempt,
                        reason: err.to_string(),
                    });
                }
            }
        }

        Err(PublishError::RepositoryCreationExhausted {
            attempts: self.options.max_create_attempts,
            reason: "every candidate name is already taken".to_string(),
        })
    }

    /// Commit every file, each tracked independently. Workers pull from a
    /// shared index; a cancelled token stops new claims while in-flight
    /// uploads drain.
    fn commit_files(
        &self,
        repo: &CreatedRepo,
        files: &[RenderedFile],
        cancel: &CancelToken,
    ) -> Vec<(String, Result<(), String>)> {
        let workers = self.options.workers.min(files.len()).max(1);
        let next = AtomicUsize::new(0);
        let (tx, rx) = mpsc::channel::<(String, Result<(), String>)>();

        std::thread::scope(|scope| {
            for _ in 0..workers {
                let tx = tx.clone();
                let next = &next;
                scope.spawn(move || loop {
                    let idx = next.fetch_add(1, Ordering::SeqCst);
                    if idx >= files.len() {
                        break;
                    }
                    let file = &files[idx];
                    let outcome = if cancel.is_cancelled() {
                        Err("cancelled before commit".to_string())
                    } else {
                        self.commit_one(repo, file)
                    };
                    // The receiver outlives the scope; a send cannot fail.
                    let _ = tx.send((file.relative_path.clone(), outcome));
                });
            }
        });
        drop(tx);

        rx.iter().collect()
    }

    /// One file with bounded exponential backoff on transient failures.
    fn commit_one(&self, repo: &CreatedRepo, file: &RenderedFile) -> Result<(), String> {
        let mut delay = self.options.retry_base_delay;
        let mut attempt = 1;
        loop {
            match self.host.create_file(repo, &file.relative_path, &file.content) {
                Ok(()) => {
                    log::debug!("committed {}", file.relative_path);
                    return Ok(());
                }
                Err(FileCommitError::Transient(reason))
                    if attempt < self.options.max_file_attempts =>
                {
                    log::warn!(
                        "{}: attempt {attempt} failed ({reason}), retrying in {delay:?}",
                        file.relative_path
                    );
                    std::thread::sleep(delay);
                    delay *= 2;
                    attempt += 1;
                }
                Err(FileCommitError::Transient(reason)) => {
                    return Err(format!(
                        "still failing after {} attempts: {reason}",
                        self.options.max_file_attempts
                    ));
                }
                Err(FileCommitError::Permanent(reason)) => {
                    log::warn!("{}: permanent failure: {reason}", file.relative_path);
                    return Err(reason);
                }
            }
        }
    }
}
