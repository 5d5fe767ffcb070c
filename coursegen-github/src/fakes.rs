//! In-memory fake for [`RepoHost`] (testing only).

use std::collections::{BTreeMap, BTreeSet, HashMap, VecDeque};
use std::sync::Mutex;

use coursegen_core::CancelToken;

use crate::api::{CreateRepoError, CreatedRepo, FileCommitError, RepoHost};

/// Scriptable fake repository host backed by mutex-guarded maps.
///
/// Failure scripts are consumed per call: `with_file_failures("main.py",
/// vec![Transient, Transient])` makes the first two commits of `main.py`
/// fail and every later one succeed.
#[derive(Debug, Default)]
pub struct FakeRepoHost {
    owner: String,
    taken_names: Mutex<BTreeSet<String>>,
    committed: Mutex<BTreeMap<String, String>>,
    file_failures: Mutex<HashMap<String, VecDeque<FileCommitError>>>,
    reject_creation: Option<String>,
    cancel_on_first_commit: Option<CancelToken>,
}

impl FakeRepoHost {
    pub fn new() -> Self {
        FakeRepoHost {
            owner: "octocat".to_string(),
            ..Self::default()
        }
    }

    /// Pre-claim a repository name so creation collides.
    pub fn with_taken_name(self, name: &str) -> Self {
        self.taken_names.lock().unwrap().insert(name.to_string());
        self
    }

    /// Script a sequence of failures for one path.
    pub fn with_file_failures(self, path: &str, failures: Vec<FileCommitError>) -> Self {
        self.file_failures
            .lock()
            .unwrap()
            .insert(path.to_string(), failures.into());
        self
    }

    /// Reject every creation attempt for a non-collision reason.
    pub fn with_creation_rejected(mut self, reason: &str) -> Self {
        self.reject_creation = Some(reason.to_string());
        self
    }

    /// Cancel `token` from inside the first `create_file` call, to
    /// exercise mid-commit cancellation drain.
    pub fn with_cancel_on_first_commit(mut self, token: CancelToken) -> Self {
        self.cancel_on_first_commit = Some(token);
        self
    }

    /// Names claimed on the host (pre-seeded and created), sorted.
    pub fn claimed_names(&self) -> Vec<String> {
        self.taken_names.lock().unwrap().iter().cloned().collect()
    }

    /// Paths committed so far.
    pub fn committed_paths(&self) -> BTreeSet<String> {
        self.committed.lock().unwrap().keys().cloned().collect()
    }

    /// Content of one committed path, if present.
    pub fn committed_content(&self, path: &str) -> Option<String> {
        self.committed.lock().unwrap().get(path).cloned()
    }
}

impl RepoHost for FakeRepoHost {
    fn create_repository(
        &self,
        name: &str,
        _description: &str,
    ) -> Result<CreatedRepo, CreateRepoError> {
        if let Some(reason) = &self.reject_creation {
            return Err(CreateRepoError::Creation(reason.clone()));
        }
        let mut taken = self.taken_names.lock().unwrap();
        if !taken.insert(name.to_string()) {
            return Err(CreateRepoError::NameCollision(name.to_string()));
        }
        Ok(CreatedRepo {
            repo_url: format!("https://github.com/{}/{name}", self.owner),
            full_name: format!("{}/{name}", self.owner),
        })
    }

    fn create_file(
        &self,
        _repo: &CreatedRepo,
        path: &str,
        content: &str,
    ) -> Result<(), FileCommitError> {
        if let Some(token) = &self.cancel_on_first_commit {
            token.cancel();
        }
        if let Some(failures) = self.file_failures.lock().unwrap().get_mut(path) {
            if let Some(failure) = failures.pop_front() {
                return Err(failure);
            }
        }
        self.committed
            .lock()
            .unwrap()
            .insert(path.to_string(), content.to_string());
        Ok(())
    }
}
