//! GitHub REST client implementing [`RepoHost`].

use std::time::Duration;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Deserialize;
use serde_json::json;

use crate::api::{CreateRepoError, CreatedRepo, FileCommitError, RepoHost};

const API_ROOT: &str = "https://api.github.com";
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Blocking GitHub client authenticated with a personal access token.
///
/// Repositories are created under the authenticated user, or under `org`
/// when one is configured.
pub struct GitHubClient {
    agent: ureq::Agent,
    api_root: String,
    token: String,
    org: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RepoRow {
    html_url: String,
    full_name: String,
}

impl GitHubClient {
    pub fn new(token: impl Into<String>, org: Option<String>) -> Self {
        GitHubClient {
            agent: ureq::AgentBuilder::new().timeout(HTTP_TIMEOUT).build(),
            api_root: API_ROOT.to_string(),
            token: token.into(),
            org,
        }
    }

    fn request(&self, method: &str, url: &str) -> ureq::Request {
        self.agent
            .request(method, url)
            .set("Authorization", &format!("Bearer {}", self.token))
            .set("Accept", "application/vnd.github+json")
            .set("User-Agent", concat!("coursegen/", env!("CARGO_PKG_VERSION")))
    }
}

/// Best-effort body text for error messages; the status line alone hides
/// GitHub's useful `message` field.
fn body_snippet(response: ureq::Response) -> String {
    match response.into_string() {
        Ok(body) => body.chars().take(200).collect(),
        Err(_) => String::new(),
    }
}

impl RepoHost for GitHubClient {
    fn create_repository(
        &self,
        name: &str,
        description: &str,
    ) -> Result<CreatedRepo, CreateRepoError> {
        let url = match &self.org {
            Some(org) => format!("{}/orgs/{org}/repos", self.api_root),
            None => format!("{}/user/repos", self.api_root),
        };
        log::debug!("POST {url} name={name}");

        let payload = json!({
            "name": name,
            "description": description,
            "private": false,
            "auto_init": false,
        });

        match self.request("POST", &url).send_json(payload) {
            Ok(response) => {
                let row: RepoRow = response.into_json().map_err(|e| {
                    CreateRepoError::Creation(format!("malformed creation response: {e}"))
                })?;
                Ok(CreatedRepo {
                    repo_url: row.html_url,
                    full_name: row.full_name,
                })
            }
            // GitHub reports a taken name as 422 with "name already exists".
            Err(ureq::Error::Status(422, response)) => {
                let body = body_snippet(response);
                if body.contains("already exists") {
                    Err(CreateRepoError::NameCollision(name.to_string()))
                } else {
                    Err(CreateRepoError::Creation(format!("HTTP 422: {body}")))
                }
            }
            Err(ureq::Error::Status(code, response)) => Err(CreateRepoError::Creation(format!(
                "HTTP {code}: {}",
                body_snippet(response)
            ))),
            Err(ureq::Error::Transport(transport)) => {
                Err(CreateRepoError::Creation(transport.to_string()))
            }
        }
    }

    fn create_file(
        &self,
        repo: &CreatedRepo,
        path: &str,
        content: &str,
    ) -> Result<(), FileCommitError> {
        let url = format!("{}/repos/{}/contents/{path}", self.api_root, repo.full_name);
        log::debug!("PUT {url}");

        let payload = json!({
            "message": format!("Add {path}"),
            "content": STANDARD.encode(content.as_bytes()),
        });

        match self.request("PUT", &url).send_json(payload) {
            Ok(_) => Ok(()),
            Err(ureq::Error::Status(code, response)) => {
                Err(classify_commit_failure(code, body_snippet(response)))
            }
            // Timeouts and connection resets are worth another attempt.
            Err(ureq::Error::Transport(transport)) => {
                Err(FileCommitError::Transient(transport.to_string()))
            }
        }
    }
}

/// 429 and 5xx are transient, as is 403 when GitHub phrases it as rate
/// limiting; every other 4xx (401 auth, 404/409/422 path problems) is
/// permanent.
fn classify_commit_failure(code: u16, body: String) -> FileCommitError {
    let rate_limited = code == 403 && body.to_ascii_lowercase().contains("rate limit");
    if code == 429 || (500..=599).contains(&code) || rate_limited {
        FileCommitError::Transient(format!("HTTP {code}: {body}"))
    } else {
        FileCommitError::Permanent(format!("HTTP {code}: {body}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limited_403_is_transient() {
        let err = classify_commit_failure(403, "API rate limit exceeded".to_string());
        assert!(matches!(err, FileCommitError::Transient(_)));
    }

    #[test]
    fn plain_403_is_permanent() {
        let err = classify_commit_failure(403, "Resource not accessible".to_string());
        assert!(matches!(err, FileCommitError::Permanent(_)));
    }

    #[test]
    fn server_errors_and_429_are_transient() {
        assert!(matches!(
            classify_commit_failure(502, String::new()),
            FileCommitError::Transient(_)
        ));
        assert!(matches!(
            classify_commit_failure(429, String::new()),
            FileCommitError::Transient(_)
        ));
    }

    #[test]
    fn auth_and_validation_failures_are_permanent() {
        for code in [401, 404, 409, 422] {
            assert!(
                matches!(
                    classify_commit_failure(code, String::new()),
                    FileCommitError::Permanent(_)
                ),
                "HTTP {code} must be permanent"
            );
        }
    }

    #[test]
    fn repo_row_parses_creation_response() {
        let json = r#"{
            "id": 1,
            "name": "lab-3-sorting",
            "full_name": "octocat/lab-3-sorting",
            "html_url": "https://github.com/octocat/lab-3-sorting",
            "private": false
        }"#;
        let row: RepoRow = serde_json::from_str(json).expect("parse");
        assert_eq!(row.full_name, "octocat/lab-3-sorting");
        assert_eq!(row.html_url, "https://github.com/octocat/lab-3-sorting");
    }
}
