//! Process configuration from environment variables.
//!
//! The pipeline crates treat these values as opaque, already-validated
//! inputs; all reading and validation happens here.

use thiserror::Error;

/// Default Canvas instance when `CANVAS_API_URL` is unset.
const DEFAULT_CANVAS_URL: &str = "https://canvas.instructure.com";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    MissingVar(&'static str),
}

/// Resolved process configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub canvas_base_url: String,
    pub canvas_token: String,
    pub github_token: String,
    /// Repositories land under this organization when set, otherwise
    /// under the authenticated user.
    pub github_org: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration through an injected lookup, so tests never
    /// touch process-global environment state.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let canvas_base_url = lookup("CANVAS_API_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CANVAS_URL.to_string());
        let canvas_token = required(&lookup, "CANVAS_API_TOKEN")?;
        let github_token = required(&lookup, "GITHUB_TOKEN")?;
        // A blank or commented-out value means "no organization".
        let github_org = lookup("GITHUB_ORG")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty() && !v.starts_with('#'));

        Ok(Config {
            canvas_base_url,
            canvas_token,
            github_token,
            github_org,
        })
    }
}

fn required(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<String, ConfigError> {
    lookup(name)
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::MissingVar(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn full_configuration_resolves() {
        let config = Config::from_lookup(lookup_from(&[
            ("CANVAS_API_URL", "https://canvas.example.edu"),
            ("CANVAS_API_TOKEN", "canvas-token"),
            ("GITHUB_TOKEN", "github-token"),
            ("GITHUB_ORG", "cs101-fall"),
        ]))
        .expect("config");
        assert_eq!(config.canvas_base_url, "https://canvas.example.edu");
        assert_eq!(config.github_org.as_deref(), Some("cs101-fall"));
    }

    #[test]
    fn canvas_url_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[
            ("CANVAS_API_TOKEN", "t"),
            ("GITHUB_TOKEN", "t"),
        ]))
        .expect("config");
        assert_eq!(config.canvas_base_url, DEFAULT_CANVAS_URL);
        assert!(config.github_org.is_none());
    }

    #[test]
    fn missing_tokens_are_reported_by_name() {
        let err = Config::from_lookup(lookup_from(&[("GITHUB_TOKEN", "t")]))
            .expect_err("canvas token missing");
        assert!(err.to_string().contains("CANVAS_API_TOKEN"));

        let err = Config::from_lookup(lookup_from(&[("CANVAS_API_TOKEN", "t")]))
            .expect_err("github token missing");
        assert!(err.to_string().contains("GITHUB_TOKEN"));
    }

    #[test]
    fn blank_or_commented_org_is_ignored() {
        for org in ["", "   ", "# set me later"] {
            let config = Config::from_lookup(lookup_from(&[
                ("CANVAS_API_TOKEN", "t"),
                ("GITHUB_TOKEN", "t"),
                ("GITHUB_ORG", org),
            ]))
            .expect("config");
            assert!(config.github_org.is_none(), "org {org:?} must be ignored");
        }
    }
}
