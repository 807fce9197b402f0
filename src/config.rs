use crate::error::{Result, WatchError};
use std::path::PathBuf;

/// Configuration keys enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    GithubToken,
    RepoOwner,
    RepoName,
    NtfyTopic,
    TargetLabels,
    StorageFile,
    GithubApiUrl,
    NtfyUrl,
    NtfyPriority,
}

impl ConfigKey {
    /// Environment variable name backing this key.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigKey::GithubToken => "GITHUB_TOKEN",
            ConfigKey::RepoOwner => "REPO_OWNER",
            ConfigKey::RepoName => "REPO_NAME",
            ConfigKey::NtfyTopic => "NTFY_TOPIC",
            ConfigKey::TargetLabels => "TARGET_LABELS",
            ConfigKey::StorageFile => "STORAGE_FILE",
            ConfigKey::GithubApiUrl => "GITHUB_API_URL",
            ConfigKey::NtfyUrl => "NTFY_URL",
            ConfigKey::NtfyPriority => "NTFY_PRIORITY",
        }
    }

    /// Get all config keys
    pub fn all() -> &'static [ConfigKey] {
        &[
            ConfigKey::GithubToken,
            ConfigKey::RepoOwner,
            ConfigKey::RepoName,
            ConfigKey::NtfyTopic,
            ConfigKey::TargetLabels,
            ConfigKey::StorageFile,
            ConfigKey::GithubApiUrl,
            ConfigKey::NtfyUrl,
            ConfigKey::NtfyPriority,
        ]
    }
}

pub const DEFAULT_TARGET_LABELS: &[&str] = &["help wanted", "external"];
pub const DEFAULT_STORAGE_FILE: &str = "previous-issues.json";
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";
pub const DEFAULT_NTFY_URL: &str = "https://ntfy.sh";
pub const DEFAULT_NTFY_PRIORITY: u8 = 4;

/// Everything a single run needs, resolved up front.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub token: String,
    pub owner: String,
    pub repo: String,
    pub ntfy_topic: Option<String>,
    pub target_labels: Vec<String>,
    pub storage_file: PathBuf,
    pub github_api_url: String,
    pub ntfy_url: String,
    pub ntfy_priority: u8,
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key.as_str()).ok())
    }

    /// Builds a configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated the same as missing ones. Required keys are
    /// checked before anything else so a misconfigured run never reaches the
    /// network.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(ConfigKey) -> Option<String>,
    {
        let get = |key: ConfigKey| lookup(key).filter(|value| !value.trim().is_empty());

        let token = get(ConfigKey::GithubToken).ok_or_else(|| {
            WatchError::Config(format!(
                "{} environment variable is required",
                ConfigKey::GithubToken.as_str()
            ))
        })?;

        let (owner, repo) = match (get(ConfigKey::RepoOwner), get(ConfigKey::RepoName)) {
            (Some(owner), Some(repo)) => (owner, repo),
            _ => {
                return Err(WatchError::Config(format!(
                    "{} and {} environment variables are required",
                    ConfigKey::RepoOwner.as_str(),
                    ConfigKey::RepoName.as_str()
                )));
            }
        };

        let target_labels = match get(ConfigKey::TargetLabels) {
            Some(raw) => parse_label_list(&raw),
            None => DEFAULT_TARGET_LABELS.iter().map(|l| l.to_string()).collect(),
        };

        let ntfy_priority = match get(ConfigKey::NtfyPriority) {
            Some(raw) => parse_priority(&raw)?,
            None => DEFAULT_NTFY_PRIORITY,
        };

        Ok(Config {
            token,
            owner,
            repo,
            ntfy_topic: get(ConfigKey::NtfyTopic),
            target_labels,
            storage_file: get(ConfigKey::StorageFile)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STORAGE_FILE)),
            github_api_url: get(ConfigKey::GithubApiUrl)
                .unwrap_or_else(|| DEFAULT_GITHUB_API_URL.to_string()),
            ntfy_url: get(ConfigKey::NtfyUrl).unwrap_or_else(|| DEFAULT_NTFY_URL.to_string()),
            ntfy_priority,
        })
    }
}

/// Splits a comma-separated label list, trimming entries and dropping empty ones.
pub fn parse_label_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_priority(raw: &str) -> Result<u8> {
    match raw.trim().parse::<u8>() {
        Ok(priority) if (1..=5).contains(&priority) => Ok(priority),
        _ => Err(WatchError::Config(format!(
            "{} must be an integer between 1 and 5, got '{}'",
            ConfigKey::NtfyPriority.as_str(),
            raw
        ))),
    }
}
