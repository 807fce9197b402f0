use crate::error::{Result, WatchError};
use crate::github::issues::GitHubIssue;

const USER_AGENT: &str = "labelwatch";
const ACCEPT: &str = "application/vnd.github.v3+json";
const PER_PAGE: &str = "100";

/// Thin client over the GitHub REST API, scoped to a single credential.
pub struct GitHubClient {
    client: reqwest::Client,
    api_base: String,
    token: String,
}

impl GitHubClient {
    /// Builds a client with a 30 second request timeout, so a stalled tracker
    /// fails the run instead of hanging it.
    pub fn new(api_base: &str, token: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;
        Ok(GitHubClient {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    /// Fetches the first page (up to 100) of open issues for `owner/repo`.
    ///
    /// A non-success status yields `WatchError::RemoteApi` with the raw body;
    /// a body that does not decode as a list of issues yields `WatchError::Parse`.
    pub async fn fetch_open_issues(&self, owner: &str, repo: &str) -> Result<Vec<GitHubIssue>> {
        let url = format!("{}/repos/{}/{}/issues", self.api_base, owner, repo);
        let response = self
            .client
            .get(&url)
            .query(&[("state", "open"), ("per_page", PER_PAGE)])
            .bearer_auth(&self.token)
            .header("Accept", ACCEPT)
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(WatchError::RemoteApi {
                service: "GitHub API",
                status: status.as_u16(),
                body,
            });
        }

        parse_github_issues(&body)
    }
}

pub fn parse_github_issues(body: &str) -> Result<Vec<GitHubIssue>> {
    Ok(serde_json::from_str::<Vec<GitHubIssue>>(body)?)
}
