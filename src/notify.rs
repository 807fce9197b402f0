use crate::error::{Result, WatchError};
use crate::github::issues::GitHubIssue;
use serde::Serialize;

const TAGS: &[&str] = &["warning", "computer"];
const GITHUB_WEB_URL: &str = "https://github.com";

/// JSON payload accepted by ntfy at the server root.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Notification {
    pub topic: String,
    pub title: String,
    pub message: String,
    pub priority: u8,
    pub tags: Vec<String>,
    pub click: String,
}

impl Notification {
    pub fn new(topic: &str, title: &str, message: &str, priority: u8, click: &str) -> Self {
        Notification {
            topic: topic.to_string(),
            title: title.to_string(),
            message: message.to_string(),
            priority,
            tags: TAGS.iter().map(|t| t.to_string()).collect(),
            click: click.to_string(),
        }
    }
}

pub struct NtfyClient {
    client: reqwest::Client,
    base_url: String,
}

impl NtfyClient {
    /// Builds a client with the same 30 second timeout as `GitHubClient`.
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;
        Ok(NtfyClient {
            client,
            base_url: base_url.to_string(),
        })
    }

    /// Publishes `notification`. Anything other than HTTP 200 is an error.
    pub async fn send(&self, notification: &Notification) -> Result<()> {
        let response = self
            .client
            .post(&self.base_url)
            .json(notification)
            .send()
            .await?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(WatchError::RemoteApi {
                service: "ntfy",
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }
}

pub fn notification_title(owner: &str, repo: &str) -> String {
    format!("🆕 New issues in {owner}/{repo}")
}

/// Composes the push message body: a header line, then one numbered
/// `#number / title / url` block per issue.
pub fn build_message<S: AsRef<str>>(new_issues: &[GitHubIssue], target_labels: &[S]) -> String {
    let labels = target_labels
        .iter()
        .map(|l| l.as_ref())
        .collect::<Vec<_>>()
        .join("/");
    let issues_list = new_issues
        .iter()
        .enumerate()
        .map(|(index, issue)| {
            format!(
                "{}. Issue #{}\n   {}\n   {}",
                index + 1,
                issue.number,
                issue.title,
                issue.html_url
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "Found {} new issues labeled {}:\n\n{}",
        new_issues.len(),
        labels,
        issues_list
    )
}

/// Web view of the repository's open issues carrying any of the target labels.
pub fn issues_view_url<S: AsRef<str>>(owner: &str, repo: &str, target_labels: &[S]) -> String {
    let base = format!("{GITHUB_WEB_URL}/{owner}/{repo}/issues");
    let labels = target_labels
        .iter()
        .map(|l| format!("\"{}\"", l.as_ref()))
        .collect::<Vec<_>>()
        .join(",");
    let query = format!("is:issue state:open label:{labels}");

    reqwest::Url::parse_with_params(&base, &[("q", query)])
        .map(String::from)
        .unwrap_or(base)
}
