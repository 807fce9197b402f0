use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An open issue as returned by the GitHub issues endpoint.
///
/// Only the fields the watcher consumes are decoded; everything else in the
/// API payload is ignored. The same shape is written to the snapshot file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GitHubIssue {
    pub number: u64,
    pub title: String,
    pub html_url: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub labels: Vec<IssueLabel>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueLabel {
    pub name: String,
}

impl GitHubIssue {
    /// Label names joined for display, `"None"` when the issue is unlabeled.
    pub fn label_summary(&self) -> String {
        if self.labels.is_empty() {
            return "None".to_string();
        }
        self.labels
            .iter()
            .map(|label| label.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
