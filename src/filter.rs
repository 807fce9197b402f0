use crate::github::issues::GitHubIssue;

/// Keeps the issues carrying at least one of `target_labels`.
///
/// Label names are compared case-insensitively; input order is preserved.
pub fn filter_by_labels<S: AsRef<str>>(
    issues: &[GitHubIssue],
    target_labels: &[S],
) -> Vec<GitHubIssue> {
    let targets: Vec<String> = target_labels
        .iter()
        .map(|label| label.as_ref().to_lowercase())
        .collect();

    issues
        .iter()
        .filter(|issue| {
            issue
                .labels
                .iter()
                .any(|label| targets.contains(&label.name.to_lowercase()))
        })
        .cloned()
        .collect()
}
