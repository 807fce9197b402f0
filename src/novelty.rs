use crate::github::issues::GitHubIssue;
use std::collections::HashSet;

/// Returns the issues in `current` whose number does not appear in `previous`.
///
/// Issue numbers are assumed unique within a repository. Order of `current`
/// is preserved.
pub fn find_new_issues(current: &[GitHubIssue], previous: &[GitHubIssue]) -> Vec<GitHubIssue> {
    let previous_numbers: HashSet<u64> = previous.iter().map(|issue| issue.number).collect();

    current
        .iter()
        .filter(|issue| !previous_numbers.contains(&issue.number))
        .cloned()
        .collect()
}
