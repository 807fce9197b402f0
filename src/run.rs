use crate::config::Config;
use crate::error::Result;
use crate::filter;
use crate::github::issues::GitHubIssue;
use crate::github::pull::GitHubClient;
use crate::notify::{self, Notification, NtfyClient};
use crate::novelty;
use crate::output;
use crate::storage::IssueStore;
use chrono::SecondsFormat;

/// Outcome of a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    /// Open issues returned by the tracker.
    pub fetched: usize,
    /// Issues that carried at least one target label.
    pub matched: usize,
    pub new_issues: Vec<GitHubIssue>,
    pub notified: bool,
    pub saved: bool,
}

/// Fetch, filter, diff against the stored snapshot, notify, then persist.
///
/// Only a failed fetch aborts the run. Snapshot load, notification, report
/// output and snapshot save failures are logged and the run continues.
pub async fn run(
    config: &Config,
    store: &dyn IssueStore,
    mut stdout_additional: Option<&mut dyn std::io::Write>,
) -> Result<RunReport> {
    tracing::info!("Fetching issues from {}/{}...", config.owner, config.repo);
    let github = GitHubClient::new(&config.github_api_url, &config.token)?;
    let issues = github.fetch_open_issues(&config.owner, &config.repo).await?;

    let filtered = filter::filter_by_labels(&issues, &config.target_labels);
    tracing::info!(
        "Found {} open issues, {} labeled {}",
        issues.len(),
        filtered.len(),
        config.target_labels.join(" or ")
    );

    let previous = store.load();
    let new_issues = novelty::find_new_issues(&filtered, &previous);

    let mut notified = false;
    if new_issues.is_empty() {
        warn_on_output_error(output::println(
            "\n✅ No new issues found since last check",
            &mut stdout_additional,
        ));
    } else {
        warn_on_output_error(output::println(
            &format!("\n🆕 Found {} new issues:", new_issues.len()),
            &mut stdout_additional,
        ));

        if let Some(topic) = &config.ntfy_topic {
            let message = notify::build_message(&new_issues, &config.target_labels);
            match send_notification(config, topic, &message).await {
                Ok(()) => {
                    tracing::info!("📱 Notification sent successfully");
                    notified = true;
                }
                Err(e) => tracing::error!("Failed to send notification: {e}"),
            }
        }

        for (index, issue) in new_issues.iter().enumerate() {
            warn_on_output_error(report_issue(index + 1, issue, &mut stdout_additional));
        }
    }

    let saved = match store.save(&filtered) {
        Ok(()) => true,
        Err(e) => {
            tracing::error!("Error saving issues: {e}");
            false
        }
    };

    Ok(RunReport {
        fetched: issues.len(),
        matched: filtered.len(),
        new_issues,
        notified,
        saved,
    })
}

async fn send_notification(config: &Config, topic: &str, message: &str) -> Result<()> {
    let notification = Notification::new(
        topic,
        &notify::notification_title(&config.owner, &config.repo),
        message,
        config.ntfy_priority,
        &notify::issues_view_url(&config.owner, &config.repo, &config.target_labels),
    );
    NtfyClient::new(&config.ntfy_url)?
        .send(&notification)
        .await
}

fn warn_on_output_error(result: std::io::Result<()>) {
    if let Err(e) = result {
        tracing::warn!("Failed to write report: {e}");
    }
}

fn report_issue(
    position: usize,
    issue: &GitHubIssue,
    writer: &mut Option<&mut dyn std::io::Write>,
) -> std::io::Result<()> {
    output::println(
        &format!("{}. #{} - {}", position, issue.number, issue.title),
        writer,
    )?;
    output::println(
        &format!(
            "   Created: {}",
            issue.created_at.to_rfc3339_opts(SecondsFormat::Millis, true)
        ),
        writer,
    )?;
    output::println(&format!("   Labels: {}", issue.label_summary()), writer)?;
    output::println(&format!("   URL: {}", issue.html_url), writer)?;
    output::println("", writer)?;
    Ok(())
}
