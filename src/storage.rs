use crate::error::{Result, WatchError};
use crate::github::issues::GitHubIssue;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Abstract snapshot persistence interface
pub trait IssueStore {
    /// Return the last saved snapshot. Absent or unreadable state yields an empty list.
    fn load(&self) -> Vec<GitHubIssue>;
    /// Replace the snapshot with `issues`
    fn save(&self, issues: &[GitHubIssue]) -> Result<()>;
}

/// File-based snapshot persistence implementation
pub struct FileIssueStore {
    path: PathBuf,
}

impl FileIssueStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileIssueStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn write_error(&self, source: std::io::Error) -> WatchError {
        WatchError::StorageWrite {
            path: self.path.clone(),
            source,
        }
    }
}

impl IssueStore for FileIssueStore {
    fn load(&self) -> Vec<GitHubIssue> {
        if !self.path.exists() {
            return Vec::new();
        }
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("Could not load previous issues: {e}");
                return Vec::new();
            }
        };
        match serde_json::from_str(&content) {
            Ok(issues) => issues,
            Err(e) => {
                tracing::warn!("Could not load previous issues: {e}");
                Vec::new()
            }
        }
    }

    fn save(&self, issues: &[GitHubIssue]) -> Result<()> {
        let json = serde_json::to_string_pretty(issues)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.write_error(e))?;
        }

        // Rename over the target so a reader never sees a half-written file.
        let temp = self.temp_path();
        fs::write(&temp, json).map_err(|e| self.write_error(e))?;
        if let Err(e) = fs::rename(&temp, &self.path) {
            let _ = fs::remove_file(&temp);
            return Err(self.write_error(e));
        }

        tracing::info!("Saved {} issues to {}", issues.len(), self.path.display());
        Ok(())
    }
}

/// In-memory snapshot, for runs that should leave no trace on disk.
#[derive(Default)]
pub struct MemoryIssueStore {
    issues: Mutex<Option<Vec<GitHubIssue>>>,
}

impl MemoryIssueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_issues(issues: Vec<GitHubIssue>) -> Self {
        MemoryIssueStore {
            issues: Mutex::new(Some(issues)),
        }
    }

    /// The saved snapshot, or `None` if nothing has been stored yet.
    pub fn snapshot(&self) -> Option<Vec<GitHubIssue>> {
        self.issues
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl IssueStore for MemoryIssueStore {
    fn load(&self) -> Vec<GitHubIssue> {
        self.snapshot().unwrap_or_default()
    }

    fn save(&self, issues: &[GitHubIssue]) -> Result<()> {
        *self
            .issues
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(issues.to_vec());
        Ok(())
    }
}
