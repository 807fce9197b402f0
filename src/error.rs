use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while watching a repository.
///
/// Only `Config` and failures of the tracker fetch end a run; the rest are
/// logged by the orchestrator and the run carries on.
#[derive(Debug, Error)]
pub enum WatchError {
    #[error("{0}")]
    Config(String),

    #[error("{service} returned status {status}: {body}")]
    RemoteApi {
        service: &'static str,
        status: u16,
        body: String,
    },

    #[error("Error parsing JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to write snapshot to {}: {source}", path.display())]
    StorageWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, WatchError>;
