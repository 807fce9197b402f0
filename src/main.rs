use anyhow::Context;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match watch().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn watch() -> anyhow::Result<()> {
    let config = labelwatch::config::Config::from_env()?;
    let store = labelwatch::storage::FileIssueStore::new(&config.storage_file);
    labelwatch::run::run(&config, &store, None)
        .await
        .with_context(|| format!("Failed to check {}/{}", config.owner, config.repo))?;
    Ok(())
}
