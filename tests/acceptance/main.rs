use cucumber::World;
use labelwatch::error::WatchError;
use labelwatch::run::RunReport;
use std::process::ExitStatus;
use wiremock::MockServer;

#[derive(Default, World)]
pub struct WatchWorld {
    pub tracker: Option<MockServer>,
    pub ntfy: Option<MockServer>,
    pub state_dir: Option<tempfile::TempDir>,
    pub captured_output: Vec<u8>,
    pub captured_error: Vec<u8>,
    pub run_result: Option<Result<RunReport, WatchError>>,
    pub command_status: Option<ExitStatus>,
}

impl std::fmt::Debug for WatchWorld {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatchWorld")
            .field("tracker", &self.tracker.as_ref().map(|s| s.uri()))
            .field("ntfy", &self.ntfy.as_ref().map(|s| s.uri()))
            .field("state_dir", &self.state_dir)
            .field("run_result", &self.run_result)
            .field("command_status", &self.command_status)
            .finish()
    }
}

impl WatchWorld {
    pub fn storage_path(&mut self) -> std::path::PathBuf {
        self.state_dir
            .get_or_insert_with(|| tempfile::tempdir().expect("Failed to create state dir"))
            .path()
            .join("previous-issues.json")
    }
}

#[tokio::main]
async fn main() {
    // `MockServer::drop` blocks on a tokio lock; dropping it with the shared
    // task's coop budget exhausted spins forever, so drop the servers unconstrained.
    WatchWorld::cucumber()
        .after(|_, _, _, _, world| {
            Box::pin(async move {
                if let Some(world) = world {
                    tokio::task::unconstrained(async {
                        world.tracker.take();
                        world.ntfy.take();
                    })
                    .await;
                }
            })
        })
        .run("features")
        .await;
}
