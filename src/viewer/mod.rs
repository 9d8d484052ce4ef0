//! External viewer process launcher
//!
//! The extraction server has no UI of its own; a graph viewer (netron by
//! default) displays the model and produces the node selection. This module
//! only spawns and tears down that process.

use std::path::Path;

use tokio::process::{Child, Command};
use tracing::info;

use crate::error::ExtractResult;

/// Default viewer command
pub const DEFAULT_VIEWER: &str = "netron";

/// Handle to a running viewer process
///
/// The child is killed when the handle is dropped.
#[derive(Debug)]
pub struct ViewerHandle {
    child: Child,
}

/// Launch a viewer process on the given model file
pub fn launch(command: &str, model: &Path) -> ExtractResult<ViewerHandle> {
    let child = Command::new(command)
        .arg(model)
        .kill_on_drop(true)
        .spawn()?;

    info!(command, model = %model.display(), "launched viewer process");
    Ok(ViewerHandle { child })
}

impl ViewerHandle {
    /// Wait for the viewer process to exit on its own
    pub async fn wait(&mut self) -> ExtractResult<std::process::ExitStatus> {
        Ok(self.child.wait().await?)
    }

    /// Terminate the viewer process and reap it
    pub async fn shutdown(mut self) -> ExtractResult<()> {
        // The process may already have exited
        self.child.start_kill().ok();
        self.child.wait().await?;
        Ok(())
    }
}

#[cfg(test)]
#[cfg(unix)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[tokio::test]
    async fn test_launch_and_wait() {
        let mut handle = launch("true", &PathBuf::from("/dev/null")).unwrap();
        let status = handle.wait().await.unwrap();
        assert!(status.success());
    }

    #[tokio::test]
    async fn test_shutdown_long_running_process() {
        let handle = launch("sleep", &PathBuf::from("60")).unwrap();
        handle.shutdown().await.unwrap();
    }

    #[test]
    fn test_launch_missing_command() {
        let result = launch("subnetron-no-such-viewer", &PathBuf::from("/dev/null"));
        assert!(result.is_err());
    }
}
