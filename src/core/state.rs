use std::env;
use std::io;
use std::path::PathBuf;

use tracing::warn;

use super::status::ExitStatus;

/// State carried from one command line to the next.
#[derive(Debug, Clone)]
pub struct ShellState {
    pub status: ExitStatus,
    /// The shell's working directory. Empty when it could not be determined
    /// at startup; children then inherit the process's directory as is.
    pub current_dir: PathBuf,
    /// Whether `cd` also moves the process's working directory.
    pub sync_process_dir: bool,
}

impl ShellState {
    /// State for a session running in this process's working directory.
    ///
    /// Never fails: a directory that can no longer be queried (for example
    /// one deleted from under us) is left for `pwd` to report.
    pub fn new() -> Self {
        ShellState {
            sync_process_dir: true,
            ..Self::with_dir(startup_dir(env::current_dir()))
        }
    }

    /// State rooted at `current_dir`, detached from the process's own
    /// working directory.
    pub fn with_dir(current_dir: PathBuf) -> Self {
        ShellState {
            status: ExitStatus::Success,
            current_dir,
            sync_process_dir: false,
        }
    }
}

impl Default for ShellState {
    fn default() -> Self {
        Self::new()
    }
}

fn startup_dir(lookup: io::Result<PathBuf>) -> PathBuf {
    lookup.unwrap_or_else(|e| {
        warn!("cannot determine working directory: {}", e);
        PathBuf::new()
    })
}
