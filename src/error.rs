use std::path::PathBuf;

use thiserror::Error;

/// Errors that stop the shell before (or instead of) running a session.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("{0}")]
    Usage(String),
    #[error("flag error: {0}")]
    Flag(String),
    #[error("{}: {source}", .path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
}

impl ShellError {
    /// Process exit code reported for this error.
    pub fn exit_code(&self) -> u8 {
        1
    }
}
