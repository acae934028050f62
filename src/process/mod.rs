use std::io;

use thiserror::Error;

pub mod executor;
pub mod resolve;

pub use executor::ProcessExecutor;
pub use resolve::find_executable;

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("{0}: command not found")]
    NotFound(String),
    #[error("{command}: {}", launch_reason(.source))]
    Launch {
        command: String,
        #[source]
        source: io::Error,
    },
    #[error("{command}: wait failed: {source}")]
    Wait {
        command: String,
        #[source]
        source: io::Error,
    },
}

fn launch_reason(err: &io::Error) -> String {
    match err.raw_os_error() {
        Some(libc::ENOEXEC) => "exec format error".to_string(),
        Some(libc::EACCES) => "permission denied".to_string(),
        _ => err.to_string(),
    }
}
