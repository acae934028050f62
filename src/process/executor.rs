use std::env;
use std::os::unix::process::{CommandExt, ExitStatusExt};
use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;

use super::{find_executable, ProcessError};
use crate::core::status::ExitStatus;

#[derive(Clone, Default)]
pub struct ProcessExecutor;

impl ProcessExecutor {
    pub fn new() -> Self {
        ProcessExecutor
    }

    /// Runs `argv` as a child process in `cwd` and waits for it.
    ///
    /// The child inherits the shell's standard streams. A nonzero exit code
    /// or death by signal is a `Failure` status, not an error.
    pub fn run(&self, argv: &[String], cwd: &Path) -> Result<ExitStatus, ProcessError> {
        let Some((name, args)) = argv.split_first() else {
            return Ok(ExitStatus::Success);
        };

        let path_var = env::var_os("PATH");
        let program = find_executable(name, cwd, path_var.as_deref())
            .ok_or_else(|| ProcessError::NotFound(name.clone()))?;
        debug!("launching {} as {}", program.display(), name);

        let mut command = Command::new(&program);
        command
            .arg0(name)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        // An unknown directory is inherited as is; it may no longer exist.
        if !cwd.as_os_str().is_empty() {
            command.current_dir(cwd);
        }

        let mut child = command
            .spawn()
            .map_err(|source| ProcessError::Launch {
                command: name.clone(),
                source,
            })?;

        let status = child.wait().map_err(|source| ProcessError::Wait {
            command: name.clone(),
            source,
        })?;

        if let Some(signal) = status.signal() {
            debug!("{} terminated by signal {}", name, signal);
        } else if !status.success() {
            debug!("{} exited with {}", name, status);
        }

        Ok(status.into())
    }
}
