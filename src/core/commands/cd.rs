use std::env;
use std::fs;
use std::io::{self, Write};

use tracing::debug;

use super::{Command, CommandError, Flow};
use crate::core::state::ShellState;
use crate::core::status::ExitStatus;

#[derive(Clone)]
pub struct CdCommand;

impl Default for CdCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl CdCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for CdCommand {
    fn execute(
        &self,
        args: &[String],
        state: &mut ShellState,
        _out: &mut dyn Write,
    ) -> Result<Flow, CommandError> {
        let [target] = args else {
            return Err(CommandError::InvalidArguments(
                "cd: wrong number of arguments".to_string(),
            ));
        };

        // Relative targets are taken from the shell's own directory, not the
        // process's, so both stay in step.
        let requested = state.current_dir.join(target);
        let resolved = fs::canonicalize(&requested)
            .map_err(CommandError::io(format!("cd: {}", target)))?;

        if state.sync_process_dir {
            env::set_current_dir(&resolved)
                .map_err(CommandError::io(format!("cd: {}", target)))?;
        } else if !resolved.is_dir() {
            return Err(CommandError::Io {
                context: format!("cd: {}", target),
                source: io::Error::from_raw_os_error(libc::ENOTDIR),
            });
        }
        debug!("cd {}", resolved.display());
        state.current_dir = resolved;

        Ok(Flow::Continue(ExitStatus::Success))
    }
}
