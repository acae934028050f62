use std::fs;
use std::io::{self, Write};

use super::{Command, CommandError, Flow};
use crate::core::state::ShellState;
use crate::core::status::ExitStatus;

#[derive(Clone)]
pub struct PwdCommand;

impl Default for PwdCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl PwdCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for PwdCommand {
    fn execute(
        &self,
        _args: &[String],
        state: &mut ShellState,
        out: &mut dyn Write,
    ) -> Result<Flow, CommandError> {
        let dir = &state.current_dir;
        if dir.as_os_str().is_empty() {
            return Err(CommandError::Io {
                context: "pwd".to_string(),
                source: io::Error::from_raw_os_error(libc::ENOENT),
            });
        }
        // A removed working directory can no longer be queried.
        fs::metadata(dir).map_err(CommandError::io(format!("pwd: {}", dir.display())))?;

        writeln!(out, "{}", dir.display()).map_err(CommandError::io("pwd"))?;
        Ok(Flow::Continue(ExitStatus::Success))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_pwd_prints_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = ShellState::with_dir(dir.path().to_path_buf());
        let mut out = Vec::new();

        let flow = PwdCommand::new().execute(&[], &mut state, &mut out).unwrap();

        assert_eq!(flow, Flow::Continue(ExitStatus::Success));
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("{}\n", dir.path().display())
        );
    }

    #[test]
    fn test_pwd_deleted_directory() {
        let dir = tempfile::tempdir().unwrap();
        let gone: PathBuf = dir.path().join("gone");
        let mut state = ShellState::with_dir(gone);
        let mut out = Vec::new();

        let result = PwdCommand::new().execute(&[], &mut state, &mut out);

        assert!(matches!(result, Err(CommandError::Io { .. })));
        assert!(result.unwrap_err().to_string().starts_with("pwd: "));
        assert!(out.is_empty());
    }

    #[test]
    fn test_pwd_unknown_directory() {
        let mut state = ShellState::with_dir(PathBuf::new());
        let mut out = Vec::new();

        let err = PwdCommand::new()
            .execute(&[], &mut state, &mut out)
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            format!("pwd: {}", io::Error::from_raw_os_error(libc::ENOENT))
        );
        assert!(out.is_empty());
    }
}
