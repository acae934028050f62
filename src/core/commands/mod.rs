use std::collections::BTreeMap;
use std::io::{self, Write};

use thiserror::Error;
use tracing::debug;

mod cd;
mod exit;
mod pwd;

pub use cd::CdCommand;
pub use exit::ExitCommand;
pub use pwd::PwdCommand;

use crate::core::state::ShellState;
use crate::core::status::ExitStatus;
use crate::highlight::Highlighter;
use crate::process::{ProcessError, ProcessExecutor};

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Process(#[from] ProcessError),
}

impl CommandError {
    pub(crate) fn io(context: impl Into<String>) -> impl FnOnce(io::Error) -> Self {
        let context = context.into();
        move |source| CommandError::Io { context, source }
    }
}

/// What the session does after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue(ExitStatus),
    Exit,
}

pub trait Command {
    fn execute(
        &self,
        args: &[String],
        state: &mut ShellState,
        out: &mut dyn Write,
    ) -> Result<Flow, CommandError>;
}

#[derive(Clone)]
enum CommandType {
    Cd(CdCommand),
    Pwd(PwdCommand),
    Exit(ExitCommand),
}

impl Command for CommandType {
    fn execute(
        &self,
        args: &[String],
        state: &mut ShellState,
        out: &mut dyn Write,
    ) -> Result<Flow, CommandError> {
        match self {
            CommandType::Cd(cmd) => cmd.execute(args, state, out),
            CommandType::Pwd(cmd) => cmd.execute(args, state, out),
            CommandType::Exit(cmd) => cmd.execute(args, state, out),
        }
    }
}

/// Routes a command to a builtin or to an external program.
#[derive(Clone)]
pub struct CommandExecutor {
    commands: BTreeMap<&'static str, CommandType>,
    process_executor: ProcessExecutor,
    highlighter: Highlighter,
}

impl Default for CommandExecutor {
    fn default() -> Self {
        Self::new(Highlighter::plain())
    }
}

impl CommandExecutor {
    pub fn new(highlighter: Highlighter) -> Self {
        let mut commands = BTreeMap::new();
        commands.insert("cd", CommandType::Cd(CdCommand::new()));
        commands.insert("pwd", CommandType::Pwd(PwdCommand::new()));
        commands.insert("exit", CommandType::Exit(ExitCommand::new()));

        CommandExecutor {
            commands,
            process_executor: ProcessExecutor::new(),
            highlighter,
        }
    }

    /// Runs `command` (name first) and reports any failure on `err`.
    pub fn dispatch(
        &self,
        command: &[String],
        state: &mut ShellState,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> Flow {
        let Some((name, args)) = command.split_first() else {
            return Flow::Continue(ExitStatus::Success);
        };

        match self.execute(name, args, command, state, out) {
            Ok(flow) => flow,
            Err(e) => {
                debug!("{} failed: {:?}", name, e);
                let message = self.highlighter.highlight_error(&format!("mysh: {}", e));
                // Nowhere left to report a broken stderr.
                let _ = writeln!(err, "{}", message);
                Flow::Continue(ExitStatus::Failure)
            }
        }
    }

    fn execute(
        &self,
        name: &str,
        args: &[String],
        command: &[String],
        state: &mut ShellState,
        out: &mut dyn Write,
    ) -> Result<Flow, CommandError> {
        if let Some(cmd) = self.commands.get(name) {
            debug!("builtin {}", name);
            return cmd.execute(args, state, out);
        }

        // The child shares our stdout; anything we buffered goes first.
        out.flush().map_err(CommandError::io("flush"))?;
        let status = self.process_executor.run(command, &state.current_dir)?;
        Ok(Flow::Continue(status))
    }

    pub fn is_builtin(&self, command: &str) -> bool {
        self.commands.contains_key(command)
    }
}
