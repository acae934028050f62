use std::io::{self, Stderr, Stdout, Write};
use std::path::Path;

use tracing::{debug, warn};

mod executor;

use crate::{
    config::ShellConfig,
    core::{
        commands::{CommandExecutor, Flow},
        state::ShellState,
        status::ExitStatus,
    },
    error::ShellError,
    highlight::Highlighter,
    input::LineSource,
};

use executor::CommandHandler;

/// One interpreter session: reads lines from its source until `exit` or end
/// of input, running each and remembering the last status.
pub struct Shell<S, O = Stdout, E = Stderr> {
    pub(crate) source: S,
    pub(crate) config: ShellConfig,
    pub(crate) state: ShellState,
    pub(crate) executor: CommandExecutor,
    pub(crate) highlighter: Highlighter,
    pub(crate) out: O,
    pub(crate) err: E,
}

impl<S: LineSource> Shell<S> {
    /// A session on the real standard streams, starting in the process's
    /// current directory.
    pub fn new(source: S, config: ShellConfig) -> Self {
        let highlighter = Highlighter::new(config.interactive);
        Self::with_streams(source, config, ShellState::new(), io::stdout(), io::stderr())
            .with_highlighter(highlighter)
    }
}

impl<S: LineSource, O: Write, E: Write> Shell<S, O, E> {
    pub fn with_streams(source: S, config: ShellConfig, state: ShellState, out: O, err: E) -> Self {
        Shell {
            source,
            config,
            state,
            executor: CommandExecutor::default(),
            highlighter: Highlighter::plain(),
            out,
            err,
        }
    }

    pub fn with_highlighter(mut self, highlighter: Highlighter) -> Self {
        self.highlighter = highlighter;
        self.executor = CommandExecutor::new(highlighter);
        self
    }

    pub fn run(&mut self) -> Result<(), ShellError> {
        if self.config.show_banners() {
            let welcome = self.highlighter.highlight_banner(&self.config.welcome);
            writeln!(self.out, "{}", welcome)?;
        }

        loop {
            if self.config.interactive && !self.source.renders_prompt() {
                write!(self.out, "{}", self.config.prompt)?;
                self.out.flush()?;
            }

            let line = match self.source.next_line() {
                Ok(Some(line)) => line,
                Ok(None) => {
                    debug!("end of input");
                    break;
                }
                Err(e) => {
                    warn!("read error, ending session: {}", e);
                    break;
                }
            };

            if let Flow::Exit = self.execute_line(&line) {
                debug!("exit requested");
                break;
            }
        }

        self.shutdown()
    }

    fn shutdown(&mut self) -> Result<(), ShellError> {
        let result = if self.config.show_banners() {
            let goodbye = self.highlighter.highlight_banner(&self.config.goodbye);
            writeln!(self.out, "{}", goodbye)
        } else {
            Ok(())
        };
        self.source.close();
        result?;
        self.out.flush()?;
        Ok(())
    }

    pub fn status(&self) -> ExitStatus {
        self.state.status
    }

    pub fn current_dir(&self) -> &Path {
        &self.state.current_dir
    }

    pub fn output(&self) -> &O {
        &self.out
    }

    pub fn errors(&self) -> &E {
        &self.err
    }
}
