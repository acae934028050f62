use std::io::Write;

use tracing::debug;

use crate::core::{chain::resolve, commands::Flow, tokenizer::tokenize};
use crate::input::LineSource;

pub(crate) trait CommandHandler {
    fn execute_line(&mut self, line: &str) -> Flow;
}

impl<S: LineSource, O: Write, E: Write> CommandHandler for super::Shell<S, O, E> {
    /// Runs one command line, updating the last status unless the line was
    /// skipped.
    fn execute_line(&mut self, line: &str) -> Flow {
        let tokens = tokenize(line);
        if tokens.is_empty() {
            return Flow::Continue(self.state.status);
        }

        let resolution = resolve(&tokens, self.state.status);
        if !resolution.should_run {
            debug!("skipping {:?} line after {}", resolution.kind, self.state.status);
            return Flow::Continue(self.state.status);
        }

        let flow = self.executor.dispatch(
            resolution.command,
            &mut self.state,
            &mut self.out,
            &mut self.err,
        );
        if let Flow::Continue(status) = flow {
            self.state.status = status;
        }
        flow
    }
}
