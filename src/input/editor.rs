use std::io;
use std::path::PathBuf;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::{debug, warn};

use super::reader::LineBuilder;
use super::LineSource;
use crate::config::ShellConfig;
use crate::error::ShellError;

/// Line source for a terminal, with line editing and history.
pub struct EditorSource {
    editor: DefaultEditor,
    prompt: String,
    max_line_len: usize,
    history_file: Option<PathBuf>,
}

impl EditorSource {
    pub fn new(config: &ShellConfig) -> Result<Self, ShellError> {
        let mut editor = DefaultEditor::new()?;

        if let Some(path) = &config.history_file {
            if let Err(e) = editor.load_history(path) {
                debug!("no history loaded from {}: {}", path.display(), e);
            }
        }

        Ok(EditorSource {
            editor,
            prompt: config.prompt.clone(),
            max_line_len: config.max_line_len,
            history_file: config.history_file.clone(),
        })
    }
}

impl LineSource for EditorSource {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        loop {
            match self.editor.readline(&self.prompt) {
                Ok(raw) => {
                    if !raw.trim().is_empty() {
                        if let Err(e) = self.editor.add_history_entry(raw.as_str()) {
                            warn!("couldn't add to history: {}", e);
                        }
                    }
                    return Ok(Some(LineBuilder::build(self.max_line_len, &raw)));
                }
                // Ctrl-C abandons the current edit only.
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => return Ok(None),
                Err(ReadlineError::Io(e)) => return Err(e),
                Err(e) => return Err(io::Error::other(e)),
            }
        }
    }

    fn renders_prompt(&self) -> bool {
        true
    }

    fn close(&mut self) {
        if let Some(path) = &self.history_file {
            if let Err(e) = self.editor.save_history(path) {
                warn!("couldn't save history to {}: {}", path.display(), e);
            }
        }
    }
}
