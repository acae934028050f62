mod editor;
pub mod reader;

pub use editor::EditorSource;
pub use reader::{LineBuilder, LineReader};

use std::fs::File;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::config::ShellConfig;
use crate::error::ShellError;

/// Something that hands the session one command line at a time.
pub trait LineSource {
    /// Next logical line with newline and comment removed, `None` at end of input.
    fn next_line(&mut self) -> io::Result<Option<String>>;

    /// Sources that draw their own prompt get it at construction instead.
    fn renders_prompt(&self) -> bool {
        false
    }

    fn close(&mut self) {}
}

impl<S: LineSource + ?Sized> LineSource for Box<S> {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        (**self).next_line()
    }

    fn renders_prompt(&self) -> bool {
        (**self).renders_prompt()
    }

    fn close(&mut self) {
        (**self).close()
    }
}

/// Where the session's commands come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Terminal,
    Stdin,
    Script(PathBuf),
}

impl InputSource {
    pub fn detect(script: Option<&str>) -> Self {
        match script {
            Some(path) => InputSource::Script(PathBuf::from(path)),
            None if stdin_is_terminal() => InputSource::Terminal,
            None => InputSource::Stdin,
        }
    }

    pub fn is_interactive(&self) -> bool {
        matches!(self, InputSource::Terminal)
    }

    pub fn open(&self, config: &ShellConfig) -> Result<Box<dyn LineSource>, ShellError> {
        match self {
            InputSource::Terminal => match EditorSource::new(config) {
                Ok(editor) => Ok(Box::new(editor)),
                Err(e) => {
                    warn!("line editing unavailable, reading raw stdin: {}", e);
                    Ok(Box::new(LineReader::with_max_line_len(
                        io::stdin(),
                        config.max_line_len,
                    )))
                }
            },
            InputSource::Stdin => Ok(Box::new(LineReader::with_max_line_len(
                io::stdin(),
                config.max_line_len,
            ))),
            InputSource::Script(path) => {
                let file = File::open(path).map_err(|source| ShellError::Input {
                    path: path.clone(),
                    source,
                })?;
                debug!("reading commands from {}", path.display());
                Ok(Box::new(LineReader::with_max_line_len(
                    file,
                    config.max_line_len,
                )))
            }
        }
    }
}

pub fn stdin_is_terminal() -> bool {
    io::stdin().is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_script_is_never_interactive() {
        let source = InputSource::detect(Some("run.sh"));
        assert_eq!(source, InputSource::Script(PathBuf::from("run.sh")));
        assert!(!source.is_interactive());
    }

    #[test]
    fn test_open_missing_script() {
        let source = InputSource::Script(PathBuf::from("/definitely/not/here.sh"));
        let result = source.open(&ShellConfig::default());
        assert!(matches!(result, Err(ShellError::Input { .. })));
    }

    #[test]
    fn test_open_script_reads_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("script.sh");
        fs::write(&path, "pwd\nexit\n").unwrap();

        let mut source = InputSource::Script(path).open(&ShellConfig::default()).unwrap();
        assert!(!source.renders_prompt());
        assert_eq!(source.next_line().unwrap().as_deref(), Some("pwd"));
        assert_eq!(source.next_line().unwrap().as_deref(), Some("exit"));
        assert_eq!(source.next_line().unwrap(), None);
        source.close();
    }
}
