use crate::flags::Flags;
use std::path::PathBuf;

pub const PROMPT: &str = "mysh> ";
pub const WELCOME: &str = "Welcome to my shell!";
pub const GOODBYE: &str = "Exiting my shell.";

/// Longest command line kept, in bytes, including room for the terminator
/// the line would need in a fixed buffer.
pub const MAX_LINE_LEN: usize = 1024;

const HISTORY_FILE: &str = ".mysh_history";

#[derive(Debug, Clone)]
pub struct ShellConfig {
    pub interactive: bool,
    pub quiet: bool,
    pub prompt: String,
    pub welcome: String,
    pub goodbye: String,
    pub max_line_len: usize,
    pub history_file: Option<PathBuf>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        ShellConfig {
            interactive: false,
            quiet: false,
            prompt: PROMPT.to_string(),
            welcome: WELCOME.to_string(),
            goodbye: GOODBYE.to_string(),
            max_line_len: MAX_LINE_LEN,
            history_file: None,
        }
    }
}

impl ShellConfig {
    pub fn from_flags(flags: &Flags, interactive: bool) -> Self {
        let history_file = if interactive {
            dirs::home_dir().map(|home| home.join(HISTORY_FILE))
        } else {
            None
        };

        ShellConfig {
            interactive,
            quiet: flags.is_set("quiet"),
            history_file,
            ..Self::default()
        }
    }

    /// Banners are only shown to a person at a terminal.
    pub fn show_banners(&self) -> bool {
        self.interactive && !self.quiet
    }
}
