use crate::error::ShellError;
use std::collections::BTreeMap;

pub const USAGE: &str = "Usage: mysh [OPTIONS] [script_file]";

#[derive(Debug, Clone)]
pub struct Flags {
    flags: BTreeMap<String, Flag>,
    script: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Flag {
    pub short: String,
    pub long: String,
    pub description: String,
    pub value: Option<String>,
}

impl Flag {
    fn switch(short: &str, long: &str, description: &str) -> Self {
        Flag {
            short: short.to_string(),
            long: long.to_string(),
            description: description.to_string(),
            value: None,
        }
    }
}

impl Default for Flags {
    fn default() -> Self {
        Self::new()
    }
}

impl Flags {
    pub fn new() -> Self {
        let mut flags = BTreeMap::new();

        flags.insert(
            "help".to_string(),
            Flag::switch("-h", "--help", "Print this help message"),
        );
        flags.insert(
            "version".to_string(),
            Flag::switch("-v", "--version", "Show version information"),
        );
        flags.insert(
            "quiet".to_string(),
            Flag::switch("-q", "--quiet", "Do not print the welcome and goodbye banners"),
        );
        flags.insert(
            "debug".to_string(),
            Flag::switch("-d", "--debug", "Enable debug logging on stderr"),
        );

        Flags {
            flags,
            script: None,
        }
    }

    /// Parses the process arguments (program name already stripped).
    ///
    /// Anything that is not a known flag is a positional argument; at most
    /// one, the script path, is accepted.
    pub fn parse(&mut self, args: &[String]) -> Result<(), ShellError> {
        let mut positional = Vec::new();

        for arg in args {
            if arg.len() > 1 && arg.starts_with('-') {
                let flag = self
                    .flags
                    .values_mut()
                    .find(|flag| arg == &flag.short || arg == &flag.long)
                    .ok_or_else(|| ShellError::Flag(format!("unknown option {}", arg)))?;
                flag.value = Some("true".to_string());
            } else {
                positional.push(arg.clone());
            }
        }

        if positional.len() > 1 {
            return Err(ShellError::Usage(USAGE.to_string()));
        }
        self.script = positional.pop();
        Ok(())
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.flags
            .get(name)
            .and_then(|f| f.value.as_ref())
            .is_some()
    }

    pub fn script(&self) -> Option<&str> {
        self.script.as_deref()
    }

    pub fn print_help(&self) {
        println!("{}", USAGE);
        println!("\nReads commands from script_file, or from standard input when omitted.");
        println!("\nOptions:");
        for flag in self.flags.values() {
            println!("  {}, {:<15} {}", flag.short, flag.long, flag.description);
        }
    }
}
