use super::status::ExitStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainKind {
    None,
    And,
    Or,
}

impl ChainKind {
    fn from_keyword(word: &str) -> Self {
        match word {
            "and" => ChainKind::And,
            "or" => ChainKind::Or,
            _ => ChainKind::None,
        }
    }
}

/// A token list with its chaining keyword removed.
#[derive(Debug, PartialEq, Eq)]
pub struct Resolution<'a> {
    pub kind: ChainKind,
    pub command: &'a [String],
    pub should_run: bool,
}

/// Decides whether a line runs given the status of the last executed command.
///
/// `and` runs only after success, `or` only after failure. A keyword with
/// nothing after it never runs.
pub fn resolve(tokens: &[String], last: ExitStatus) -> Resolution<'_> {
    let kind = tokens
        .first()
        .map_or(ChainKind::None, |word| ChainKind::from_keyword(word));

    let command = match kind {
        ChainKind::None => tokens,
        ChainKind::And | ChainKind::Or => &tokens[1..],
    };

    let should_run = !command.is_empty()
        && match kind {
            ChainKind::None => true,
            ChainKind::And => last.is_success(),
            ChainKind::Or => !last.is_success(),
        };

    Resolution {
        kind,
        command,
        should_run,
    }
}
