use std::fmt;

/// Outcome of the last command that actually ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExitStatus {
    #[default]
    Success,
    Failure,
}

impl ExitStatus {
    pub fn from_success(success: bool) -> Self {
        if success {
            ExitStatus::Success
        } else {
            ExitStatus::Failure
        }
    }

    pub fn is_success(self) -> bool {
        self == ExitStatus::Success
    }
}

impl From<std::process::ExitStatus> for ExitStatus {
    fn from(status: std::process::ExitStatus) -> Self {
        Self::from_success(status.success())
    }
}

impl fmt::Display for ExitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitStatus::Success => write!(f, "success"),
            ExitStatus::Failure => write!(f, "failure"),
        }
    }
}
