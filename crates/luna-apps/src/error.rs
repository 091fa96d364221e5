//! Error types for content views
//!
//! Terminal command failures are reported to the user as output lines, so
//! the `Display` text is the exact message the shell prints.

/// Errors raised by terminal commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// `ls` target does not exist
    CannotAccess {
        command: &'static str,
    },

    /// Path does not exist
    NoSuchFileOrDirectory {
        command: &'static str,
        path: String,
    },

    /// File to read does not exist
    NoSuchFile {
        command: &'static str,
        path: String,
    },

    /// Expected a directory, found a file
    NotADirectory {
        command: &'static str,
        path: String,
    },

    /// Expected a file, found a directory
    IsADirectory {
        command: &'static str,
        path: String,
    },

    /// Required argument missing
    MissingOperand {
        command: &'static str,
    },

    /// Unknown command name
    CommandNotFound(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CannotAccess { command } => {
                write!(f, "{}: cannot access: No such file or directory", command)
            }
            Self::NoSuchFileOrDirectory { command, path } => {
                write!(f, "{}: {}: No such file or directory", command, path)
            }
            Self::NoSuchFile { command, path } => write!(f, "{}: {}: No such file", command, path),
            Self::NotADirectory { command, path } => {
                write!(f, "{}: {}: Not a directory", command, path)
            }
            Self::IsADirectory { command, path } => {
                write!(f, "{}: {}: Is a directory", command, path)
            }
            Self::MissingOperand { command } => write!(f, "{}: missing file operand", command),
            Self::CommandNotFound(name) => {
                write!(f, "{}: command not found (type 'help')", name)
            }
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for content view operations
pub type AppResult<T> = Result<T, AppError>;
