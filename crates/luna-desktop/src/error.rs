//! Error types for the desktop shell
//!
//! The window manager reports operations on unknown windows as
//! [`DesktopError::WindowNotFound`] without touching its state. The
//! [`DesktopEngine`](crate::DesktopEngine) surface logs these and carries on,
//! because stale ids from UI event races are routine.

/// Errors that can occur in desktop shell operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DesktopError {
    /// Window with the given ID was not found
    WindowNotFound(String),

    /// An operation was attempted that is not valid in the current state
    InvalidOperation {
        /// The operation that was attempted
        op: &'static str,
        /// Why the operation failed
        reason: &'static str,
    },

    /// JSON serialization or deserialization failed
    SerializationError(String),

    /// Persistence operation failed
    PersistenceError(String),
}

impl std::fmt::Display for DesktopError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WindowNotFound(id) => write!(f, "window not found: {}", id),
            Self::InvalidOperation { op, reason } => {
                write!(f, "invalid operation '{}': {}", op, reason)
            }
            Self::SerializationError(msg) => write!(f, "serialization error: {}", msg),
            Self::PersistenceError(msg) => write!(f, "persistence error: {}", msg),
        }
    }
}

impl std::error::Error for DesktopError {}

impl From<serde_json::Error> for DesktopError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// Result type alias for desktop operations
pub type DesktopResult<T> = Result<T, DesktopError>;
