//! Error kinds and their contract class

use std::fmt;

/// The kind of error that occurred.
///
/// Every kind belongs to one of two contract classes:
///
/// - **unchecked** kinds are exempt from a function's declared error type.
///   They describe programming mistakes or wrappers whose only job is to carry
///   another error across a signature that cannot name it.
/// - **checked** kinds are the ones a caller is expected to see in a
///   `Result` and handle.
///
/// Exactly one kind, [`ErrorKind::Cancelled`], is the cooperative
/// cancellation signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    // =========================================================================
    // Unchecked errors
    // =========================================================================
    /// An unexpected error occurred - catch-all wrapper for unhandled cases
    Unexpected,

    /// Invalid argument passed to function
    InvalidArgument,

    /// Operation called while the receiver is in the wrong state
    InvalidState,

    /// The requested feature or operation is not supported
    Unsupported,

    /// Feature or operation not yet implemented
    NotImplemented,

    // =========================================================================
    // Checked errors
    // =========================================================================
    /// Generic declared failure
    Failed,

    /// The requested item was not found
    NotFound,

    /// Permission denied
    PermissionDenied,

    /// IO operation failed
    IoFailed,

    /// Failed to parse input
    ParseFailed,

    // =========================================================================
    // Cancellation
    // =========================================================================
    /// The unit of work was asked to stop
    Cancelled,
}

impl ErrorKind {
    /// Returns the error kind as a static string
    pub fn as_str(&self) -> &'static str {
        match self {
            // Unchecked
            ErrorKind::Unexpected => "Unexpected",
            ErrorKind::InvalidArgument => "InvalidArgument",
            ErrorKind::InvalidState => "InvalidState",
            ErrorKind::Unsupported => "Unsupported",
            ErrorKind::NotImplemented => "NotImplemented",

            // Checked
            ErrorKind::Failed => "Failed",
            ErrorKind::NotFound => "NotFound",
            ErrorKind::PermissionDenied => "PermissionDenied",
            ErrorKind::IoFailed => "IoFailed",
            ErrorKind::ParseFailed => "ParseFailed",

            // Cancellation
            ErrorKind::Cancelled => "Cancelled",
        }
    }

    /// Check if this kind is exempt from declared error contracts
    pub fn is_unchecked(&self) -> bool {
        matches!(
            self,
            ErrorKind::Unexpected
                | ErrorKind::InvalidArgument
                | ErrorKind::InvalidState
                | ErrorKind::Unsupported
                | ErrorKind::NotImplemented
        )
    }

    /// Check if this kind is the cancellation signal
    pub fn is_cancellation(&self) -> bool {
        *self == ErrorKind::Cancelled
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
