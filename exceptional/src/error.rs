//! The main Error type for exceptional

use crate::ErrorKind;
use std::fmt;

/// The error value carried through this crate.
///
/// This error type provides:
/// - `kind`: What type of error occurred, and whether it is checked
/// - `message`: Human-readable description
/// - `localized`: Display text for end users, may differ from `message`
/// - `operation`: What operation caused the error
/// - `context`: Key-value pairs for debugging
/// - `source`: The underlying error (if any)
///
/// # Example
///
/// ```rust
/// use exceptional::{Error, ErrorKind};
///
/// let err = Error::new(ErrorKind::ParseFailed, "unexpected token at 12")
///     .with_localized("The file could not be read")
///     .with_operation("config::load")
///     .with_context("path", "app.toml");
///
/// assert_eq!(err.kind(), ErrorKind::ParseFailed);
/// assert_eq!(err.localized(), Some("The file could not be read"));
/// assert!(!err.kind().is_unchecked());
/// ```
pub struct Error {
    kind: ErrorKind,
    message: String,
    localized: Option<String>,
    operation: &'static str,
    context: Vec<(&'static str, String)>,
    source: Option<anyhow::Error>,
}

impl Error {
    /// Create a new error with the given kind and message
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            localized: None,
            operation: "",
            context: Vec::new(),
            source: None,
        }
    }

    // =========================================================================
    // Getters
    // =========================================================================

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the localized display message, if one was set
    pub fn localized(&self) -> Option<&str> {
        self.localized.as_deref()
    }

    /// Get the operation that caused this error
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    /// Get the context key-value pairs
    pub fn context(&self) -> &[(&'static str, String)] {
        &self.context
    }

    /// Check if this error is the cancellation signal
    pub fn is_cancellation(&self) -> bool {
        self.kind.is_cancellation()
    }

    // =========================================================================
    // Builders (chainable)
    // =========================================================================

    /// Set the localized display message
    pub fn with_localized(mut self, localized: impl Into<String>) -> Self {
        self.localized = Some(localized.into());
        self
    }

    /// Set the operation that caused this error.
    ///
    /// If an operation was already set, the previous one is moved to context
    /// as "called" to preserve the call chain.
    pub fn with_operation(mut self, operation: &'static str) -> Self {
        if !self.operation.is_empty() {
            self.context.push(("called", self.operation.to_string()));
        }
        self.operation = operation;
        self
    }

    /// Add context to the error
    pub fn with_context(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.context.push((key, value.into()));
        self
    }

    /// Set the source error.
    ///
    /// # Panics (debug only)
    /// Panics in debug mode if source was already set.
    pub fn set_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        debug_assert!(self.source.is_none(), "source error already set");
        self.source = Some(source.into());
        self
    }
}

// =============================================================================
// Display - compact, single-line format for logs
// =============================================================================

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        if !self.operation.is_empty() {
            write!(f, " at {}", self.operation)?;
        }

        if !self.context.is_empty() {
            write!(f, ", context {{ ")?;
            for (i, (key, value)) in self.context.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}: {}", key, value)?;
            }
            write!(f, " }}")?;
        }

        let text = self
            .localized
            .as_deref()
            .filter(|text| !text.trim().is_empty())
            .unwrap_or(&self.message);
        if !text.is_empty() {
            write!(f, " => {}", text)?;
        }

        Ok(())
    }
}

// =============================================================================
// Debug - verbose, multi-line format for debugging
// =============================================================================

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if !self.operation.is_empty() {
            write!(f, " at {}", self.operation)?;
        }
        writeln!(f)?;

        if !self.message.is_empty() {
            writeln!(f)?;
            writeln!(f, "    Message: {}", self.message)?;
        }

        if let Some(localized) = &self.localized {
            writeln!(f, "    Localized: {}", localized)?;
        }

        if !self.context.is_empty() {
            writeln!(f)?;
            writeln!(f, "    Context:")?;
            for (key, value) in &self.context {
                writeln!(f, "        {}: {}", key, value)?;
            }
        }

        if let Some(source) = &self.source {
            writeln!(f)?;
            writeln!(f, "    Source: {:?}", source)?;
        }

        Ok(())
    }
}

// =============================================================================
// std::error::Error implementation
// =============================================================================

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => ErrorKind::NotFound,
            std::io::ErrorKind::PermissionDenied => ErrorKind::PermissionDenied,
            _ => ErrorKind::IoFailed,
        };
        Error::new(kind, err.to_string())
            .with_operation("io")
            .set_source(err)
    }
}

// =============================================================================
// Convenience constructors
// =============================================================================

impl Error {
    /// Wrap another error in an unchecked `Unexpected` error.
    ///
    /// The message is the wrapped error's display text, so the wrapper reads
    /// like what it carries.
    pub fn wrap(source: impl Into<anyhow::Error>) -> Self {
        let source = source.into();
        Self::new(ErrorKind::Unexpected, source.to_string()).set_source(source)
    }

    /// Create an Unexpected error
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }

    /// Create an InvalidArgument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument, message)
    }

    /// Create an InvalidState error
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidState, message)
    }

    /// Create an Unsupported error
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unsupported, message)
    }

    /// Create a NotImplemented error
    pub fn not_implemented(feature: impl Into<String>) -> Self {
        let feature = feature.into();
        Self::new(ErrorKind::NotImplemented, format!("'{}' not yet implemented", feature))
            .with_context("feature", feature)
    }

    /// Create a Failed error
    pub fn failed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Failed, message)
    }

    /// Create a NotFound error
    pub fn not_found(name: impl Into<String>) -> Self {
        let name = name.into();
        Self::new(ErrorKind::NotFound, format!("'{}' not found", name))
            .with_context("name", name)
    }

    /// Create a ParseFailed error
    pub fn parse_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ParseFailed, message)
    }

    /// Create the cancellation signal
    pub fn cancelled() -> Self {
        Self::new(ErrorKind::Cancelled, "cancelled")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_creation() {
        let err = Error::new(ErrorKind::NotFound, "key 'user' not found");
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.message(), "key 'user' not found");
        assert_eq!(err.localized(), None);
        assert!(err.source().is_none());
    }

    #[test]
    fn test_error_with_context() {
        let err = Error::new(ErrorKind::ParseFailed, "bad header")
            .with_operation("codec::decode")
            .with_context("offset", "12")
            .with_context("len", "40");

        assert_eq!(err.operation(), "codec::decode");
        assert_eq!(err.context().len(), 2);
        assert_eq!(err.context()[0], ("offset", "12".to_string()));
    }

    #[test]
    fn test_operation_chaining() {
        let err = Error::new(ErrorKind::IoFailed, "write failed")
            .with_operation("storage::save")
            .with_operation("job::checkpoint");

        assert_eq!(err.operation(), "job::checkpoint");
        assert_eq!(err.context().len(), 1);
        assert_eq!(err.context()[0], ("called", "storage::save".to_string()));
    }

    #[test]
    fn test_display() {
        let err = Error::new(ErrorKind::ParseFailed, "port out of range")
            .with_operation("config::load")
            .with_context("port", "70000");

        let display = format!("{}", err);
        assert_eq!(
            display,
            "ParseFailed at config::load, context { port: 70000 } => port out of range"
        );
    }

    #[test]
    fn test_display_prefers_localized() {
        let err = Error::failed("internal text").with_localized("Something went wrong");
        assert_eq!(err.to_string(), "Failed => Something went wrong");
    }

    #[test]
    fn test_display_skips_blank_localized() {
        let err = Error::failed("disk full").with_localized("");
        assert_eq!(err.to_string(), "Failed => disk full");

        let err = Error::failed("disk full").with_localized("  ");
        assert_eq!(err.to_string(), "Failed => disk full");
    }

    #[test]
    fn test_display_without_message() {
        let err = Error::new(ErrorKind::InvalidState, "");
        assert_eq!(err.to_string(), "InvalidState");
    }

    #[test]
    fn test_debug() {
        let err = Error::invalid_argument("negative size")
            .with_localized("Size must be positive")
            .set_source(Error::parse_failed("-1"));

        let debug = format!("{:?}", err);
        assert!(debug.contains("InvalidArgument"));
        assert!(debug.contains("Message: negative size"));
        assert!(debug.contains("Localized: Size must be positive"));
        assert!(debug.contains("Source:"));
    }

    #[test]
    fn test_convenience_constructors() {
        let err = Error::not_found("user");
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(err.message().contains("user"));

        let err = Error::not_implemented("streaming");
        assert_eq!(err.kind(), ErrorKind::NotImplemented);
        assert_eq!(err.context()[0], ("feature", "streaming".to_string()));

        let err = Error::cancelled();
        assert!(err.is_cancellation());
    }

    #[test]
    fn test_set_source() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = Error::new(ErrorKind::NotFound, "config.toml not found").set_source(io_err);

        let source = err.source().expect("source");
        assert_eq!(source.to_string(), "file not found");
        assert!(source.downcast_ref::<std::io::Error>().is_some());
    }

    #[test]
    fn test_source_downcasts_to_error() {
        let err = Error::unexpected("outer").set_source(Error::invalid_state("inner"));
        let source = err.source().expect("source");
        let inner = source.downcast_ref::<Error>().expect("crate error");
        assert_eq!(inner.kind(), ErrorKind::InvalidState);
    }

    #[test]
    fn test_wrap() {
        let err = Error::wrap(Error::parse_failed("bad digit"));
        assert_eq!(err.kind(), ErrorKind::Unexpected);
        assert_eq!(err.message(), "ParseFailed => bad digit");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_from_io_error() {
        let err: Error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert_eq!(err.kind(), ErrorKind::PermissionDenied);
        assert_eq!(err.operation(), "io");
        assert_eq!(err.message(), "denied");
    }

    #[test]
    fn test_from_io_error_stays_checked() {
        let err: Error = std::io::Error::new(std::io::ErrorKind::InvalidInput, "bad fd").into();
        assert_eq!(err.kind(), ErrorKind::IoFailed);
        assert!(!err.kind().is_unchecked());

        let wrapped = Error::unexpected("load failed").set_source(err);
        let cause = crate::effective_cause(&wrapped, false);
        assert_eq!(cause.downcast_ref::<Error>().unwrap().kind(), ErrorKind::IoFailed);
    }
}
