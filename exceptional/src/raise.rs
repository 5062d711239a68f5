//! # Raising errors past declared contracts
//!
//! A function's `Result<T, E>` declares which error type may leave it.
//! [`raise`] moves an error of any type out of such a function anyway, by
//! unwinding with the error itself as the payload. [`catch`] is the matching
//! handler and hands the payload back as a [`Raised`].
//!
//! Unwinding must be enabled: with `panic = "abort"` a raise terminates the
//! process.

use crate::{Context, Error};
use std::any::Any;
use std::error::Error as StdError;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

/// Re-raise `error` regardless of the caller's declared error type.
///
/// The value is moved into the unwind payload unchanged: no wrapping and no
/// copy, so whoever catches it gets the same instance with its source chain
/// and context intact. The panic hook is not invoked.
///
/// ```rust
/// use exceptional::{catch, raise, Error, ErrorKind};
///
/// fn parse(input: &str) -> Result<u32, std::num::ParseIntError> {
///     if input.is_empty() {
///         raise(Error::invalid_argument("empty input"));
///     }
///     input.parse()
/// }
///
/// let raised = catch(|| parse("")).unwrap_err();
/// let err = raised.downcast::<Error>().unwrap();
/// assert_eq!(err.kind(), ErrorKind::InvalidArgument);
/// ```
pub fn raise<E>(error: E) -> !
where
    E: Any + Send,
{
    panic::resume_unwind(Box::new(error))
}

/// Run `f`, capturing anything raised out of it.
///
/// Ordinary panics are captured too; [`Raised::panic_message`] exposes their
/// text and [`Raised::resume`] lets them continue.
pub fn catch<R>(f: impl FnOnce() -> R) -> Result<R, Raised> {
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(Raised::from_payload)
}

/// If `error` is the cancellation signal, mark the current [`Context`] as
/// cancelled and re-raise it. Any other error is handed back untouched.
///
/// The cancellation signal is an [`Error`] of kind
/// [`ErrorKind::Cancelled`](crate::ErrorKind::Cancelled), either bare or
/// carried inside an `anyhow::Error`, a `Box<dyn Error + Send + Sync>` or a
/// `Box<dyn Error + Send>`.
///
/// ```rust
/// use exceptional::{propagate_if_cancelled, Error, ErrorKind};
///
/// let err = propagate_if_cancelled(Error::failed("disk full"));
/// assert_eq!(err.kind(), ErrorKind::Failed);
/// ```
pub fn propagate_if_cancelled<E>(error: E) -> E
where
    E: Any + Send,
{
    if is_cancellation(&error) {
        Context::current().cancel();
        tracing::trace!("re-raising cancellation");
        raise(error);
    }
    error
}

pub(crate) fn is_cancellation(payload: &dyn Any) -> bool {
    if let Some(err) = payload.downcast_ref::<Error>() {
        return err.is_cancellation();
    }
    if let Some(err) = payload.downcast_ref::<anyhow::Error>() {
        return err.downcast_ref::<Error>().is_some_and(Error::is_cancellation);
    }
    if let Some(err) = payload.downcast_ref::<Box<dyn StdError + Send + Sync>>() {
        return err.downcast_ref::<Error>().is_some_and(Error::is_cancellation);
    }
    if let Some(err) = payload.downcast_ref::<Box<dyn StdError + Send>>() {
        return err.downcast_ref::<Error>().is_some_and(Error::is_cancellation);
    }
    false
}

/// Extension for routing a `Result`'s error through [`raise`]
pub trait OrRaise<T> {
    /// Return the success value, or raise the error
    fn or_raise(self) -> T;
}

impl<T, E> OrRaise<T> for Result<T, E>
where
    E: Any + Send,
{
    fn or_raise(self) -> T {
        match self {
            Ok(value) => value,
            Err(error) => raise(error),
        }
    }
}

/// A value caught by [`catch`]
pub struct Raised {
    payload: Box<dyn Any + Send>,
}

impl Raised {
    /// Wrap a payload obtained from `std::panic::catch_unwind` or a joined thread
    pub fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        Self { payload }
    }

    /// Check if the raised value is an `E`
    pub fn is<E: Any>(&self) -> bool {
        self.payload.is::<E>()
    }

    /// Borrow the raised value as an `E`
    pub fn downcast_ref<E: Any>(&self) -> Option<&E> {
        self.payload.downcast_ref::<E>()
    }

    /// Take the raised value as an `E`, or get `self` back on mismatch
    pub fn downcast<E: Any>(self) -> Result<E, Raised> {
        match self.payload.downcast::<E>() {
            Ok(value) => Ok(*value),
            Err(payload) => Err(Raised { payload }),
        }
    }

    /// Check if the raised value is the cancellation signal
    pub fn is_cancellation(&self) -> bool {
        is_cancellation(&*self.payload)
    }

    /// Message of an ordinary `panic!`, if that is what was caught
    pub fn panic_message(&self) -> Option<&str> {
        if let Some(message) = self.payload.downcast_ref::<&'static str>() {
            return Some(*message);
        }
        self.payload.downcast_ref::<String>().map(String::as_str)
    }

    /// Continue unwinding with the same payload
    pub fn resume(self) -> ! {
        panic::resume_unwind(self.payload)
    }

    /// Get the raw payload
    pub fn into_payload(self) -> Box<dyn Any + Send> {
        self.payload
    }
}

impl fmt::Debug for Raised {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(err) = self.payload.downcast_ref::<Error>() {
            return f.debug_tuple("Raised").field(err).finish();
        }
        match self.panic_message() {
            Some(message) => f.debug_tuple("Raised").field(&message).finish(),
            None => f.write_str("Raised(..)"),
        }
    }
}
