//! # Execution context
//!
//! Per-unit-of-work cancellation flag.
//!
//! Every thread starts with its own [`Context`]. A task runner that multiplexes
//! several units of work on one thread can give each unit its own flag with
//! [`Context::enter`]. Handles are cheap to clone and share the same flag, so a
//! supervisor may keep one to request cancellation from outside.

use crate::{Error, Result};
use std::cell::RefCell;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

thread_local! {
    static CURRENT: RefCell<Context> = RefCell::new(Context::new());
}

/// Cancellation state of one unit of work
#[derive(Debug, Clone, Default)]
pub struct Context {
    cancelled: Arc<AtomicBool>,
}

impl Context {
    /// Create a fresh, not cancelled context
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle to the context of the current thread
    pub fn current() -> Self {
        CURRENT.with(|current| current.borrow().clone())
    }

    /// Install this context as current for the calling thread.
    ///
    /// The previous context is restored when the returned guard is dropped.
    pub fn enter(&self) -> ContextGuard {
        let previous = CURRENT.with(|current| current.replace(self.clone()));
        ContextGuard {
            previous: Some(previous),
        }
    }

    /// Request cancellation
    pub fn cancel(&self) {
        if !self.cancelled.swap(true, Ordering::AcqRel) {
            tracing::debug!("execution context cancelled");
        }
    }

    /// Checks if cancellation has been requested
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    /// Returns whether cancellation was requested and clears the flag
    pub fn take_cancelled(&self) -> bool {
        self.cancelled.swap(false, Ordering::AcqRel)
    }

    /// Cooperative cancellation checkpoint.
    ///
    /// Returns a [`ErrorKind::Cancelled`](crate::ErrorKind::Cancelled) error if
    /// cancellation is pending. The flag stays set.
    ///
    /// ```rust
    /// use exceptional::Context;
    ///
    /// let ctx = Context::new();
    /// assert!(ctx.checkpoint().is_ok());
    /// ctx.cancel();
    /// assert!(ctx.checkpoint().unwrap_err().is_cancellation());
    /// ```
    pub fn checkpoint(&self) -> Result<()> {
        if self.is_cancelled() {
            return Err(Error::cancelled().with_operation("context::checkpoint"));
        }
        Ok(())
    }

    /// Check if two handles share the same flag
    pub fn same_as(&self, other: &Context) -> bool {
        Arc::ptr_eq(&self.cancelled, &other.cancelled)
    }
}

/// Restores the previously current context on drop
#[must_use = "the context is only current while the guard is alive"]
pub struct ContextGuard {
    previous: Option<Context>,
}

impl Drop for ContextGuard {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            // Thread-local may already be gone during thread teardown.
            let _ = CURRENT.try_with(|current| current.replace(previous));
        }
    }
}
