//! # exceptional
//!
//! Error propagation helpers for code whose signatures pin down the error
//! type.
//!
//! ## What's here
//!
//! - **Raise**: move any error out of a function whatever its declared
//!   `Result` type ([`raise`], [`catch`], [`OrRaise`])
//! - **Cancellation**: one distinguished kind, [`ErrorKind::Cancelled`],
//!   re-raised by [`propagate_if_cancelled`] after marking the current
//!   [`Context`]
//! - **Introspection**: display text ([`describe`]) and the telling cause in
//!   a wrapped chain ([`effective_cause`])
//! - **Adapters**: [`sneaky`] turns fallible closures into infallible ones of
//!   the same arity
//!
//! ## Usage
//!
//! ```rust
//! use exceptional::{catch, describe, effective_cause, sneaky, Error, ErrorKind};
//!
//! fn load(id: u32) -> exceptional::Result<String> {
//!     if id == 0 {
//!         return Err(Error::unexpected("load failed")
//!             .set_source(Error::not_found("user 0").with_localized("No such user")));
//!     }
//!     Ok(format!("user {}", id))
//! }
//!
//! let load = sneaky::function(load);
//! let names: Vec<String> = [1, 2].into_iter().map(&load).collect();
//! assert_eq!(names, ["user 1", "user 2"]);
//!
//! let raised = catch(|| [1, 0].into_iter().map(&load).collect::<Vec<_>>()).unwrap_err();
//! let err = raised.downcast::<Error>().unwrap();
//! assert_eq!(err.kind(), ErrorKind::Unexpected);
//! assert_eq!(describe(effective_cause(&err, false)), "No such user");
//! ```
//!
//! ## Principles
//!
//! - Raised errors are moved, never wrapped or copied
//! - Nothing here swallows an error; only a non-cancellation handed to
//!   [`propagate_if_cancelled`] is given back to the caller
//! - No global state; cancellation belongs to the unit of work's [`Context`]

mod cause;
mod context;
mod error;
mod kind;
mod raise;
pub mod sneaky;

pub use cause::{chain, describe, describe_or_else, effective_cause, Chain, MAX_CAUSE_DEPTH};
pub use context::{Context, ContextGuard};
pub use error::Error;
pub use kind::ErrorKind;
pub use raise::{catch, propagate_if_cancelled, raise, OrRaise, Raised};

/// Result type alias using exceptional Error
pub type Result<T> = std::result::Result<T, Error>;
