//! # Sneaky adapters
//!
//! Turn a fallible closure into a closure of the same arity that declares no
//! error at all, so it can be handed to APIs that only take infallible
//! callbacks (`Iterator::map`, `Option::map_or_else`, `for_each`, ...).
//!
//! On success the inner result is returned untouched. On failure the inner
//! error is [`raise`](crate::raise)d as is and can be caught with
//! [`catch`](crate::catch).
//!
//! ```rust
//! use exceptional::{catch, sneaky, Error};
//!
//! let parse = sneaky::function(|s: &str| s.parse::<u32>());
//! let total: u32 = ["1", "2", "3"].into_iter().map(&parse).sum();
//! assert_eq!(total, 6);
//!
//! let raised = catch(|| ["1", "x"].into_iter().map(&parse).sum::<u32>()).unwrap_err();
//! assert!(raised.is::<std::num::ParseIntError>());
//! ```

use crate::OrRaise;
use std::any::Any;

/// Adapt a fallible producer
pub fn supplier<R, E, F>(call: F) -> impl Fn() -> R
where
    F: Fn() -> Result<R, E>,
    E: Any + Send,
{
    move || call().or_raise()
}

/// Adapt a fallible one-argument function
pub fn function<P, R, E, F>(functional: F) -> impl Fn(P) -> R
where
    F: Fn(P) -> Result<R, E>,
    E: Any + Send,
{
    move |p| functional(p).or_raise()
}

/// Adapt a fallible two-argument function
pub fn bifunction<P, Q, R, E, F>(functional: F) -> impl Fn(P, Q) -> R
where
    F: Fn(P, Q) -> Result<R, E>,
    E: Any + Send,
{
    move |p, q| functional(p, q).or_raise()
}

/// Adapt a fallible action
pub fn runnable<E, F>(processor: F) -> impl Fn()
where
    F: Fn() -> Result<(), E>,
    E: Any + Send,
{
    move || processor().or_raise()
}

/// Adapt a fallible one-argument consumer
pub fn consumer<P, E, F>(consumable: F) -> impl Fn(P)
where
    F: Fn(P) -> Result<(), E>,
    E: Any + Send,
{
    move |p| consumable(p).or_raise()
}

/// Adapt a fallible two-argument consumer
pub fn biconsumer<P, Q, E, F>(consumable: F) -> impl Fn(P, Q)
where
    F: Fn(P, Q) -> Result<(), E>,
    E: Any + Send,
{
    move |p, q| consumable(p, q).or_raise()
}
