//! # Error introspection
//!
//! Display text and cause-chain helpers that work on any
//! `std::error::Error`, with extra knowledge of this crate's [`Error`].

use crate::Error;
use std::error::Error as StdError;

/// Maximum number of links followed when walking a cause chain
pub const MAX_CAUSE_DEPTH: usize = 128;

/// Best-effort display text for an error.
///
/// Same as [`describe_or_else`] without a fallback.
pub fn describe(error: &(dyn StdError + 'static)) -> String {
    describe_or_else(error, || None)
}

/// Best-effort display text for an error, never blank.
///
/// The first non-blank candidate wins:
/// 1. the localized message of an [`Error`]
/// 2. the message (for foreign errors, their `Display` text)
/// 3. the text produced by `on_empty`
/// 4. the structural representation: `Display` of an [`Error`], `Debug` of
///    anything else
///
/// ```rust
/// use exceptional::{describe, describe_or_else, Error, ErrorKind};
///
/// let err = Error::failed("disk full").with_localized("No space left");
/// assert_eq!(describe(&err), "No space left");
///
/// let err = Error::new(ErrorKind::Failed, "");
/// assert_eq!(describe_or_else(&err, || Some("upload failed".into())), "upload failed");
/// assert_eq!(describe(&err), "Failed");
/// ```
pub fn describe_or_else<F>(error: &(dyn StdError + 'static), on_empty: F) -> String
where
    F: FnOnce() -> Option<String>,
{
    if let Some(err) = error.downcast_ref::<Error>() {
        if let Some(localized) = err.localized().filter(|text| !is_blank(text)) {
            return localized.to_string();
        }
        if !is_blank(err.message()) {
            return err.message().to_string();
        }
    } else {
        let message = error.to_string();
        if !is_blank(&message) {
            return message;
        }
    }

    if let Some(text) = on_empty().filter(|text| !is_blank(text)) {
        return text;
    }

    structural(error)
}

fn structural(error: &(dyn StdError + 'static)) -> String {
    let text = match error.downcast_ref::<Error>() {
        Some(err) => err.to_string(),
        None => format!("{:?}", error),
    };
    if is_blank(&text) {
        return "unknown error".to_string();
    }
    text
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Walk the cause chain for its most telling error.
///
/// A link is *unchecked* when it is an [`Error`] whose kind
/// [`is_unchecked`](crate::ErrorKind::is_unchecked). Foreign errors count as
/// checked.
///
/// - `prefer_unchecked == false`: the first link that is not unchecked,
///   skipping wrappers; the last link if every link is unchecked.
/// - `prefer_unchecked == true`: starting from an unchecked error, the
///   deepest link reachable without leaving unchecked errors. A checked
///   starting error is returned as is.
///
/// An error without a source is returned unchanged in both modes.
///
/// ```rust
/// use exceptional::{effective_cause, Error};
///
/// let err = Error::unexpected("wrapper")
///     .set_source(Error::failed("upload failed").set_source(Error::failed("timeout")));
///
/// let cause = effective_cause(&err, false);
/// assert_eq!(cause.to_string(), "Failed => upload failed");
/// ```
pub fn effective_cause<'a>(
    error: &'a (dyn StdError + 'static),
    prefer_unchecked: bool,
) -> &'a (dyn StdError + 'static) {
    let mut last = error;

    if prefer_unchecked {
        if !is_unchecked(error) {
            return error;
        }
        for link in chain(error).skip(1) {
            if !is_unchecked(link) {
                break;
            }
            last = link;
        }
        return last;
    }

    for link in chain(error) {
        if !is_unchecked(link) {
            return link;
        }
        last = link;
    }
    last
}

fn is_unchecked(error: &(dyn StdError + 'static)) -> bool {
    error
        .downcast_ref::<Error>()
        .is_some_and(|err| err.kind().is_unchecked())
}

/// Iterate over `error` and its sources, at most [`MAX_CAUSE_DEPTH`] links
pub fn chain<'a>(error: &'a (dyn StdError + 'static)) -> Chain<'a> {
    Chain {
        next: Some(error),
        remaining: MAX_CAUSE_DEPTH,
    }
}

/// Iterator returned by [`chain`]
#[derive(Clone)]
pub struct Chain<'a> {
    next: Option<&'a (dyn StdError + 'static)>,
    remaining: usize,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn StdError + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.next.take()?;
        self.remaining -= 1;
        self.next = current.source();
        Some(current)
    }
}
