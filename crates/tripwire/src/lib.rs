//! Fail-fast assertions that unwind with a typed failure payload
//!
//! This crate checks invariants that must always hold. When one does not, the
//! check abandons the current execution path by panicking with an
//! [`AssertionFailure`] as payload instead of returning an error code. A broken
//! invariant is a programming error, so nothing inside the crate tries to
//! recover from it; the application picks the boundary where unwinding stops.
//!
//! # Features
//!
//! - [`assert`] and [`assertf!`] check a condition, formatting the message only on failure
//! - [`raise`] and [`raisef!`] fail unconditionally
//! - [`not_nil`] checks an `Option` or raw pointer slot and names the missing type
//! - [`catch`], [`AssertionFailure::from_panic`] and [`install_hook`] stop or report a failure
//!
//! # Example
//!
//! ```
//! use tripwire::{AssertionFailure, assert, assertf, catch, install_hook, not_nil};
//!
//! struct Session {
//!     user: Option<String>,
//!     retries: u32,
//! }
//!
//! fn resume(session: &Session) -> usize {
//!     not_nil(&session.user);
//!     assertf!(session.retries < 3, "too many retries: {}", session.retries);
//!     session.user.as_ref().map_or(0, String::len)
//! }
//!
//! install_hook();
//!
//! let ok = Session { user: Some("ada".into()), retries: 1 };
//! assert_eq!(catch(|| resume(&ok)), Ok(3));
//!
//! let broken = Session { user: None, retries: 0 };
//! let failure: AssertionFailure = catch(|| resume(&broken)).unwrap_err();
//! assert_eq!(failure.to_string(), "AssertionError: String is nil");
//!
//! assert(failure.text().ends_with("is nil"), "unexpected message");
//! ```
//!
//! # Threads
//!
//! A failure unwinds only the thread that raised it. A spawned thread that
//! fails hands its payload to [`std::thread::JoinHandle::join`], where
//! [`AssertionFailure::from_panic`] can recover it.

mod boundary;
mod check;
mod error;
mod nilable;

pub use boundary::{catch, install_hook};
pub use check::{assert, raise};
pub use error::AssertionFailure;
pub use nilable::{Nilable, not_nil, short_type_name};
