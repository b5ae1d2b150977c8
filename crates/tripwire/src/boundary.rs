//! Boundaries that stop an unwinding assertion.
//!
//! Checks never recover from their own failures. Code that owns a unit of work
//! (a request, a job, a thread) decides where unwinding ends:
//!
//! - [`catch`] turns a failure inside a closure back into a `Result`.
//! - [`AssertionFailure::from_panic`] recovers the failure from a raw panic
//!   payload, e.g. the one returned by [`std::thread::JoinHandle::join`].
//! - [`install_hook`] makes an uncaught failure report its rendered message
//!   instead of the opaque `Box<dyn Any>` the default hook prints.

use std::any::Any;
use std::panic::{self, PanicHookInfo, UnwindSafe};
use std::sync::Once;
use std::thread;

use tracing::{Level, debug, error};

use crate::AssertionFailure;

impl AssertionFailure {
    /// Recovers the failure carried by a panic payload.
    ///
    /// Payloads of any other panic are handed back untouched so the caller can
    /// resume them.
    ///
    /// ```
    /// # use tripwire::{AssertionFailure, assert};
    /// let payload = std::thread::spawn(|| assert(false, "worker lost its queue")).join().unwrap_err();
    /// let failure = AssertionFailure::from_panic(payload).unwrap();
    /// assert_eq!(failure.text(), "worker lost its queue");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns the original payload if it is not an [`AssertionFailure`].
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Result<Self, Box<dyn Any + Send>> {
        payload.downcast::<Self>().map(|failure| *failure)
    }
}

/// Runs `f`, returning its assertion failure as an error.
///
/// Panics that do not carry an [`AssertionFailure`] keep unwinding.
///
/// # Errors
///
/// Returns the [`AssertionFailure`] raised while running `f`.
pub fn catch<F, R>(f: F) -> Result<R, AssertionFailure>
where
    F: FnOnce() -> R + UnwindSafe,
{
    match panic::catch_unwind(f) {
        Ok(value) => Ok(value),
        Err(payload) => match AssertionFailure::from_panic(payload) {
            Ok(failure) => {
                debug!(text = failure.text(), "caught assertion failure");
                Err(failure)
            }
            Err(other) => panic::resume_unwind(other),
        },
    }
}

static INSTALL_HOOK: Once = Once::new();

/// Installs a panic hook that reports assertion failures by their message.
///
/// Failures are logged with [`tracing::error!`] when the current subscriber
/// records `ERROR` events, and written to stderr otherwise. Every other panic
/// goes to the hook that was installed before. Calling this more than once has
/// no further effect.
pub fn install_hook() {
    INSTALL_HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(assertion_hook(previous, |report: &str| eprint!("{report}"))));
    });
}

/// Builds the hook: failures go to `report`, everything else to `previous`.
///
/// `fallback` receives the rendered report when no subscriber takes the event.
fn assertion_hook<P, S>(previous: P, fallback: S) -> impl Fn(&PanicHookInfo<'_>) + Send + Sync + 'static
where
    P: Fn(&PanicHookInfo<'_>) + Send + Sync + 'static,
    S: Fn(&str) + Send + Sync + 'static,
{
    move |info: &PanicHookInfo<'_>| match info.payload().downcast_ref::<AssertionFailure>() {
        Some(failure) => report(failure, info, &fallback),
        None => previous(info),
    }
}

fn report(failure: &AssertionFailure, info: &PanicHookInfo<'_>, fallback: &dyn Fn(&str)) {
    let current = thread::current();
    let name = current.name().unwrap_or("<unnamed>");
    let location = info.location().map(ToString::to_string).unwrap_or_default();

    if tracing::enabled!(Level::ERROR) {
        error!(thread = name, location = %location, "{failure}");
    } else {
        fallback(&render_report(name, &location, failure));
    }
}

fn render_report(thread: &str, location: &str, failure: &AssertionFailure) -> String {
    format!("thread '{thread}' panicked at {location}:\n{failure}\n")
}
