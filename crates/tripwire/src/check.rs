//! Condition checks that abandon the current execution path on failure.
//!
//! A failed check never returns. It unwinds the calling thread with an
//! [`AssertionFailure`] payload until a boundary such as [`crate::catch`]
//! stops it, or the thread dies. Checks are for invariants that indicate a
//! programming error when broken; recoverable conditions belong in a `Result`.
//!
//! # Example
//!
//! ```
//! use tripwire::{assert, assertf, catch};
//!
//! let len = 3;
//! assert(len > 0, "buffer must not be empty");
//! assertf!(len < 8, "buffer too long: {}", len);
//!
//! let failure = catch(|| assertf!(len > 5, "len={}", len)).unwrap_err();
//! assert_eq!(failure.to_string(), "AssertionError: len=3");
//! ```

use std::panic;

use crate::AssertionFailure;

/// Unconditionally unwinds with an [`AssertionFailure`] carrying `text`.
///
/// Every other check in this crate ends here.
///
/// # Panics
///
/// Always, with an [`AssertionFailure`] payload.
#[cold]
#[inline(never)]
#[track_caller]
pub fn raise<S: Into<String>>(text: S) -> ! {
    panic::panic_any(AssertionFailure::new(text))
}

/// Unwinds with an [`AssertionFailure`] carrying `text` if `condition` is false.
///
/// `text` is only converted into an owned message when the check fails.
///
/// # Panics
///
/// When `condition` is false.
#[inline]
#[track_caller]
pub fn assert<S: Into<String>>(condition: bool, text: S) {
    if !condition {
        raise(text);
    }
}

/// Like [`assert`], with the message built by [`format!`].
///
/// The format arguments are evaluated only when the condition is false, so a
/// passing check costs a single branch.
///
/// ```
/// # use tripwire::{assertf, catch};
/// let failure = catch(|| assertf!(1 + 1 == 3, "value={}", 42)).unwrap_err();
/// assert_eq!(failure.to_string(), "AssertionError: value=42");
/// ```
#[macro_export]
macro_rules! assertf {
    ($condition:expr, $($arg:tt)+) => {
        if !$condition {
            $crate::raise(::std::format!($($arg)+))
        }
    };
}

/// Formats a message and delegates to [`raise`].
///
/// ```should_panic
/// # use tripwire::raisef;
/// let id = 7;
/// raisef!("unknown slot {}", id);
/// ```
#[macro_export]
macro_rules! raisef {
    ($($arg:tt)+) => {
        $crate::raise(::std::format!($($arg)+))
    };
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::catch;

    #[test]
    fn assert_true_is_noop() {
        assert_eq!(catch(|| assert(true, "never shown")), Ok(()));
        assert_eq!(catch(|| assert(true, "")), Ok(()));
    }

    #[test]
    fn assert_false_raises() {
        let failure = catch(|| assert(false, "boom")).unwrap_err();
        assert_eq!(failure.to_string(), "AssertionError: boom");
    }

    #[test]
    fn assert_false_empty_text() {
        let failure = catch(|| assert(false, "")).unwrap_err();
        assert_eq!(failure.to_string(), "AssertionError");
    }

    #[test]
    fn assertf_false_formats() {
        let failure = catch(|| crate::assertf!(false, "value={}", 42)).unwrap_err();
        assert_eq!(failure.to_string(), "AssertionError: value=42");
        assert_eq!(failure.text(), "value=42");
    }

    #[test]
    fn assertf_true_is_lazy() {
        let evaluated = Cell::new(false);
        let touch = || {
            evaluated.set(true);
            42
        };

        crate::assertf!(true, "value={}", touch());
        assert!(!evaluated.get());

        let failure = catch(std::panic::AssertUnwindSafe(|| crate::assertf!(false, "value={}", touch())))
            .unwrap_err();
        assert!(evaluated.get());
        assert_eq!(failure.text(), "value=42");
    }

    #[test]
    fn assertf_true_never_runs_a_panicking_argument() {
        fn explode() -> u32 {
            panic!("formatted on the success path")
        }

        crate::assertf!(true, "{}", explode());
    }

    #[test]
    fn raise_matches_assert() {
        let raised = catch::<_, ()>(|| raise("x")).unwrap_err();
        let asserted = catch(|| assert(false, "x")).unwrap_err();
        assert_eq!(raised, asserted);
        assert_eq!(raised.to_string(), asserted.to_string());
    }

    #[test]
    fn raisef_formats() {
        let name = "cache";
        let failure = catch::<_, ()>(|| crate::raisef!("{name} lost {} entries", 3)).unwrap_err();
        assert_eq!(failure.to_string(), "AssertionError: cache lost 3 entries");
    }

    #[test]
    fn raise_accepts_owned_text() {
        let text = String::from("owned");
        let failure = catch::<_, ()>(move || raise(text)).unwrap_err();
        assert_eq!(failure.text(), "owned");
    }

    #[test]
    fn assert_in_expression_position() {
        let checked = |v: i32| {
            crate::assertf!(v >= 0, "negative: {}", v);
            v * 2
        };
        assert_eq!(catch(|| checked(4)), Ok(8));
        assert_eq!(catch(|| checked(-1)).unwrap_err().text(), "negative: -1");
    }
}
