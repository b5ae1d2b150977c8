//! Nil checks for slots that may or may not refer to a value.
//!
//! [`not_nil`] takes a reference to the slot itself, so the slot's type is
//! known at compile time and the failure message can name what is missing
//! without any runtime introspection. Passing something that cannot be nil is
//! a type error.

use std::any;

use crate::check::raise;

/// A slot that may hold nothing.
pub trait Nilable {
    /// The type named in the failure message when the slot is empty.
    type Target: ?Sized;

    /// Returns true if the slot does not refer to a value.
    fn is_nil(&self) -> bool;
}

impl<T> Nilable for Option<T> {
    type Target = T;

    fn is_nil(&self) -> bool {
        self.is_none()
    }
}

impl<T: ?Sized> Nilable for *const T {
    type Target = T;

    fn is_nil(&self) -> bool {
        self.is_null()
    }
}

impl<T: ?Sized> Nilable for *mut T {
    type Target = T;

    fn is_nil(&self) -> bool {
        self.is_null()
    }
}

/// Unwinds with `"<Type> is nil"` if the slot behind `value` is empty.
///
/// `<Type>` is the slot's target type with module paths removed, see
/// [`short_type_name`].
///
/// ```
/// # use tripwire::{catch, not_nil};
/// struct Widget;
///
/// not_nil(&Some(7));
///
/// let missing: Option<Widget> = None;
/// let failure = catch(|| not_nil(&missing)).unwrap_err();
/// assert_eq!(failure.to_string(), "AssertionError: Widget is nil");
/// ```
///
/// # Panics
///
/// When the slot is nil.
#[inline]
#[track_caller]
pub fn not_nil<N: Nilable + ?Sized>(value: &N) {
    if value.is_nil() {
        raise(format!("{} is nil", short_type_name::<N::Target>()));
    }
}

/// [`std::any::type_name`] of `T` with every module path stripped.
///
/// Generic parameters, references and pointer qualifiers are kept, so
/// `alloc::boxed::Box<app::Widget>` becomes `Box<Widget>` and
/// `*const app::Widget` becomes `*const Widget`.
#[must_use]
pub fn short_type_name<T: ?Sized>() -> String {
    strip_paths(any::type_name::<T>())
}

fn strip_paths(full: &str) -> String {
    let mut out = String::with_capacity(full.len());
    let mut word_start = None;

    for (idx, ch) in full.char_indices() {
        let in_path = ch.is_alphanumeric() || ch == '_' || ch == ':';
        match (in_path, word_start) {
            (true, None) => word_start = Some(idx),
            (false, Some(start)) => {
                push_last_segment(&mut out, &full[start..idx]);
                word_start = None;
                out.push(ch);
            }
            (false, None) => out.push(ch),
            (true, Some(_)) => {}
        }
    }

    if let Some(start) = word_start {
        push_last_segment(&mut out, &full[start..]);
    }
    out
}

fn push_last_segment(out: &mut String, path: &str) {
    // `<T as Trait>::Assoc` leaves a path that starts with `::`
    if path.starts_with("::") {
        out.push_str("::");
    }
    out.push_str(path.rsplit("::").next().unwrap_or(path));
}
