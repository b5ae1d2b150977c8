//! The failure value carried by an unwinding assertion.
//!
//! [`AssertionFailure`] is the only error kind in this crate. It is built at the
//! moment a check fails and immediately moved into the panic payload, so
//! nothing outside a panic boundary ever observes it as a plain value.

use thiserror::Error;

/// Payload of a failed assertion.
///
/// Renders as `AssertionError` when the message is empty, and as
/// `AssertionError: <text>` otherwise. The rendering depends on nothing but
/// the message, so every handler that displays it shows the same string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("AssertionError{}{text}", separator(.text))]
pub struct AssertionFailure {
    text: String,
}

impl AssertionFailure {
    /// Creates a failure carrying `text`.
    #[must_use]
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self { text: text.into() }
    }

    /// The message passed to the failing check, without the `AssertionError` prefix.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

fn separator(text: &str) -> &'static str {
    if text.is_empty() { "" } else { ": " }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_with_text() {
        let failure = AssertionFailure::new("boom");
        assert_eq!(failure.to_string(), "AssertionError: boom");
        assert_eq!(failure.text(), "boom");
    }

    #[test]
    fn render_empty_text() {
        let failure = AssertionFailure::new("");
        assert_eq!(failure.to_string(), "AssertionError");
        assert_eq!(failure.text(), "");
    }

    #[test]
    fn render_is_stable() {
        let failure = AssertionFailure::new(String::from("x: y"));
        let first = failure.to_string();
        let second = failure.to_string();
        assert_eq!(first, second);
        assert_eq!(first, "AssertionError: x: y");
    }

    #[test]
    fn whitespace_text_is_not_empty() {
        let failure = AssertionFailure::new(" ");
        assert_eq!(failure.to_string(), "AssertionError:  ");
    }

    #[test]
    fn usable_as_std_error() {
        let err: Box<dyn std::error::Error + Send + Sync> = Box::new(AssertionFailure::new("bad state"));
        assert_eq!(err.to_string(), "AssertionError: bad state");
        assert!(err.source().is_none());
    }
}
