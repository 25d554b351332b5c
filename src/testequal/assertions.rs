//! Equality assertions over `Comparable` values.
//!
//! - `assert_equal` / `assert_not_equal`: report and continue, returning
//!   whether the check passed
//! - `require_equal` / `require_not_equal`: report and stop the test
//!
//! Messages are anything `Display`: `""` for none, a plain `&str`, or
//! `format_args!` for a formatted message.

use std::fmt;

use super::comparable::{check_equality, Comparable};

/// Handle to the running test.
pub trait TestReporter {
    /// Record a failure and keep going.
    fn error(&mut self, message: &str);

    /// Stop the test immediately.
    fn fail_now(&mut self) -> !;
}

/// Reporter for plain `#[test]` functions.
///
/// Errors are collected as they are reported. `fail_now` panics with
/// everything collected so far, and dropping a reporter that still holds
/// errors panics too.
#[derive(Debug, Default)]
pub struct PanicReporter {
    errors: Vec<String>,
}

impl PanicReporter {
    /// Create a reporter with no recorded errors.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Errors recorded so far.
    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Check if any error was recorded.
    #[must_use]
    pub fn failed(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Take the recorded errors, leaving the reporter clean.
    pub fn take_errors(&mut self) -> Vec<String> {
        std::mem::take(&mut self.errors)
    }
}

impl TestReporter for PanicReporter {
    fn error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }

    #[track_caller]
    fn fail_now(&mut self) -> ! {
        let errors = self.take_errors();
        panic!("test failed: [{}]", errors.join("; "))
    }
}

impl Drop for PanicReporter {
    fn drop(&mut self) {
        if self.failed() && !std::thread::panicking() {
            panic!("test failed: [{}]", self.errors.join("; "));
        }
    }
}

/// Check that `expected` and `actual` are equal.
///
/// Reports `message` on failure but lets the test continue.
/// Returns true iff the values are equal.
pub fn assert_equal<R: TestReporter + ?Sized>(
    t: &mut R,
    expected: impl Into<Comparable>,
    actual: impl Into<Comparable>,
    message: impl fmt::Display,
) -> bool {
    if check_equality(&expected.into(), &actual.into()) {
        return true;
    }
    t.error(&message.to_string());
    false
}

/// Check that `expected` and `actual` are not equal.
///
/// Reports `message` on failure but lets the test continue.
/// Returns true iff the values are not equal.
pub fn assert_not_equal<R: TestReporter + ?Sized>(
    t: &mut R,
    expected: impl Into<Comparable>,
    actual: impl Into<Comparable>,
    message: impl fmt::Display,
) -> bool {
    if !check_equality(&expected.into(), &actual.into()) {
        return true;
    }
    t.error(&message.to_string());
    false
}

/// Same as `assert_equal`, but stops the test on failure.
#[track_caller]
pub fn require_equal<R: TestReporter + ?Sized>(
    t: &mut R,
    expected: impl Into<Comparable>,
    actual: impl Into<Comparable>,
    message: impl fmt::Display,
) {
    if check_equality(&expected.into(), &actual.into()) {
        return;
    }
    t.error(&message.to_string());
    t.fail_now();
}

/// Same as `assert_not_equal`, but stops the test on failure.
#[track_caller]
pub fn require_not_equal<R: TestReporter + ?Sized>(
    t: &mut R,
    expected: impl Into<Comparable>,
    actual: impl Into<Comparable>,
    message: impl fmt::Display,
) {
    if !check_equality(&expected.into(), &actual.into()) {
        return;
    }
    t.error(&message.to_string());
    t.fail_now();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panic_reporter_collects() {
        let mut t = PanicReporter::new();
        t.error("first");
        t.error("");
        assert!(t.failed());
        assert_eq!(t.errors().to_vec(), vec!["first".to_string(), String::new()]);
        assert_eq!(t.take_errors().len(), 2);
        assert!(!t.failed());
    }

    #[test]
    #[should_panic(expected = "test failed: [boom]")]
    fn test_panic_reporter_fail_now() {
        let mut t = PanicReporter::new();
        t.error("boom");
        t.fail_now();
    }

    #[test]
    #[should_panic(expected = "test failed: [left over]")]
    fn test_panic_reporter_drop_with_errors() {
        let mut t = PanicReporter::new();
        t.error("left over");
    }

    #[test]
    fn test_message_forms() {
        let mut t = PanicReporter::new();
        assert_equal(&mut t, 1i64, 2i64, "");
        assert_equal(&mut t, 1i64, 2i64, "plain");
        assert_equal(&mut t, 1i64, 2i64, format_args!("got {}, want {}", 2, 1));
        assert_eq!(t.take_errors(), vec!["", "plain", "got 2, want 1"]);
    }

    #[test]
    fn test_assert_equal_passes_quietly() {
        let mut t = PanicReporter::new();
        assert!(assert_equal(&mut t, 1i64, 1i64, "unused"));
        assert!(!t.failed());
    }
}
