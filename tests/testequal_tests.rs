//! Equality assertion integration tests.
//!
//! Uses a recording reporter to observe exactly what each assertion
//! reports and whether it stops the test.

use std::collections::HashMap;
use std::panic::{catch_unwind, AssertUnwindSafe};

use spellcast::testequal::{
    assert_equal, assert_not_equal, require_equal, require_not_equal, Comparable, PanicReporter,
    StringMap, TestReporter,
};

/// Records messages; `fail_now` unwinds with a marker payload.
#[derive(Debug, Default)]
struct Recorder {
    messages: Vec<String>,
    stopped: bool,
}

struct Stopped;

impl TestReporter for Recorder {
    fn error(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }

    fn fail_now(&mut self) -> ! {
        self.stopped = true;
        std::panic::panic_any(Stopped)
    }
}

/// Run `f` and report whether it stopped through `fail_now`.
fn run(t: &mut Recorder, f: impl FnOnce(&mut Recorder)) -> bool {
    match catch_unwind(AssertUnwindSafe(|| f(t))) {
        Ok(()) => false,
        Err(payload) => {
            assert!(payload.is::<Stopped>(), "unexpected panic");
            true
        }
    }
}

fn map(pairs: &[(&str, &str)]) -> StringMap {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

// =============================================================================
// Non-fatal Assertions
// =============================================================================

#[test]
fn test_assert_equal_success() {
    let mut t = Recorder::default();

    assert!(assert_equal(&mut t, 42i32, 42i32, "ints"));
    assert!(assert_equal(&mut t, "spell", "spell", "strings"));
    assert!(assert_equal(&mut t, vec![1i64, 2], vec![1i64, 2], "ints seq"));
    assert!(assert_equal(&mut t, b"raw".to_vec(), b"raw".to_vec(), "bytes"));
    assert!(assert_equal(&mut t, map(&[("a", "b")]), map(&[("a", "b")]), "maps"));

    assert!(t.messages.is_empty());
}

#[test]
fn test_assert_equal_failure_continues() {
    let mut t = Recorder::default();

    let first = assert_equal(&mut t, 1u32, 2u32, "first");
    let second = assert_equal(&mut t, "a", "b", "second");

    assert!(!first);
    assert!(!second);
    assert_eq!(t.messages, vec!["first", "second"]);
    assert!(!t.stopped);
}

#[test]
fn test_assert_equal_formatted_message() {
    let mut t = Recorder::default();

    assert_equal(&mut t, 950i64, 900i64, format_args!("health was {}, want {}", 900, 950));
    assert_equal(&mut t, 1i8, 2i8, "");

    assert_eq!(t.messages, vec!["health was 900, want 950", ""]);
}

#[test]
fn test_assert_not_equal() {
    let mut t = Recorder::default();

    assert!(assert_not_equal(&mut t, 1i64, 2i64, "different values"));
    assert!(assert_not_equal(&mut t, 1i64, 1u64, "different kinds"));
    assert!(!assert_not_equal(&mut t, "x", "x", "same string"));

    assert_eq!(t.messages, vec!["same string"]);
}

// =============================================================================
// Fatal Assertions
// =============================================================================

#[test]
fn test_require_equal_success_does_not_stop() {
    let mut t = Recorder::default();

    let stopped = run(&mut t, |t| require_equal(t, 7usize, 7usize, "unused"));

    assert!(!stopped);
    assert!(t.messages.is_empty());
}

#[test]
fn test_require_equal_failure_stops() {
    let mut t = Recorder::default();
    let mut reached = false;

    let stopped = run(&mut t, |t| {
        require_equal(t, 7usize, 8usize, "sevens");
        reached = true;
    });

    assert!(stopped);
    assert!(!reached);
    assert!(t.stopped);
    assert_eq!(t.messages, vec!["sevens"]);
}

#[test]
fn test_require_not_equal() {
    let mut t = Recorder::default();

    assert!(!run(&mut t, |t| require_not_equal(t, "a", "b", "unused")));
    assert!(run(&mut t, |t| require_not_equal(t, vec![1i64], vec![1i64], "same seq")));
    assert_eq!(t.messages, vec!["same seq"]);
}

#[test]
#[should_panic(expected = "test failed: [mismatch]")]
fn test_panic_reporter_require() {
    let mut t = PanicReporter::new();
    require_equal(&mut t, 1i16, 2i16, "mismatch");
}

// =============================================================================
// Kind Rules
// =============================================================================

#[test]
fn test_nil_and_empty() {
    let mut t = Recorder::default();

    assert!(assert_equal(&mut t, None::<StringMap>, None::<StringMap>, "nil maps"));
    assert!(assert_equal(&mut t, Vec::<i64>::new(), Vec::<i64>::new(), "empty seqs"));
    assert!(assert_not_equal(&mut t, None::<Vec<u8>>, Vec::<u8>::new(), "nil vs empty bytes"));
    assert!(assert_not_equal(&mut t, None::<Vec<i64>>, Vec::<i64>::new(), "nil vs empty seq"));

    assert!(t.messages.is_empty());
}

#[test]
fn test_std_and_fx_maps_compare_by_contents() {
    let mut t = Recorder::default();
    let std_map: HashMap<String, String> =
        [("k".to_string(), "v".to_string())].into_iter().collect();

    assert!(assert_equal(&mut t, map(&[("k", "v")]), std_map, "maps"));
    assert!(t.messages.is_empty());
}

#[test]
fn test_mismatched_kinds_are_unequal() {
    let mut t = Recorder::default();

    assert!(assert_not_equal(&mut t, 5i32, 5i64, "int widths"));
    assert!(assert_not_equal(&mut t, "5", 5i64, "string vs int"));
    assert!(assert_not_equal(&mut t, vec![1u8], vec![1i64], "bytes vs ints"));
    assert!(assert_not_equal(&mut t, map(&[]), Vec::<i64>::new(), "map vs seq"));

    assert!(t.messages.is_empty());
}

#[test]
fn test_unsupported_kinds_never_equal() {
    let mut t = Recorder::default();

    assert!(!assert_equal(&mut t, 1.0f64, 1.0f64, "floats"));
    assert!(!assert_equal(&mut t, Comparable::Unsupported("char"), Comparable::Unsupported("char"), "chars"));
    assert!(assert_not_equal(&mut t, true, true, "bools"));

    assert_eq!(t.messages, vec!["floats", "chars"]);
}
