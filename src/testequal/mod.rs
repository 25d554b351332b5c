//! Equality assertions for tests.
//!
//! Compares a fixed set of kinds: every signed and unsigned integer width,
//! strings, string-to-string maps, `i64` sequences, and byte sequences.
//! Anything else converts to `Comparable::Unsupported` and never compares
//! equal.
//!
//! ## Usage
//!
//! ```
//! use spellcast::testequal::{assert_equal, assert_not_equal, PanicReporter};
//!
//! let mut t = PanicReporter::new();
//!
//! assert!(assert_equal(&mut t, 950i64, 950i64, "health after fire"));
//! assert!(assert_not_equal(&mut t, 5i32, 5i64, "widths differ"));
//!
//! // A failed non-fatal assertion records the message and carries on.
//! assert!(!assert_equal(&mut t, "fire", "heal", "spell name"));
//! assert_eq!(t.take_errors(), vec!["spell name".to_string()]);
//! ```

mod assertions;
mod comparable;

pub use assertions::{
    assert_equal, assert_not_equal, require_equal, require_not_equal, PanicReporter, TestReporter,
};
pub use comparable::{check_equality, Comparable, StringMap};
