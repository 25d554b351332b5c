//! Values the equality assertions know how to compare.
//!
//! Every integer width is its own kind, so `5i32` and `5i64` are not
//! equal. Maps and sequences carry an `Option`: `None` is nil, which is
//! equal only to another nil of the same kind and never to an empty value.

use std::collections::HashMap;

use rustc_hash::FxHashMap;

/// String-to-string mapping.
pub type StringMap = FxHashMap<String, String>;

/// A value that can be handed to the equality assertions.
#[derive(Clone, Debug)]
pub enum Comparable {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(usize),
    Text(String),
    StringMap(Option<StringMap>),
    IntSeq(Option<Vec<i64>>),
    Bytes(Option<Vec<u8>>),
    /// A value of a kind the assertions don't compare. Never equal to anything.
    Unsupported(&'static str),
}

/// Check whether two values are equal under the assertion rules.
///
/// Values of different kinds are never equal, and an `Unsupported`
/// operand is unequal even to itself.
#[must_use]
pub fn check_equality(expected: &Comparable, actual: &Comparable) -> bool {
    use Comparable::*;

    match (expected, actual) {
        (I8(a), I8(b)) => a == b,
        (I16(a), I16(b)) => a == b,
        (I32(a), I32(b)) => a == b,
        (I64(a), I64(b)) => a == b,
        (Isize(a), Isize(b)) => a == b,
        (U8(a), U8(b)) => a == b,
        (U16(a), U16(b)) => a == b,
        (U32(a), U32(b)) => a == b,
        (U64(a), U64(b)) => a == b,
        (Usize(a), Usize(b)) => a == b,
        (Text(a), Text(b)) => a == b,
        // Option equality: nil == nil, contents compared otherwise, nil != empty.
        (StringMap(a), StringMap(b)) => a == b,
        (IntSeq(a), IntSeq(b)) => a == b,
        (Bytes(a), Bytes(b)) => a == b,
        _ => false,
    }
}

macro_rules! comparable_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Comparable {
                fn from(v: $ty) -> Self {
                    Comparable::$variant(v)
                }
            }
        )*
    };
}

comparable_from! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
    String => Text,
    Option<StringMap> => StringMap,
    Option<Vec<i64>> => IntSeq,
    Option<Vec<u8>> => Bytes,
}

impl From<&str> for Comparable {
    fn from(v: &str) -> Self {
        Comparable::Text(v.to_string())
    }
}

impl From<StringMap> for Comparable {
    fn from(v: StringMap) -> Self {
        Comparable::StringMap(Some(v))
    }
}

impl From<HashMap<String, String>> for Comparable {
    fn from(v: HashMap<String, String>) -> Self {
        Comparable::StringMap(Some(v.into_iter().collect()))
    }
}

impl From<Vec<i64>> for Comparable {
    fn from(v: Vec<i64>) -> Self {
        Comparable::IntSeq(Some(v))
    }
}

impl From<&[i64]> for Comparable {
    fn from(v: &[i64]) -> Self {
        Comparable::IntSeq(Some(v.to_vec()))
    }
}

impl From<Vec<u8>> for Comparable {
    fn from(v: Vec<u8>) -> Self {
        Comparable::Bytes(Some(v))
    }
}

impl From<&[u8]> for Comparable {
    fn from(v: &[u8]) -> Self {
        Comparable::Bytes(Some(v.to_vec()))
    }
}

impl From<f32> for Comparable {
    fn from(_: f32) -> Self {
        Comparable::Unsupported("f32")
    }
}

impl From<f64> for Comparable {
    fn from(_: f64) -> Self {
        Comparable::Unsupported("f64")
    }
}

impl From<bool> for Comparable {
    fn from(_: bool) -> Self {
        Comparable::Unsupported("bool")
    }
}
