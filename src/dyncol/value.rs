//! The logical value type a [`Mapping`] holds.

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An unordered mapping from UTF-8 keys to dynamic-column values.
///
/// This is the user-visible container for both [`pack`](crate::pack) (which
/// consumes a `Mapping`) and [`unpack`](crate::unpack) (which produces one).
pub type Mapping = HashMap<String, Value>;

/// One column's value.
///
/// There is no `Null` variant: per the format, a key whose value is null is
/// simply absent from the mapping (see [`crate::pack`]).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    /// Signed integer, stored as wire type `INT` or `UINT` depending on range
    /// (see [`crate::dyncol::codec`]).
    Int(i64),
    /// Unsigned integer. Only produced by [`crate::unpack`] for columns whose
    /// value exceeds `i64::MAX`; pass `Value::Int` to `pack` for anything
    /// representable in 64 signed bits.
    Uint(u64),
    /// IEEE-754 double.
    Double(f64),
    /// UTF-8 string.
    String(String),
    /// Calendar date.
    Date(NaiveDate),
    /// Wall-clock time.
    Time(NaiveTime),
    /// Calendar date and time.
    DateTime(NaiveDateTime),
    /// A recursively nested mapping, stored as its own complete blob.
    Map(Mapping),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::Uint(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Double(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_owned())
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Value::Date(v)
    }
}

impl From<NaiveTime> for Value {
    fn from(v: NaiveTime) -> Self {
        Value::Time(v)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(v: NaiveDateTime) -> Self {
        Value::DateTime(v)
    }
}

impl From<Mapping> for Value {
    fn from(v: Mapping) -> Self {
        Value::Map(v)
    }
}
