//! Codec for MariaDB's named Dynamic Columns binary blob format.
//!
//! MariaDB's `COLUMN_CREATE`/`COLUMN_CHECK`/`COLUMN_GET` family of SQL
//! functions store an arbitrary set of named, typed columns in a single
//! `BLOB` value. This crate provides [`pack`] and [`unpack`], the two
//! inverse operations needed to produce and consume that blob format from
//! Rust without a SQL client in the loop: `pack` serializes a [`Mapping`] of
//! UTF-8 keys to [`Value`]s into bytes identical to what `COLUMN_CREATE`
//! would produce for the same inputs, and `unpack` parses such bytes back.
//!
//! # Quick example
//!
//! ```
//! use dyncol::{pack, unpack, Value};
//! use std::collections::HashMap;
//!
//! let mut row = HashMap::new();
//! row.insert("name".to_string(), Value::String("widget".to_string()));
//! row.insert("qty".to_string(), Value::Int(42));
//!
//! let blob = pack(&row).unwrap();
//! assert_eq!(unpack(&blob).unwrap(), row);
//! ```
//!
//! # Key entry points
//!
//! | Type / Function | Purpose |
//! |-----------------|---------|
//! | [`pack`] | Serialize a [`Mapping`] into a dynamic columns blob |
//! | [`unpack`] | Parse a dynamic columns blob into a [`Mapping`] |
//! | [`Value`] | One column's value: int, uint, double, string, date, time, datetime, or nested mapping |
//! | [`DynColError`] | The four distinguished failure kinds |
//!
//! # Module overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`dyncol`] | The codec itself: wire layout, value codecs, directory packing |
//! | [`error`] | [`DynColError`] and its four variants |
//!
//! # Not supported
//!
//! `DECIMAL` columns are refused by both `pack` and `unpack` with
//! [`DynColError::NotSupported`] — MariaDB's packed-BCD decimal encoding is
//! not a stable contract upstream and the reserved type code is carried
//! through unimplemented by design, not by omission.
//!
//! This crate has no CLI, reads no environment variables, and keeps no
//! persistent state: `pack` and `unpack` are pure functions over byte
//! buffers, safe to call concurrently from multiple threads on disjoint
//! inputs.

pub mod dyncol;
pub mod error;

pub use dyncol::{pack, unpack, Mapping, Value};
pub use error::DynColError;
