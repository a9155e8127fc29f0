//! MariaDB named dynamic columns codec.
//!
//! This module contains the on-wire layout and per-type value encodings for
//! MariaDB's `COLUMN_CREATE`/`COLUMN_CHECK` binary blob format. Start with
//! [`pack::pack`] to serialize a [`value::Mapping`], or [`unpack::unpack`]
//! to parse one back.
//!
//! | Submodule | Purpose |
//! |-----------|---------|
//! | [`value`] | The [`value::Value`] sum type and [`value::Mapping`] alias |
//! | [`limits`] | Name-length caps enforced before encoding a key |
//! | [`directory`] | Column directory size classes and the variable-width combined field |
//! | [`codec`] | Per-type value encode/decode (int, uint, double, string, date, time, datetime, nested) |
//! | [`pack`] | Blob assembly from a sorted, encoded set of columns |
//! | [`unpack`] | Blob parsing back into a mapping |

pub mod codec;
pub mod directory;
pub mod limits;
pub mod pack;
pub mod unpack;
pub mod value;

pub use pack::pack;
pub use unpack::unpack;
pub use value::{Mapping, Value};
