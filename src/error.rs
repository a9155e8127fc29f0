//! Error taxonomy for the dynamic columns codec.

use thiserror::Error;

/// Errors returned by [`pack`](crate::pack) and [`unpack`](crate::unpack).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DynColError {
    /// A value's runtime type is not one of the supported value classes.
    #[error("unencodable type: {0}")]
    TypeError(String),

    /// An integer is out of representable range, a float is NaN/∞, the blob
    /// carries unknown format flags, or a directory entry names an unknown
    /// type code.
    #[error("value error: {0}")]
    ValueError(String),

    /// A single key or the total of keys exceeds its length cap.
    #[error("limit error: {0}")]
    LimitError(String),

    /// `DECIMAL` was requested, or a `STRING` is tagged with a charset other
    /// than utf8/utf8mb4.
    #[error("not supported: {0}")]
    NotSupported(String),
}
