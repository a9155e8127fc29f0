//! Name-length limits enforced before a key's value is ever encoded.

use crate::error::DynColError;

/// Maximum UTF-8 byte length of a single key.
pub const MAX_NAME_LENGTH: usize = 16383;

/// Maximum running total of UTF-8 key bytes across an entire mapping.
pub const MAX_TOTAL_NAME_LENGTH: usize = 65535;

/// Check a single key against [`MAX_NAME_LENGTH`] and add it to `running_total`,
/// checking the new total against [`MAX_TOTAL_NAME_LENGTH`].
///
/// # Examples
///
/// ```
/// use dyncol::dyncol::limits::check_name_length;
///
/// let mut total = 0;
/// assert!(check_name_length("a", &mut total).is_ok());
/// assert_eq!(total, 1);
/// ```
pub fn check_name_length(name: &str, running_total: &mut usize) -> Result<(), DynColError> {
    let len = name.len();
    if len > MAX_NAME_LENGTH {
        return Err(DynColError::LimitError(format!(
            "key too long: {name} ({len} bytes, max {MAX_NAME_LENGTH})"
        )));
    }
    *running_total += len;
    if *running_total > MAX_TOTAL_NAME_LENGTH {
        return Err(DynColError::LimitError(format!(
            "total length of keys too long ({} bytes, max {MAX_TOTAL_NAME_LENGTH})",
            *running_total
        )));
    }
    Ok(())
}
