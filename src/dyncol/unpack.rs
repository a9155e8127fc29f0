//! Blob parsing: the `unpack` half of the codec.

use crate::dyncol::codec::decode_value;
use crate::dyncol::directory::SizeClass;
use crate::dyncol::value::Mapping;
use crate::error::DynColError;

const HEADER_LEN: usize = 1 + 2 + 2;

/// Parse a MariaDB named dynamic columns blob into a [`Mapping`].
///
/// # Errors
///
/// Returns [`DynColError::ValueError`] if the flags byte doesn't mark the
/// named-columns format, or a directory entry names an unrecognized type
/// code. Returns [`DynColError::NotSupported`] if a `STRING` column uses a
/// charset other than utf8/utf8mb4, or a column is tagged `DECIMAL`.
///
/// # Examples
///
/// ```
/// use dyncol::unpack;
///
/// let blob = [0x04, 0x00, 0x00, 0x00, 0x00];
/// assert!(unpack(&blob).unwrap().is_empty());
/// ```
pub fn unpack(buf: &[u8]) -> Result<Mapping, DynColError> {
    if buf.len() < HEADER_LEN {
        return Err(DynColError::ValueError(
            "blob shorter than the dynamic columns header".to_string(),
        ));
    }

    let flags = buf[0];
    if flags & 0xFC != 4 {
        return Err(DynColError::ValueError(
            "unknown dynamic columns format".to_string(),
        ));
    }
    let class = SizeClass::from_flags(flags)?;

    let column_count = u16::from_le_bytes([buf[1], buf[2]]) as usize;
    let names_length = u16::from_le_bytes([buf[3], buf[4]]) as usize;

    if column_count == 0 {
        return Ok(Mapping::new());
    }

    let directory_end = HEADER_LEN + class.entry_size() * column_count;
    let names_end = directory_end + names_length;

    let directory = buf
        .get(HEADER_LEN..directory_end)
        .ok_or_else(|| DynColError::ValueError("blob truncated: column directory".to_string()))?;
    let names = buf
        .get(directory_end..names_end)
        .ok_or_else(|| DynColError::ValueError("blob truncated: names region".to_string()))?;
    let data = buf
        .get(names_end..)
        .ok_or_else(|| DynColError::ValueError("blob truncated: data region".to_string()))?;

    let entry_size = class.entry_size();
    let mut columns = Vec::with_capacity(column_count);
    for i in 0..column_count {
        let entry = &directory[i * entry_size..(i + 1) * entry_size];
        let name_offset = u16::from_le_bytes([entry[0], entry[1]]) as usize;
        let (data_offset, dtype) = class.read_combined(&entry[2..]);
        columns.push((name_offset, data_offset as usize, dtype));
    }

    let mut result = Mapping::with_capacity(column_count);
    for i in 0..column_count {
        let (name_offset, data_offset, dtype) = columns[i];
        let name_end = if i + 1 < column_count {
            columns[i + 1].0
        } else {
            names_length
        };
        let data_end = if i + 1 < column_count {
            columns[i + 1].1
        } else {
            data.len()
        };

        let name_bytes = names.get(name_offset..name_end).ok_or_else(|| {
            DynColError::ValueError("column name offset out of range".to_string())
        })?;
        let name = String::from_utf8(name_bytes.to_vec())
            .map_err(|e| DynColError::ValueError(format!("invalid UTF-8 in column name: {e}")))?;

        let payload = data.get(data_offset..data_end).ok_or_else(|| {
            DynColError::ValueError("column data offset out of range".to_string())
        })?;
        let value = decode_value(dtype, payload, unpack)?;

        result.insert(name, value);
    }

    Ok(result)
}
