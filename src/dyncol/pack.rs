//! Blob assembly: the `pack` half of the codec.

use crate::dyncol::codec::encode_value;
use crate::dyncol::directory::SizeClass;
use crate::dyncol::limits::check_name_length;
use crate::dyncol::value::Mapping;
use crate::error::DynColError;

/// Serialize a [`Mapping`] into the MariaDB named dynamic columns format.
///
/// Keys are sorted into the canonical `(utf8_len, utf8_bytes)` order before
/// encoding, so the output is deterministic: two equal mappings always
/// produce byte-identical blobs.
///
/// # Errors
///
/// Returns [`DynColError::LimitError`] if a key or the total of all keys
/// exceeds the format's length caps, or if the total encoded data would
/// overflow the largest directory size class. Returns
/// [`DynColError::ValueError`] if an integer or float value is out of range.
/// Returns [`DynColError::NotSupported`] for `DECIMAL` values (not part of
/// the `Value` enum, so only reachable via a nested blob decoded elsewhere).
///
/// # Examples
///
/// ```
/// use dyncol::{pack, unpack, Value};
/// use std::collections::HashMap;
///
/// let mut m = HashMap::new();
/// m.insert("a".to_string(), Value::Int(1));
/// let blob = pack(&m).unwrap();
/// assert_eq!(unpack(&blob).unwrap(), m);
/// ```
pub fn pack(mapping: &Mapping) -> Result<Vec<u8>, DynColError> {
    let mut entries: Vec<(&String, &crate::dyncol::value::Value)> = mapping.iter().collect();
    entries.sort_by(|(a, _), (b, _)| (a.len(), a.as_str()).cmp(&(b.len(), b.as_str())));

    let mut names = Vec::new();
    let mut data = Vec::new();
    // (name_offset, data_offset, dtype) per column, in directory order.
    let mut directory_entries: Vec<(u16, u32, u8)> = Vec::with_capacity(entries.len());
    let mut total_name_length: usize = 0;

    for (key, value) in &entries {
        check_name_length(key, &mut total_name_length)?;

        let name_offset = names.len();
        let data_offset = data.len();
        let (dtype, payload) = encode_value(value, pack)?;

        names.extend_from_slice(key.as_bytes());
        data.extend_from_slice(&payload);

        directory_entries.push((
            u16::try_from(name_offset)
                .map_err(|_| DynColError::LimitError("name offset overflow".to_string()))?,
            u32::try_from(data_offset)
                .map_err(|_| DynColError::LimitError("data offset overflow".to_string()))?,
            dtype,
        ));
    }

    let column_count = u16::try_from(directory_entries.len())
        .map_err(|_| DynColError::LimitError("too many columns".to_string()))?;
    let names_length = u16::try_from(names.len())
        .map_err(|_| DynColError::LimitError("names region overflow".to_string()))?;

    let class = SizeClass::for_data_len(data.len())?;
    let flags = 4 | class.flag_bits();

    let mut buf = Vec::with_capacity(
        5 + directory_entries.len() * class.entry_size() + names.len() + data.len(),
    );
    buf.push(flags);
    buf.extend_from_slice(&column_count.to_le_bytes());
    buf.extend_from_slice(&names_length.to_le_bytes());

    for (name_offset, data_offset, dtype) in directory_entries {
        buf.extend_from_slice(&name_offset.to_le_bytes());
        buf.extend(class.write_combined(data_offset, dtype));
    }

    buf.extend_from_slice(&names);
    buf.extend_from_slice(&data);

    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dyncol::value::Value;
    use std::collections::HashMap;

    fn map(pairs: &[(&str, Value)]) -> Mapping {
        pairs
            .iter()
            .cloned()
            .map(|(k, v)| (k.to_string(), v))
            .collect::<HashMap<_, _>>()
    }

    fn hex(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{b:02x}")).collect()
    }

    #[test]
    fn empty_mapping() {
        let m = map(&[]);
        assert_eq!(hex(&pack(&m).unwrap()), "0400000000");
    }

    #[test]
    fn single_int_column() {
        let m = map(&[("a", Value::Int(1))]);
        assert_eq!(hex(&pack(&m).unwrap()), "0401000100000000006102");
    }

    #[test]
    fn directory_order_by_length_then_bytes() {
        let m = map(&[("a", Value::Int(1)), ("b", Value::Int(2))]);
        assert_eq!(
            hex(&pack(&m).unwrap()),
            "0402000200000000000100100061620204"
        );
    }
}
