//! Per-type value codecs: encode a [`Value`] to its payload bytes and type
//! code, and decode a payload back given its type code.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::dyncol::value::Value;
use crate::error::DynColError;

/// Signed integer.
pub const TYPE_INT: u8 = 0;
/// Unsigned integer, used only for values that overflow `i64`.
pub const TYPE_UINT: u8 = 1;
/// IEEE-754 double.
pub const TYPE_DOUBLE: u8 = 2;
/// UTF-8 string, prefixed with a charset byte.
pub const TYPE_STRING: u8 = 3;
/// Reserved, always refused.
pub const TYPE_DECIMAL: u8 = 4;
/// Calendar date and time.
pub const TYPE_DATETIME: u8 = 5;
/// Calendar date.
pub const TYPE_DATE: u8 = 6;
/// Wall-clock time.
pub const TYPE_TIME: u8 = 7;
/// Recursively nested mapping.
pub const TYPE_DYNCOL: u8 = 8;

const MYSQL_CHARSET_UTF8: u8 = 0x21;
const MYSQL_CHARSET_UTF8MB4: u8 = 0x2D;

/// Lowest signed integer encodable as `INT`: `-(2**32 - 1)`.
const INT_MIN_ALLOWED: i64 = -(1i64 << 32) + 1;

/// Encode one value to its wire type code and payload bytes.
///
/// `pack` is threaded through so `Value::Map` can recurse without this
/// module depending on [`crate::dyncol::pack`] for anything but that one call.
pub fn encode_value(
    value: &Value,
    pack: impl Fn(&crate::dyncol::value::Mapping) -> Result<Vec<u8>, DynColError>,
) -> Result<(u8, Vec<u8>), DynColError> {
    match value {
        Value::Int(v) => encode_int(*v),
        Value::Uint(v) => Ok((TYPE_UINT, encode_uint(*v))),
        Value::Double(v) => Ok((TYPE_DOUBLE, encode_double(*v)?)),
        Value::String(s) => Ok((TYPE_STRING, encode_string(s))),
        Value::Date(d) => Ok((TYPE_DATE, encode_date(*d))),
        Value::Time(t) => Ok((TYPE_TIME, encode_time(*t))),
        Value::DateTime(dt) => Ok((TYPE_DATETIME, encode_datetime(*dt))),
        Value::Map(m) => Ok((TYPE_DYNCOL, pack(m)?)),
    }
}

/// Decode a payload given its wire type code.
///
/// `unpack` is threaded through so `DYNCOL` can recurse without this module
/// depending on [`crate::dyncol::unpack`] for anything but that one call.
pub fn decode_value(
    dtype: u8,
    payload: &[u8],
    unpack: impl Fn(&[u8]) -> Result<crate::dyncol::value::Mapping, DynColError>,
) -> Result<Value, DynColError> {
    match dtype {
        TYPE_INT => Ok(Value::Int(decode_int(payload))),
        TYPE_UINT => Ok(Value::Uint(decode_uint(payload)?)),
        TYPE_DOUBLE => Ok(Value::Double(decode_double(payload)?)),
        TYPE_STRING => Ok(Value::String(decode_string(payload)?)),
        TYPE_DECIMAL => Err(DynColError::NotSupported(
            "DECIMAL columns are not supported".to_string(),
        )),
        TYPE_DATETIME => Ok(Value::DateTime(decode_datetime(payload)?)),
        TYPE_DATE => Ok(Value::Date(decode_date(payload)?)),
        TYPE_TIME => Ok(Value::Time(decode_time(payload)?)),
        TYPE_DYNCOL => Ok(Value::Map(unpack(payload)?)),
        other => Err(DynColError::ValueError(format!(
            "unknown dynamic column type code {other}"
        ))),
    }
}

/// Zig-zag encode a signed integer, emitting the minimal little-endian byte
/// sequence (zero produces an empty payload).
///
/// `v` must lie in `[-(2**32 - 1), 2**63 - 1]`; `Value::Int` already bounds
/// the upper end via `i64`, so only the lower bound is checked here.
fn encode_int(v: i64) -> Result<(u8, Vec<u8>), DynColError> {
    if v < INT_MIN_ALLOWED {
        return Err(DynColError::ValueError(format!("int {v} out of range")));
    }
    let mut magnitude: u64 = if v < 0 {
        ((-v) as u64) * 2 - 1
    } else {
        (v as u64) << 1
    };

    let mut bytes = Vec::new();
    while magnitude != 0 {
        bytes.push((magnitude & 0xFF) as u8);
        magnitude >>= 8;
    }
    Ok((TYPE_INT, bytes))
}

fn decode_int(payload: &[u8]) -> i64 {
    let mut value: u64 = 0;
    for (i, &b) in payload.iter().enumerate() {
        value |= (b as u64) << (8 * i);
    }
    if value & 1 != 0 {
        -((value >> 1) as i64) - 1
    } else {
        (value >> 1) as i64
    }
}

fn encode_uint(v: u64) -> Vec<u8> {
    v.to_le_bytes().to_vec()
}

fn decode_uint(payload: &[u8]) -> Result<u64, DynColError> {
    let arr: [u8; 8] = payload
        .try_into()
        .map_err(|_| DynColError::ValueError("malformed UINT payload".to_string()))?;
    Ok(u64::from_le_bytes(arr))
}

/// Encode an IEEE-754 double, normalizing negative zero to positive zero
/// (the MariaDB server rejects the negative-zero bit pattern).
fn encode_double(v: f64) -> Result<Vec<u8>, DynColError> {
    if v.is_nan() || v.is_infinite() {
        return Err(DynColError::ValueError(format!(
            "float value not encodeable: {v}"
        )));
    }
    let v = if v == 0.0 { 0.0 } else { v };
    Ok(v.to_le_bytes().to_vec())
}

fn decode_double(payload: &[u8]) -> Result<f64, DynColError> {
    let arr: [u8; 8] = payload
        .try_into()
        .map_err(|_| DynColError::ValueError("malformed DOUBLE payload".to_string()))?;
    Ok(f64::from_le_bytes(arr))
}

fn encode_string(s: &str) -> Vec<u8> {
    let mut buf = Vec::with_capacity(1 + s.len());
    buf.push(MYSQL_CHARSET_UTF8MB4);
    buf.extend_from_slice(s.as_bytes());
    buf
}

fn decode_string(payload: &[u8]) -> Result<String, DynColError> {
    let (charset, rest) = payload
        .split_first()
        .ok_or_else(|| DynColError::ValueError("empty STRING payload".to_string()))?;
    if *charset != MYSQL_CHARSET_UTF8 && *charset != MYSQL_CHARSET_UTF8MB4 {
        return Err(DynColError::NotSupported(format!(
            "can only decode strings with MySQL charsets utf8 or utf8mb4, got charset byte 0x{charset:02X}"
        )));
    }
    String::from_utf8(rest.to_vec())
        .map_err(|e| DynColError::ValueError(format!("invalid UTF-8 in STRING payload: {e}")))
}

/// Pack `day | month << 5 | year << 9` into the low 3 bytes of a little-endian `u32`.
fn encode_date(date: NaiveDate) -> Vec<u8> {
    let val = date.day() | (date.month() << 5) | ((date.year() as u32) << 9);
    val.to_le_bytes()[..3].to_vec()
}

fn decode_date(payload: &[u8]) -> Result<NaiveDate, DynColError> {
    if payload.len() != 3 {
        return Err(DynColError::ValueError(format!(
            "malformed DATE payload: expected 3 bytes, got {}",
            payload.len()
        )));
    }
    let val = u32::from_le_bytes([payload[0], payload[1], payload[2], 0]);
    let day = val & 0x1F;
    let month = (val >> 5) & 0xF;
    let year = (val >> 9) as i32;
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        DynColError::ValueError(format!("invalid DATE: {year:04}-{month:02}-{day:02}"))
    })
}

/// Pack a time into either the 3-byte (no microseconds) or 6-byte
/// (with microseconds) sub-encoding, dispatched by whether `micro != 0`.
fn encode_time(time: NaiveTime) -> Vec<u8> {
    let micro = time.nanosecond() / 1000;
    if micro > 0 {
        let val: u64 = micro as u64
            | ((time.second() as u64) << 20)
            | ((time.minute() as u64) << 26)
            | ((time.hour() as u64) << 32);
        val.to_le_bytes()[..6].to_vec()
    } else {
        let val: u32 = time.second() | (time.minute() << 6) | (time.hour() << 12);
        val.to_le_bytes()[..3].to_vec()
    }
}

fn decode_time(payload: &[u8]) -> Result<NaiveTime, DynColError> {
    match payload.len() {
        6 => {
            let mut bytes = [0u8; 8];
            bytes[..6].copy_from_slice(payload);
            let val = u64::from_le_bytes(bytes);
            let micro = (val & 0xFFFFF) as u32;
            let second = ((val >> 20) & 0x3F) as u32;
            let minute = ((val >> 26) & 0x3F) as u32;
            let hour = (val >> 32) as u32;
            NaiveTime::from_hms_micro_opt(hour, minute, second, micro)
                .ok_or_else(|| DynColError::ValueError("invalid TIME".to_string()))
        }
        3 => {
            let val = u32::from_le_bytes([payload[0], payload[1], payload[2], 0]);
            let second = val & 0x3F;
            let minute = (val >> 6) & 0x3F;
            let hour = val >> 12;
            NaiveTime::from_hms_opt(hour, minute, second)
                .ok_or_else(|| DynColError::ValueError("invalid TIME".to_string()))
        }
        other => Err(DynColError::ValueError(format!(
            "malformed TIME payload: expected 3 or 6 bytes, got {other}"
        ))),
    }
}

fn encode_datetime(dt: NaiveDateTime) -> Vec<u8> {
    let mut buf = encode_date(dt.date());
    buf.extend(encode_time(dt.time()));
    buf
}

fn decode_datetime(payload: &[u8]) -> Result<NaiveDateTime, DynColError> {
    if payload.len() < 3 {
        return Err(DynColError::ValueError(format!(
            "malformed DATETIME payload: {} bytes",
            payload.len()
        )));
    }
    let date = decode_date(&payload[..3])?;
    let time = decode_time(&payload[3..])?;
    Ok(NaiveDateTime::new(date, time))
}
