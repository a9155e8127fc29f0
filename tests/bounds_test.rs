//! Limit enforcement and directory-ordering properties that aren't pinned to
//! one specific hex fixture.

use dyncol::{pack, unpack, DynColError, Mapping, Value};

fn map(pairs: Vec<(String, Value)>) -> Mapping {
    pairs.into_iter().collect()
}

#[test]
fn total_name_length_at_cap_succeeds() {
    let long_key = "a".repeat(16383 - 1);
    let m = map(vec![
        (format!("{long_key}1"), Value::Int(1)),
        (format!("{long_key}2"), Value::Int(1)),
        (format!("{long_key}3"), Value::Int(1)),
        (format!("{long_key}4"), Value::Int(1)),
        ("abc".to_string(), Value::Int(1)), // total == 65535 exactly
    ]);
    assert!(pack(&m).is_ok());
}

#[test]
fn total_name_length_over_cap_fails() {
    let long_key = "a".repeat(16383 - 1);
    let m = map(vec![
        (format!("{long_key}1"), Value::Int(1)),
        (format!("{long_key}2"), Value::Int(1)),
        (format!("{long_key}3"), Value::Int(1)),
        (format!("{long_key}4"), Value::Int(1)),
        ("abc".to_string(), Value::Int(1)),
        ("a".to_string(), Value::Int(1)),
    ]);
    assert!(matches!(pack(&m), Err(DynColError::LimitError(_))));
}

#[test]
fn directory_orders_by_length_then_bytes() {
    let m = map(vec![
        ("1212".to_string(), Value::Int(2)),
        ("www".to_string(), Value::Int(3)),
    ]);
    let blob = pack(&m).unwrap();
    assert_eq!(
        blob,
        vec![
            0x04, 0x02, 0x00, 0x07, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0x00, 0x10, 0x00, 0x77,
            0x77, 0x77, 0x31, 0x32, 0x31, 0x32, 0x06, 0x04
        ]
    );
    assert_eq!(unpack(&blob).unwrap(), m);
}

#[test]
fn names_region_extracted_in_directory_order() {
    // "a" (len 1) sorts before "bb" (len 2) regardless of insertion order.
    let m = map(vec![
        ("bb".to_string(), Value::Int(1)),
        ("a".to_string(), Value::Int(2)),
    ]);
    let blob = pack(&m).unwrap();
    let names_length = u16::from_le_bytes([blob[3], blob[4]]) as usize;
    let column_count = u16::from_le_bytes([blob[1], blob[2]]) as usize;
    let entry_size = 4; // size class 0 for this tiny payload
    let directory_end = 5 + entry_size * column_count;
    let names = &blob[directory_end..directory_end + names_length];
    assert_eq!(names, b"abb");
}

#[test]
fn determinism_for_equal_mappings() {
    let m1 = map(vec![
        ("a".to_string(), Value::Int(1)),
        ("b".to_string(), Value::String("x".to_string())),
    ]);
    let m2 = m1.clone();
    assert_eq!(pack(&m1).unwrap(), pack(&m2).unwrap());
}

#[test]
fn size_class_escalates_for_large_payload() {
    // A single string value over ~4KB pushes the directory into size class 1.
    let m = map(vec![("a".to_string(), Value::String("a".repeat(4094)))]);
    let blob = pack(&m).unwrap();
    assert_eq!(blob[0] & 0x03, 1);
    assert_eq!(unpack(&blob).unwrap(), m);
}
