//! Randomized round-trip sweep, in the spirit of the original
//! implementation's Hypothesis-based property tests: generate arbitrary
//! mappings of mixed supported value types and assert that
//! `unpack(pack(m)) == m`.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use dyncol::{pack, unpack, Mapping, Value};
use rand::distr::Alphanumeric;
use rand::{Rng, RngExt};

fn random_key(rng: &mut impl Rng, max_len: usize) -> String {
    let len = rng.random_range(1..=max_len);
    (0..len).map(|_| rng.sample(Alphanumeric) as char).collect()
}

fn random_scalar(rng: &mut impl Rng, depth: u8) -> Value {
    let choice = if depth == 0 {
        rng.random_range(0..7)
    } else {
        rng.random_range(0..8)
    };
    match choice {
        0 => Value::Int(rng.random_range(-(2i64.pow(32) - 1)..=i64::MAX)),
        1 => Value::Uint(rng.random_range(i64::MAX as u64 + 1..=u64::MAX)),
        2 => {
            let f: f64 = rng.random_range(-1e12..1e12);
            Value::Double(f)
        }
        3 => Value::String(random_key(rng, 32)),
        4 => Value::Date(
            NaiveDate::from_ymd_opt(
                rng.random_range(1..=9999),
                rng.random_range(1..=12),
                rng.random_range(1..=28),
            )
            .unwrap(),
        ),
        5 => Value::Time(
            NaiveTime::from_hms_micro_opt(
                rng.random_range(0..24),
                rng.random_range(0..60),
                rng.random_range(0..60),
                rng.random_range(0..1_000_000),
            )
            .unwrap(),
        ),
        6 => {
            let date = NaiveDate::from_ymd_opt(
                rng.random_range(1..=9999),
                rng.random_range(1..=12),
                rng.random_range(1..=28),
            )
            .unwrap();
            let time = NaiveTime::from_hms_micro_opt(
                rng.random_range(0..24),
                rng.random_range(0..60),
                rng.random_range(0..60),
                rng.random_range(0..1_000_000),
            )
            .unwrap();
            Value::DateTime(NaiveDateTime::new(date, time))
        }
        _ => Value::Map(random_mapping(rng, depth - 1)),
    }
}

fn random_mapping(rng: &mut impl Rng, depth: u8) -> Mapping {
    let n = rng.random_range(0..6);
    let mut m = Mapping::new();
    for _ in 0..n {
        let key = random_key(rng, 20);
        m.insert(key, random_scalar(rng, depth));
    }
    m
}

#[test]
fn random_mappings_round_trip() {
    let mut rng = rand::rng();
    for _ in 0..500 {
        let m = random_mapping(&mut rng, 2);
        let blob = pack(&m).expect("pack should succeed for generated values");
        let back = unpack(&blob).expect("unpack should succeed for our own pack output");
        assert_eq!(back, m);
    }
}

#[test]
fn random_mappings_are_deterministic() {
    let mut rng = rand::rng();
    for _ in 0..100 {
        let m = random_mapping(&mut rng, 1);
        assert_eq!(pack(&m).unwrap(), pack(&m).unwrap());
    }
}
