#![allow(dead_code)]

use std::fs::File;

use graphalgs::{ParseError, graph::ReadEdgeList};

pub const DATA_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/");

/// Reads one of the fixture files under `tests/data`.
pub fn load<G: ReadEdgeList>(name: &str) -> G {
    try_load(name).unwrap_or_else(|err| panic!("failed to load {name}: {err}"))
}

pub fn try_load<G: ReadEdgeList>(name: &str) -> Result<G, ParseError> {
    G::from_reader(File::open(format!("{DATA_DIR}{name}"))?)
}

pub fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("{DATA_DIR}{name}")).unwrap()
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

/// Converts a fixture weight (two decimal places) into hundredths.
pub fn hundredths(weight: f64) -> i64 {
    (weight * 100.0).round() as i64
}
