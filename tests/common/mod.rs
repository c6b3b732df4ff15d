#![allow(dead_code)]

use kate::interpreter::{parse_lines, Buffer};
use kate::Value;
use std::path::PathBuf;

/// The document used throughout the scenario tests
pub const VALID_LINES: [&str; 6] = [
    "let a = 1\n",
    "let b = 'hello'\n",
    "let c = array( 1, 2, 3 )\n",
    "/+\n",
    "This is a comment\n",
    "+/\n",
];

pub const INVALID_LINES: [&str; 4] = [
    "let a = 1\n",
    "let b = 'hello'\n",
    "let c = array( 1, 2, 3 )\n",
    "let d = a +\n",
];

pub fn parse(lines: &[&str]) -> Buffer {
    parse_lines(lines).expect("Document should parse")
}

pub fn number(buffer: &Buffer, name: &str) -> f64 {
    match buffer.get(name) {
        Some(Value::Number(n)) => *n,
        other => panic!("Expected number for `{}`, got {:?}", name, other),
    }
}

pub fn array(buffer: &Buffer, name: &str) -> Vec<f64> {
    match buffer.get(name) {
        Some(Value::Array(items)) => items.clone(),
        other => panic!("Expected array for `{}`, got {:?}", name, other),
    }
}

pub fn text(buffer: &Buffer, name: &str) -> String {
    match buffer.get(name) {
        Some(Value::Text(s)) => s.clone(),
        other => panic!("Expected text for `{}`, got {:?}", name, other),
    }
}

/// A path in the system temp dir that is unique to this test process
pub fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("kate-{}-{}", std::process::id(), name))
}

pub fn write_temp(name: &str, contents: &str) -> PathBuf {
    let path = temp_path(name);
    std::fs::write(&path, contents).expect("Failed to write temp file");
    path
}
