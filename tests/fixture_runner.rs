//! Runs every case under `tests/fixtures`.
//!
//! A case is a directory holding `input.kate` and either `expected.json` (the
//! document must convert to exactly that JSON) or `expected_error.txt` (parsing
//! must fail with a message containing that text).

use kate::convert::buffer_to_json;
use kate::interpreter::parse_source;
use std::fs;
use std::path::Path;

#[test]
fn run_fixtures() {
    let fixtures_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures");
    assert!(fixtures_dir.exists(), "Fixtures directory not found at {:?}", fixtures_dir);

    let mut count = 0;
    run_fixtures_in_dir(&fixtures_dir, &mut count);
    assert!(count > 0, "No fixtures found in {:?}", fixtures_dir);
}

fn run_fixtures_in_dir(dir: &Path, count: &mut usize) {
    let mut entries: Vec<_> = fs::read_dir(dir)
        .expect("Failed to read fixtures directory")
        .map(|entry| entry.expect("Failed to read entry").path())
        .filter(|path| path.is_dir())
        .collect();
    entries.sort();

    for path in entries {
        if path.join("input.kate").exists() {
            *count += 1;
            run_test_case(&path);
        } else {
            run_fixtures_in_dir(&path, count);
        }
    }
}

fn run_test_case(test_dir: &Path) {
    let test_name = test_dir.file_name().unwrap().to_string_lossy();
    let source = fs::read_to_string(test_dir.join("input.kate")).expect("Failed to read input.kate");
    let expected_json = test_dir.join("expected.json");
    let expected_error = test_dir.join("expected_error.txt");

    match parse_source(&source) {
        Ok(buffer) => {
            let expected = fs::read_to_string(&expected_json).unwrap_or_else(|_| {
                panic!("Fixture {} parsed but has no expected.json", test_name)
            });
            let expected: serde_json::Value = serde_json::from_str(&expected)
                .unwrap_or_else(|e| panic!("Failed to parse expected.json in {}: {}", test_name, e));
            let actual = buffer_to_json(&buffer);
            assert_eq!(actual, expected, "Fixture {} produced the wrong document", test_name);
        }
        Err(e) => {
            let expected = fs::read_to_string(&expected_error).unwrap_or_else(|_| {
                panic!("Fixture {} failed unexpectedly: {}", test_name, e)
            });
            assert!(
                e.to_string().contains(expected.trim()),
                "Fixture {} failed with `{}`, expected it to mention `{}`",
                test_name,
                e,
                expected.trim()
            );
        }
    }
}
