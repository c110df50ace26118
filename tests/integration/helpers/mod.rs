//! Shared helpers for integration tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use a2h::{ConverterOptions, LineConverter};
use tempfile::TempDir;

/// Directory holding the captured terminal output fixtures.
pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

/// Raw bytes of a fixture file.
pub fn load_fixture(name: &str) -> Vec<u8> {
    let path = fixtures_dir().join(name);
    std::fs::read(&path).unwrap_or_else(|e| panic!("Failed to read {:?}: {}", path, e))
}

/// Write `contents` to `name` inside a fresh temp dir.
pub fn temp_fixture(name: &str, contents: &[u8]) -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(name);
    std::fs::write(&path, contents).unwrap();
    (temp, path)
}

/// Body markup for `input` with default options.
pub fn convert(input: &str) -> String {
    LineConverter::convert_to_string(input.as_bytes(), ConverterOptions::default())
}

/// Body markup for raw bytes with custom options.
pub fn convert_with(input: &[u8], options: ConverterOptions) -> String {
    LineConverter::convert_to_string(input, options)
}
