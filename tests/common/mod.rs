//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to create a temp directory with test files.
pub fn create_test_project(files: &[(&str, &str)]) -> (TempDir, Vec<PathBuf>) {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let mut paths = Vec::with_capacity(files.len());

    for (name, content) in files {
        let file_path = temp_dir.path().join(name);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&file_path, content).expect("Failed to write test file");
        paths.push(file_path);
    }

    (temp_dir, paths)
}

/// Source with `it('adds numbers', ...)` spanning lines 10-14.
pub const ADDS_NUMBERS_SUITE: &str = "\
import { add } from '../src/math';
import { subtract } from '../src/math';

const fixtures = {
  small: [1, 2],
  large: [1000, 2000],
};

describe('math', () => {
it('adds numbers', () => {
  const [a, b] = fixtures.small;
  expect(add(a, b)).toBe(3);
  expect(add(b, a)).toBe(3);
});
});
";
