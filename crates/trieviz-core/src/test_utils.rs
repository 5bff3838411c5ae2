//! Test utilities for trieviz

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use crate::trie::Trie;

/// The scenario used throughout the tests: two entries sharing a prefix.
pub fn sample_entries() -> Vec<Vec<String>> {
    vec![
        vec!["a".to_string(), "b".to_string(), "c".to_string()],
        vec!["a".to_string(), "b".to_string(), "d".to_string()],
    ]
}

pub fn sample_trie() -> Trie {
    Trie::from_entries(sample_entries())
}

/// Write an entries file into a fresh temp dir, returning the dir (kept
/// alive for the test's duration) and the file path.
pub fn write_entries_file(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("entries.txt");
    fs::write(&path, content).unwrap();
    (dir, path)
}
