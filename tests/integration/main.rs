//! Integration tests for trieviz
//!
//! These tests run the full pipeline end to end: load entries, build the
//! trie, write both artifacts, and check what landed on disk.

use std::fs;
use std::process::Command;

use tempfile::TempDir;
use trieviz_core::{export, loader, render, Trie};

/// Test that the CLI can be invoked
#[test]
fn test_cli_invocation() {
    let output = Command::new("cargo")
        .args(["run", "--", "--help"])
        .current_dir(".")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("trieviz"));
    assert!(stdout.contains("Visualize dot-delimited entries as a trie graph"));
}

#[test]
fn test_pipeline_writes_both_artifacts() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("entries.txt");
    fs::write(&input, "a.b.c\na.b.d\n").unwrap();

    let entries = loader::load_entries(&input).unwrap();
    let trie = Trie::from_entries(&entries);

    let json_path = dir.path().join("trie.json");
    let dot_path = dir.path().join("trie.dot");
    export::write_trie_json(&trie, &json_path).unwrap();
    let graph = render::trie_to_graph(&trie);
    export::write_dot(&graph, &dot_path).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(json, serde_json::json!({"a": {"b": {"c": {}, "d": {}}}}));

    let dot = fs::read_to_string(&dot_path).unwrap();
    assert!(dot.starts_with("digraph trie {"));
    assert!(dot.contains("\"a_1\" -> \"b_2\";"));
    assert!(dot.contains("\"b_2\" -> \"c_3\";"));
    assert!(dot.contains("\"b_2\" -> \"d_4\";"));
}

#[test]
fn test_pipeline_preserves_blank_line_entry() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("entries.txt");
    fs::write(&input, "a.b\n\n").unwrap();

    let entries = loader::load_entries(&input).unwrap();
    let trie = Trie::from_entries(&entries);

    // The blank line lands as an empty-string child of the root.
    assert!(trie.root().child("").is_some());

    let graph = render::trie_to_graph(&trie);
    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_missing_input_reports_read_error() {
    let err = loader::load_entries(std::path::Path::new("no/such/entries.txt")).unwrap_err();
    assert!(matches!(err, trieviz_core::Error::ReadInput { .. }));
}
