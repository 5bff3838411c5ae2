//! Trieviz Core — trie model, graph rendering, and artifact export

pub mod error;
pub mod loader;
pub mod trie;
pub mod model;
pub mod graph;
pub mod render;
pub mod export;


#[cfg(test)]
pub mod test_utils;

pub use error::Error;
pub use loader::{load_entries, parse_entries, TOKEN_DELIMITER};
pub use trie::{Trie, TrieNode};
pub use model::{NodeId, EdgeId, GraphNode, GraphEdge};
pub use graph::Graph;
pub use render::{trie_to_graph, to_dot};
pub use export::{DEFAULT_INPUT, DEFAULT_JSON_OUTPUT, DEFAULT_DOT_OUTPUT, trie_json, write_trie_json, write_dot};
