//! Core data structures for the rendered graph

use serde::{Deserialize, Serialize};

/// Unique, stable identifier for a node, assigned by the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct NodeId(pub u64);

/// Unique edge identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct EdgeId(pub u64);

/// A drawable node, one per trie node visited during rendering.
///
/// `id` is the synthetic graph-identity name, the raw token suffixed with
/// the visit counter (`"b_2"`). It only exists to keep nodes that share a
/// token text apart and never appears in the rendered label. `label` is
/// the raw token shown to the user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GraphNode {
    pub id: String,
    pub label: String,
}

/// A directed parent-to-child edge in the rendered trie.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct GraphEdge {
    pub source: NodeId,
    pub target: NodeId,
}
