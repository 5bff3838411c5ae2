//! Trie-to-graph conversion and Graphviz DOT emission

use crate::graph::Graph;
use crate::model::{GraphEdge, GraphNode, NodeId};
use crate::trie::{Trie, TrieNode};

/// State threaded through the depth-first walk: the graph under
/// construction and the visit counter behind the synthetic node ids.
struct RenderContext {
    graph: Graph,
    visits: u64,
}

impl RenderContext {
    fn new() -> Self {
        RenderContext {
            graph: Graph::new(),
            visits: 0,
        }
    }

    /// Record one node visit: bump the counter once and add a drawable
    /// node named `"{token}_{counter}"`. The suffix keeps repeated tokens
    /// apart; the label stays the raw token.
    fn visit(&mut self, token: &str) -> NodeId {
        self.visits += 1;
        self.graph.add_node(GraphNode {
            id: format!("{token}_{}", self.visits),
            label: token.to_string(),
        })
    }
}

/// Walk the trie depth-first, in child key order, and build the drawable
/// graph. The root is invisible: it gets no node of its own, and its
/// children get no incoming edge.
pub fn trie_to_graph(trie: &Trie) -> Graph {
    let mut ctx = RenderContext::new();

    for (token, child) in trie.root().children() {
        let id = ctx.visit(token);
        walk(child, id, &mut ctx);
    }

    tracing::debug!(
        "rendered {} nodes, {} edges",
        ctx.graph.node_count(),
        ctx.graph.edge_count()
    );
    ctx.graph
}

fn walk(node: &TrieNode, parent: NodeId, ctx: &mut RenderContext) {
    for (token, child) in node.children() {
        let id = ctx.visit(token);
        ctx.graph.add_edge(GraphEdge {
            source: parent,
            target: id,
        });
        walk(child, id, ctx);
    }
}

/// Emit the graph as a Graphviz DOT document. DOT node names are the
/// synthetic ids; the `label` attribute carries the raw token.
pub fn to_dot(graph: &Graph) -> String {
    let mut out = String::from("digraph trie {\n");

    for node in graph.all_nodes() {
        out.push_str(&format!(
            "    \"{}\" [label=\"{}\"];\n",
            escape(&node.id),
            escape(&node.label)
        ));
    }

    for edge in graph.all_edges() {
        if let (Some(source), Some(target)) = (graph.node(edge.source), graph.node(edge.target)) {
            out.push_str(&format!(
                "    \"{}\" -> \"{}\";\n",
                escape(&source.id),
                escape(&target.id)
            ));
        }
    }

    out.push_str("}\n");
    out
}

/// Escape a string for use inside a double-quoted DOT identifier.
fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
