//! CLI command implementations

use std::path::PathBuf;

use trieviz_core::{export, loader, render, Trie};

pub fn render(input: PathBuf, json: PathBuf, dot: PathBuf) -> anyhow::Result<()> {
    tracing::info!("Loading entries from {}", input.display());
    let entries = loader::load_entries(&input)?;
    tracing::info!("Loaded {} entries", entries.len());

    let trie = Trie::from_entries(&entries);
    tracing::info!("Built trie with {} nodes", trie.node_count());

    export::write_trie_json(&trie, &json)?;
    tracing::info!("Serialized trie: {}", json.display());

    let graph = render::trie_to_graph(&trie);
    tracing::info!(
        "Rendered {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    export::write_dot(&graph, &dot)?;
    tracing::info!("Graph document: {}", dot.display());

    Ok(())
}
