//! Output artifacts: serialized trie and rendered DOT document

use std::fs;
use std::path::Path;

use crate::error::Error;
use crate::graph::Graph;
use crate::render;
use crate::trie::Trie;

/// Default entries file.
pub const DEFAULT_INPUT: &str = "entries.txt";

/// Default path for the serialized trie.
pub const DEFAULT_JSON_OUTPUT: &str = "trie.json";

/// Default path for the rendered graph document.
pub const DEFAULT_DOT_OUTPUT: &str = "trie.dot";

/// Pretty-printed JSON mirroring the trie's nested mapping shape.
pub fn trie_json(trie: &Trie) -> Result<String, Error> {
    Ok(serde_json::to_string_pretty(trie)?)
}

/// Write the serialized trie, overwriting any previous run's artifact.
pub fn write_trie_json(trie: &Trie, path: &Path) -> Result<(), Error> {
    let json = trie_json(trie)?;
    fs::write(path, json).map_err(|source| Error::WriteOutput {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!("serialized trie written: {}", path.display());
    Ok(())
}

/// Write the rendered graph as a DOT document, overwriting any previous
/// run's artifact.
pub fn write_dot(graph: &Graph, path: &Path) -> Result<(), Error> {
    let dot = render::to_dot(graph);
    fs::write(path, dot).map_err(|source| Error::WriteOutput {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!("rendered graph written: {}", path.display());
    Ok(())
}
