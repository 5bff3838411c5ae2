//! Error taxonomy for the trieviz pipeline

use std::io;
use std::path::PathBuf;

/// Everything that can go fatally wrong during a run. Input and output
/// failures carry the offending path so the CLI can report which side of
/// the pipeline broke. Malformed entry lines are not errors; the trie
/// builder absorbs them.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot read input file {path}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write output file {path}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot serialize trie to JSON")]
    Serialize(#[from] serde_json::Error),
}
