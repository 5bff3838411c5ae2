//! Input loading: one entry per line, tokens separated by "."

use std::fs;
use std::path::Path;

use crate::error::Error;

/// Separator between tokens within an entry line.
pub const TOKEN_DELIMITER: char = '.';

/// Read an entries file into token sequences, one sequence per line.
pub fn load_entries(path: &Path) -> Result<Vec<Vec<String>>, Error> {
    let text = fs::read_to_string(path).map_err(|source| Error::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;

    let entries = parse_entries(&text);
    tracing::debug!("loaded {} entries from {}", entries.len(), path.display());
    Ok(entries)
}

/// Split text into lines, and each line into dot-delimited tokens.
///
/// A blank line yields a single empty-string token, which the trie builder
/// stores under the empty key. A trailing final newline does not produce a
/// phantom entry.
pub fn parse_entries(text: &str) -> Vec<Vec<String>> {
    text.lines()
        .map(|line| line.split(TOKEN_DELIMITER).map(str::to_string).collect())
        .collect()
}
