//! Trie construction from dot-delimited token sequences

use std::collections::BTreeMap;

use serde::ser::{Serialize, Serializer};

/// One node of the trie. A node is nothing but its children mapping: keys
/// are tokens, values are subtrees, leaves have an empty map. There is no
/// end-of-entry marker, so an entry that is a strict prefix of another one
/// is not distinguishable from an interior node by tree shape alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrieNode {
    children: BTreeMap<String, TrieNode>,
}

impl TrieNode {
    /// Look up a direct child by token.
    pub fn child(&self, token: &str) -> Option<&TrieNode> {
        self.children.get(token)
    }

    /// Iterate over direct children in key order.
    pub fn children(&self) -> impl Iterator<Item = (&str, &TrieNode)> {
        self.children.iter().map(|(token, node)| (token.as_str(), node))
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes strictly below this node.
    pub fn descendant_count(&self) -> usize {
        self.children
            .values()
            .map(|child| 1 + child.descendant_count())
            .sum()
    }
}

/// Nested-map serialization: a node serializes as exactly its children
/// mapping, so leaves come out as `{}` and the whole trie mirrors its
/// in-memory shape.
impl Serialize for TrieNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.children.serialize(serializer)
    }
}

/// A prefix tree over token sequences. Built in one pass over the input
/// and read-only afterward.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trie {
    root: TrieNode,
}

impl Trie {
    pub fn new() -> Self {
        Trie::default()
    }

    /// Build a trie from a sequence of entries, one token sequence each.
    pub fn from_entries<I, T, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Trie::new();
        for entry in entries {
            trie.insert(entry);
        }
        trie
    }

    /// Insert one entry. Walks down from the root, creating any missing
    /// child along the way. Shared prefixes reuse existing nodes, so
    /// inserting the same entry twice is a no-op.
    pub fn insert<I, S>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut current = &mut self.root;
        for token in tokens {
            current = current
                .children
                .entry(token.as_ref().to_string())
                .or_default();
        }
    }

    /// The synthetic root. It carries no token and is never rendered.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Follow a token path down from the root.
    pub fn node_at<'a, I>(&self, tokens: I) -> Option<&TrieNode>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut current = &self.root;
        for token in tokens {
            current = current.child(token)?;
        }
        Some(current)
    }

    /// Total number of non-root nodes.
    pub fn node_count(&self) -> usize {
        self.root.descendant_count()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_leaf()
    }
}

impl Serialize for Trie {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.root.serialize(serializer)
    }
}
