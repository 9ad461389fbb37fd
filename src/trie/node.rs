//! Node implementation for the Lanai Prefix Trie.
//!
//! This module provides the TrieNode structure used in the Lanai Trie
//! implementation. Nodes are the fundamental building blocks of the trie,
//! each representing one code point position along the inserted keys and
//! carrying the values accumulated at that position.

use fnv::FnvHashMap;

/// A node in the Lanai Prefix Trie.
///
/// Each node represents a code point in a key path. The node accumulates
/// one value per insertion whose key passes through its position, so the
/// values list at a node of depth `d` collects every value whose key has
/// the node's `d`-length path as a prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrieNode {
    /// Map of code points to child nodes
    pub children: FnvHashMap<char, TrieNode>,

    /// Values accumulated at this position, in insertion order
    pub values: Vec<String>,

    /// Whether some inserted key terminates exactly at this node.
    ///
    /// Carried for parity with the node layout this structure descends
    /// from; no current operation sets or reads it.
    pub is_end: bool,
}

impl TrieNode {
    /// Creates a new empty trie node.
    pub fn new() -> Self {
        Self {
            children: FnvHashMap::default(),
            values: Vec::new(),
            is_end: false,
        }
    }
}

impl Default for TrieNode {
    fn default() -> Self {
        Self::new()
    }
}
