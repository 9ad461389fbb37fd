//! Lanai Prefix Trie Implementation
//!
//! This module provides a trie-based data structure that records a value
//! under every prefix of its key, so that all values associated with any
//! prefix can be retrieved later, with or without deduplication.
//! Optimized for accumulate-then-query workloads such as grouping records
//! by shared key prefixes.

mod node;

use fnv::FnvHashSet;
use tracing::trace;

pub use node::TrieNode;

/// Lanai Prefix Trie is a prefix-indexed associative structure: inserting a
/// key-value pair records the value at every node along the key's code
/// point path, and looking up a prefix returns every value whose original
/// key had that prefix, in insertion order.
///
/// Key features:
/// * Value accumulation at every prefix of an inserted key
/// * Order-preserving deduplicated lookups
/// * Code point (not byte) branching, so multi-byte characters behave
///   correctly
/// * Growth-only node graph with strictly hierarchical ownership
///
/// The trie is defined for single-threaded use; callers that share one
/// across threads must provide their own mutual exclusion.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LanaiTrie {
    /// The root node of the trie, representing the empty prefix. It is
    /// created once, never replaced, and never accumulates values.
    root: TrieNode,

    /// Number of recorded (non-empty-key) insertions.
    len: usize,
}

impl LanaiTrie {
    /// Creates a new empty `LanaiTrie`.
    ///
    /// # Returns
    ///
    /// A new `LanaiTrie` instance with a single empty root node.
    pub fn new() -> Self {
        Self {
            root: TrieNode::new(),
            len: 0,
        }
    }

    /// Inserts a key-value pair into the trie.
    ///
    /// The value is appended to the accumulation list of every node along
    /// the key's code point path, so a key of `n` code points records the
    /// value at exactly `n` nodes (one per prefix of length `1..=n`). The
    /// root never accumulates values. Missing nodes are created lazily.
    ///
    /// An empty key is a no-op: no node is created, no value is recorded,
    /// and the trie state is unchanged. Duplicate keys and duplicate
    /// values are accepted and accumulate normally. The operation cannot
    /// fail.
    ///
    /// # Arguments
    ///
    /// * `key` - The key to insert.
    /// * `value` - The value to record under every prefix of `key`.
    pub fn insert<K, V>(&mut self, key: K, value: V)
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let key = key.as_ref();
        if key.is_empty() {
            trace!("skipped empty key");
            return;
        }

        let value = value.into();
        let mut depth = 0usize;
        let mut node = &mut self.root;

        for c in key.chars() {
            node = node.children.entry(c).or_default();
            node.values.push(value.clone());
            depth += 1;
        }

        self.len += 1;
        trace!(key_len = depth, total_keys = self.len, "recorded key");
    }

    /// Retrieves every value recorded under the given prefix.
    ///
    /// The result is the accumulation list of the node reached by walking
    /// the prefix's code points: one entry per insertion whose key had
    /// `prefix` as a prefix, in the order those insertions occurred.
    /// Treat the result as a multiset; use [`LanaiTrie::lookup_unique`]
    /// for set semantics.
    ///
    /// An empty prefix or a prefix no inserted key starts with yields an
    /// empty vector. The returned values are owned copies; no reference
    /// into the node graph is handed out.
    ///
    /// # Arguments
    ///
    /// * `prefix` - The prefix to look up.
    ///
    /// # Returns
    ///
    /// The values accumulated under `prefix`, or empty if there are none.
    pub fn lookup<P>(&self, prefix: P) -> Vec<String>
    where
        P: AsRef<str>,
    {
        let values = match self.walk(prefix.as_ref()) {
            Some(node) => node.values.clone(),
            None => Vec::new(),
        };
        trace!(hits = values.len(), "prefix lookup");
        values
    }

    /// Retrieves the distinct values recorded under the given prefix.
    ///
    /// Equivalent to [`LanaiTrie::lookup`] filtered to the first
    /// occurrence of each distinct value, preserving the relative order of
    /// those first occurrences. Duplicates are compared by exact string
    /// equality.
    ///
    /// # Arguments
    ///
    /// * `prefix` - The prefix to look up.
    ///
    /// # Returns
    ///
    /// The deduplicated values accumulated under `prefix`.
    pub fn lookup_unique<P>(&self, prefix: P) -> Vec<String>
    where
        P: AsRef<str>,
    {
        let values = self.lookup(prefix);

        let mut seen =
            FnvHashSet::with_capacity_and_hasher(values.len(), Default::default());
        let mut unique = Vec::new();
        for value in values {
            if seen.insert(value.clone()) {
                unique.push(value);
            }
        }
        unique
    }

    /// Returns `true` if some recorded key starts with the given prefix.
    ///
    /// The empty prefix reports `false`, consistent with
    /// [`LanaiTrie::lookup`] treating the root as a non-accumulating
    /// sentinel.
    pub fn contains_prefix<P>(&self, prefix: P) -> bool
    where
        P: AsRef<str>,
    {
        let prefix = prefix.as_ref();
        !prefix.is_empty() && self.walk(prefix).is_some()
    }

    /// Returns the number of recorded insertions.
    ///
    /// Every non-empty-key [`LanaiTrie::insert`] call counts, including
    /// repeats of the same key; the trie accumulates rather than replaces.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if nothing has been recorded in the trie.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Walks the code points of `prefix` from the root, returning the node
    /// at the end of the path, if the whole path exists.
    fn walk(&self, prefix: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for c in prefix.chars() {
            node = node.children.get(&c)?;
        }
        Some(node)
    }
}

impl Default for LanaiTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Extend<(K, V)> for LanaiTrie
where
    K: AsRef<str>,
    V: Into<String>,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for LanaiTrie
where
    K: AsRef<str>,
    V: Into<String>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut trie = LanaiTrie::new();
        trie.extend(iter);
        trie
    }
}
