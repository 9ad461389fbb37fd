//! Lanai Prefix Trie Library
//!
//! This library provides an in-memory prefix-indexed associative
//! structure: inserting a key-value pair records the value under every
//! prefix of the key, and any prefix can later be queried for all values
//! accumulated beneath it, with or without deduplication.
//!
//! # Design
//!
//! The trie is designed with the following principles in mind:
//! - Code point branching, so multi-byte characters behave correctly
//! - Growth-only node graph with strictly hierarchical ownership
//! - Total operations: no input can make an operation fail
//! - Owned results only, never references into the node graph
//!
//! # Example
//!
//! ```
//! use lanai_trie::LanaiTrie;
//!
//! let mut trie = LanaiTrie::new();
//! trie.insert("piano", "keyboard");
//! trie.insert("piccolo", "woodwind");
//! trie.insert("pan flute", "woodwind");
//!
//! assert_eq!(trie.lookup("p"), vec!["keyboard", "woodwind", "woodwind"]);
//! assert_eq!(trie.lookup_unique("p"), vec!["keyboard", "woodwind"]);
//! assert_eq!(trie.lookup("pia"), vec!["keyboard"]);
//! assert!(trie.lookup("xyz").is_empty());
//! ```

pub mod trie;

pub use trie::{LanaiTrie, TrieNode};

/// Version information for the Lanai Prefix Trie library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
