// Copyright (c) 2025 Hua Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Hua Trie implementation.
//!
//! A character-keyed prefix tree holding a tokenizer vocabulary. Words are
//! inserted once during setup and the tree is then used to split arbitrary
//! text into recognized words and unknown-span markers.
//!
//! # Example
//!
//! ```
//! use hua_lib::data_structures::hua_trie::{HuaTrie, SplitOptions, Token};
//!
//! let mut trie = HuaTrie::new();
//! trie.add("car");
//! trie.add("cart");
//!
//! let options = SplitOptions::new().with_unknown_marker("<unk>");
//! let tokens = trie.split("cart", &options);
//! assert_eq!(tokens, vec![Token::Word("cart".to_string())]);
//!
//! let strings = trie.split_to_strings("cars", "<unk>", &[] as &[&str]);
//! assert_eq!(strings, vec!["car".to_string(), "<unk>".to_string()]);
//! ```
//!
//! # Ownership
//!
//! All nodes live in a single arena owned by the trie and are addressed by
//! [`NodeId`]. Parent links are indices, so the structure has a single owner
//! and no reference cycles.

mod node;
mod shared;
mod split;

#[cfg(test)]
mod tests;

pub use node::{NodeId, TrieNode};
pub use shared::SharedHuaTrie;
pub use split::{should_emit_unknown, SplitOptions, Token};

/// Hua Trie: the vocabulary index used by the tokenizer.
///
/// Key features:
/// * Shared prefixes share nodes
/// * Insertion is idempotent and order independent
/// * Read-only `split`, safe to call from many threads at once
#[derive(Debug, Clone)]
pub struct HuaTrie {
    /// Arena of nodes; slot 0 is the root
    nodes: Vec<TrieNode>,

    /// Number of distinct words inserted
    word_count: usize,
}

impl HuaTrie {
    /// Creates a new trie holding only the root node.
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::root()],
            word_count: 0,
        }
    }

    /// Root node id.
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Borrows the node behind `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not produced by this trie.
    #[inline]
    pub fn node(&self, id: NodeId) -> &TrieNode {
        &self.nodes[id.0]
    }

    /// Returns the child of `parent` keyed by `key`, creating it if absent.
    ///
    /// An existing child is never replaced.
    pub fn add_child(&mut self, parent: NodeId, key: char) -> NodeId {
        if let Some(existing) = self.nodes[parent.0].child(key) {
            return existing;
        }

        let id = NodeId(self.nodes.len());
        self.nodes.push(TrieNode::new(key, parent));
        self.nodes[parent.0].link_child(key, id)
    }

    /// Adds a word to the vocabulary.
    ///
    /// An empty word is a no-op: the root is never marked terminal.
    ///
    /// # Returns
    ///
    /// `true` if the word was not in the vocabulary yet, `false` otherwise.
    pub fn add<W>(&mut self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        let word = word.as_ref();
        if word.is_empty() {
            return false;
        }

        let mut node = NodeId::ROOT;
        for c in word.chars() {
            node = self.add_child(node, c);
        }

        let is_new = self.nodes[node.0].set_ending();
        if is_new {
            self.word_count += 1;
            tracing::trace!(word, "added vocabulary word");
        }
        is_new
    }

    /// Walks `path` from the root, returning the node reached.
    fn descend(&self, path: &str) -> Option<NodeId> {
        path.chars()
            .try_fold(NodeId::ROOT, |node, c| self.nodes[node.0].child(c))
    }

    /// Checks whether `word` is a vocabulary word.
    pub fn contains<W>(&self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        let word = word.as_ref();
        !word.is_empty()
            && self
                .descend(word)
                .is_some_and(|id| self.nodes[id.0].is_terminal())
    }

    /// Finds every vocabulary word starting with `prefix`, sorted.
    ///
    /// An empty prefix lists the whole vocabulary.
    pub fn find_by_prefix<P>(&self, prefix: P) -> Vec<String>
    where
        P: AsRef<str>,
    {
        let prefix = prefix.as_ref();
        let Some(start) = self.descend(prefix) else {
            return Vec::new();
        };

        let mut result = Vec::new();
        let mut buffer = prefix.to_string();
        self.collect_words(start, &mut buffer, &mut result);
        result.sort_unstable();
        result
    }

    fn collect_words(&self, id: NodeId, buffer: &mut String, result: &mut Vec<String>) {
        let node = &self.nodes[id.0];
        if node.is_terminal() {
            result.push(buffer.clone());
        }

        for (c, child) in node.children() {
            buffer.push(c);
            self.collect_words(child, buffer, result);
            buffer.pop();
        }
    }

    /// Rebuilds the characters leading from the root to `id` by following
    /// parent links upward.
    pub fn word_at(&self, id: NodeId) -> String {
        let mut chars = Vec::new();
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = &self.nodes[node_id.0];
            chars.extend(node.key());
            current = node.parent();
        }
        chars.iter().rev().collect()
    }

    /// Number of distinct vocabulary words.
    pub fn len(&self) -> usize {
        self.word_count
    }

    /// Checks if the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

impl Default for HuaTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: AsRef<str>> Extend<W> for HuaTrie {
    fn extend<I: IntoIterator<Item = W>>(&mut self, iter: I) {
        for word in iter {
            self.add(word);
        }
    }
}

impl<W: AsRef<str>> FromIterator<W> for HuaTrie {
    fn from_iter<I: IntoIterator<Item = W>>(iter: I) -> Self {
        let mut trie = Self::new();
        trie.extend(iter);
        trie
    }
}
