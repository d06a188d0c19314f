// Copyright (c) 2025 Hua Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the Hua Trie.
//!
//! Nodes live in the arena owned by [`HuaTrie`](super::HuaTrie) and refer to
//! each other by [`NodeId`]. A node never owns its parent; the parent link is
//! a plain index used for upward traversal.

use fnv::FnvHashMap;

/// Index of a node inside the trie arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The root node is always the first arena slot.
    pub const ROOT: NodeId = NodeId(0);

    /// Position of the node in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A node in the Hua Trie.
///
/// Each non-root node represents one character of a vocabulary word. Terminal
/// nodes mark the end of a complete word and may still have children.
#[derive(Debug, Clone)]
pub struct TrieNode {
    /// Character this node represents (`None` for the root)
    key: Option<char>,

    /// Node this one was created under (`None` for the root)
    parent: Option<NodeId>,

    /// Map of characters to child nodes
    children: FnvHashMap<char, NodeId>,

    /// Whether some vocabulary word ends at this node
    terminal: bool,
}

impl TrieNode {
    /// Creates the keyless root node.
    pub(crate) fn root() -> Self {
        Self {
            key: None,
            parent: None,
            children: FnvHashMap::default(),
            terminal: false,
        }
    }

    /// Creates a non-terminal node for `key` under `parent`.
    pub(crate) fn new(key: char, parent: NodeId) -> Self {
        Self {
            key: Some(key),
            parent: Some(parent),
            children: FnvHashMap::default(),
            terminal: false,
        }
    }

    /// Character this node represents, `None` for the root.
    pub fn key(&self) -> Option<char> {
        self.key
    }

    /// Node this one hangs under, `None` for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Whether a vocabulary word ends here.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Child for `key`, if any.
    #[inline]
    pub fn child(&self, key: char) -> Option<NodeId> {
        self.children.get(&key).copied()
    }

    /// Iterates over `(character, child)` pairs in no particular order.
    pub fn children(&self) -> impl Iterator<Item = (char, NodeId)> + '_ {
        self.children.iter().map(|(&c, &id)| (c, id))
    }

    /// Number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Marks the node terminal. Never unmarks.
    ///
    /// Returns `true` if the node was not terminal before.
    pub fn set_ending(&mut self) -> bool {
        let was_terminal = self.terminal;
        self.terminal = true;
        !was_terminal
    }

    /// Registers `child` under `key` unless a child for `key` already exists.
    ///
    /// Returns the child stored for `key` after the call, which is the
    /// pre-existing one when there was a collision.
    pub(crate) fn link_child(&mut self, key: char, child: NodeId) -> NodeId {
        *self.children.entry(key).or_insert(child)
    }
}
