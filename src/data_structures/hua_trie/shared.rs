// Copyright (c) 2025 Hua Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lock-guarded handle for a trie that keeps growing while it is queried.
//!
//! A finished [`HuaTrie`] can be shared directly behind an `Arc`. This handle
//! is for callers that interleave `add` with `split` across threads: writers
//! take the write lock, readers share the read lock.

use std::sync::Arc;

use parking_lot::RwLock;

use super::{HuaTrie, SplitOptions, Token};

/// Cloneable, thread-safe handle to a [`HuaTrie`].
#[derive(Debug, Clone, Default)]
pub struct SharedHuaTrie {
    inner: Arc<RwLock<HuaTrie>>,
}

impl SharedHuaTrie {
    /// Creates a handle with an empty vocabulary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an already built trie.
    pub fn from_trie(trie: HuaTrie) -> Self {
        Self {
            inner: Arc::new(RwLock::new(trie)),
        }
    }

    /// Adds a word under the write lock. See [`HuaTrie::add`].
    pub fn add<W: AsRef<str>>(&self, word: W) -> bool {
        self.inner.write().add(word)
    }

    /// Adds every word of `words` under a single write lock.
    ///
    /// Returns how many of them were new.
    pub fn add_all<I, W>(&self, words: I) -> usize
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let mut trie = self.inner.write();
        words.into_iter().filter(|word| trie.add(word)).count()
    }

    /// Splits `text` under the read lock. See [`HuaTrie::split`].
    pub fn split(&self, text: &str, options: &SplitOptions) -> Vec<Token> {
        self.inner.read().split(text, options)
    }

    /// Checks vocabulary membership under the read lock.
    pub fn contains<W: AsRef<str>>(&self, word: W) -> bool {
        self.inner.read().contains(word)
    }

    /// Number of distinct vocabulary words.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Checks if the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Clones the current trie out of the lock.
    pub fn snapshot(&self) -> HuaTrie {
        self.inner.read().clone()
    }
}
