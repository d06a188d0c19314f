// Copyright (c) 2025 Hua Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Unit, table-driven and property-based tests for the Hua Trie.


use super::HuaTrie;

/// Marker used by the string-level tests.
pub(super) const UNK: &str = "<unk>";

/// Builds a trie holding `words`.
pub(super) fn trie_of(words: &[&str]) -> HuaTrie {
    words.iter().collect()
}

/// Splits `text` and renders the result with [`UNK`].
pub(super) fn split_str(trie: &HuaTrie, text: &str, ignore: &[&str]) -> Vec<String> {
    trie.split_to_strings(text, UNK, ignore)
}
