//! Data structures for the Hua tokenizer.
//!
//! This module contains the vocabulary index and its tokenization scan.
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - Single-owner node storage, no reference counting inside the tree
//! - Read-only queries that are safe to run in parallel

pub mod hua_trie;

// Re-export common data structures
pub use hua_trie::{HuaTrie, SharedHuaTrie, SplitOptions, Token};
