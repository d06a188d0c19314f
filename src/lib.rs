//! Hua Tokenizer Library
//!
//! This library splits text into tokens drawn from a fixed vocabulary. Each
//! token is either a maximal known word or an unknown marker standing for an
//! unrecognized span.
//!
//! # Architecture
//!
//! - [`data_structures::hua_trie`]: the prefix tree and the greedy scan
//! - [`vocabulary`]: word list loading
//! - [`config`]: layered configuration with validation
//! - [`error`]: error types and reporting
//!
//! # Example
//!
//! ```
//! use hua_lib::data_structures::HuaTrie;
//!
//! let trie: HuaTrie = ["cat", "dog"].into_iter().collect();
//! assert_eq!(trie.split_to_strings("catdog", "<unk>", &[] as &[&str]), vec!["cat", "dog"]);
//! ```

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod error;
pub mod vocabulary;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for the Hua tokenizer.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
