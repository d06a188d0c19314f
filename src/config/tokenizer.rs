//! Tokenizer configuration module.
//!
//! This module defines the split policy applied to every tokenized text:
//! the unknown marker and the ignore list.

use super::ConfigResult;
use super::Validate;
use crate::data_structures::hua_trie::SplitOptions;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Default value rendered for unknown spans.
pub const DEFAULT_UNKNOWN_MARKER: &str = "<unk>";

/// Tokenizer configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TokenizerConfig {
    /// Token emitted for unrecognized spans
    pub unknown_marker: String,

    /// Unmatched spans that are dropped instead of replaced by the marker
    pub ignore_tokens: Vec<String>,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            unknown_marker: DEFAULT_UNKNOWN_MARKER.to_string(),
            ignore_tokens: Vec::new(),
        }
    }
}

impl TokenizerConfig {
    /// Builds the split options described by this configuration.
    pub fn split_options(&self) -> SplitOptions {
        SplitOptions::new()
            .with_unknown_marker(self.unknown_marker.as_str())
            .with_ignore_tokens(self.ignore_tokens.iter().cloned())
    }
}

impl Validate for TokenizerConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.unknown_marker.is_empty() {
            return Err(ConfigError::ValidationError(
                "unknown_marker cannot be empty".to_string(),
            ));
        }

        if self.ignore_tokens.iter().any(String::is_empty) {
            return Err(ConfigError::ValidationError(
                "ignore_tokens cannot contain empty strings".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_options_from_config() {
        let config = TokenizerConfig {
            unknown_marker: "?".to_string(),
            ignore_tokens: vec![" ".to_string()],
        };

        let options = config.split_options();
        assert_eq!(options.unknown_marker(), Some("?"));
        assert!(options.is_ignored(" "));
        assert!(!options.is_ignored("?"));
    }
}
