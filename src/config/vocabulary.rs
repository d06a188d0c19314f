//! Vocabulary configuration module.
//!
//! This module defines where the vocabulary word list lives and how its
//! lines are read.

use super::ConfigResult;
use super::Validate;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Vocabulary source configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct VocabularyConfig {
    /// Path to a newline-delimited word list
    pub path: Option<PathBuf>,

    /// Whether to strip leading and trailing whitespace from each line
    pub trim_whitespace: bool,

    /// Lines starting with this prefix are skipped
    pub comment_prefix: Option<String>,
}

impl Validate for VocabularyConfig {
    fn validate(&self) -> ConfigResult<()> {
        if let Some(path) = &self.path {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::ValidationError(
                    "vocabulary path cannot be empty".to_string(),
                ));
            }
        }

        if self.comment_prefix.as_deref() == Some("") {
            return Err(ConfigError::ValidationError(
                "comment_prefix cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
