//! Vocabulary loading.
//!
//! Reads a newline-delimited word list and feeds every word into a
//! [`HuaTrie`]. Lines are taken verbatim apart from a trailing `\r`; blank
//! lines are skipped, and optionally comment lines and surrounding
//! whitespace.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::config::vocabulary::VocabularyConfig;
use crate::data_structures::hua_trie::HuaTrie;
use crate::error::vocabulary::VocabularyError;

/// Result type for vocabulary operations.
pub type VocabularyResult<T> = Result<T, VocabularyError>;

/// Counters collected while loading a word list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Lines read from the source
    pub lines: usize,
    /// Words that were new to the trie
    pub added: usize,
    /// Words that were already present
    pub duplicates: usize,
    /// Blank or comment lines
    pub skipped: usize,
}

/// Reads word lists into a trie.
#[derive(Debug, Clone, Default)]
pub struct VocabularyLoader {
    trim_whitespace: bool,
    comment_prefix: Option<String>,
}

impl VocabularyLoader {
    /// Loader that keeps lines verbatim and has no comment syntax.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loader configured from the `vocabulary` configuration section.
    pub fn from_config(config: &VocabularyConfig) -> Self {
        Self {
            trim_whitespace: config.trim_whitespace,
            comment_prefix: config.comment_prefix.clone(),
        }
    }

    /// Strip leading and trailing whitespace from every line.
    pub fn with_trim_whitespace(mut self, trim: bool) -> Self {
        self.trim_whitespace = trim;
        self
    }

    /// Skip lines starting with `prefix`.
    pub fn with_comment_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.comment_prefix = Some(prefix.into());
        self
    }

    /// Extracts the word carried by `line`, or `None` for lines to skip.
    pub fn parse_line<'a>(&self, line: &'a str) -> Option<&'a str> {
        let line = line.strip_suffix('\r').unwrap_or(line);
        let line = if self.trim_whitespace { line.trim() } else { line };

        if line.is_empty() {
            return None;
        }
        if let Some(prefix) = &self.comment_prefix {
            if line.starts_with(prefix.as_str()) {
                return None;
            }
        }
        Some(line)
    }

    /// Adds every word read from `reader` to `trie`.
    pub fn load_into<R: BufRead>(&self, reader: R, trie: &mut HuaTrie) -> VocabularyResult<LoadStats> {
        let mut stats = LoadStats::default();

        for line in reader.lines() {
            let line = line?;
            stats.lines += 1;

            let Some(word) = self.parse_line(&line) else {
                stats.skipped += 1;
                continue;
            };

            if trie.add(word) {
                stats.added += 1;
            } else {
                stats.duplicates += 1;
            }
        }

        Ok(stats)
    }

    /// Builds a trie from the word list at `path`.
    ///
    /// A file that yields no word at all is rejected.
    pub fn load_file<P: AsRef<Path>>(&self, path: P) -> VocabularyResult<HuaTrie> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(VocabularyError::FileNotFound(path.to_path_buf()));
        }

        let read_error = |source| VocabularyError::Read {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(read_error)?;
        let mut trie = HuaTrie::new();
        let stats = match self.load_into(BufReader::new(file), &mut trie) {
            Ok(stats) => stats,
            Err(VocabularyError::Io(source)) => return Err(read_error(source)),
            Err(e) => return Err(e),
        };

        if trie.is_empty() {
            return Err(VocabularyError::Empty(path.display().to_string()));
        }

        tracing::info!(
            path = %path.display(),
            words = stats.added,
            duplicates = stats.duplicates,
            skipped = stats.skipped,
            nodes = trie.node_count(),
            "vocabulary loaded"
        );
        Ok(trie)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_line_verbatim() {
        let loader = VocabularyLoader::new();
        assert_eq!(loader.parse_line("cat"), Some("cat"));
        assert_eq!(loader.parse_line("cat\r"), Some("cat"));
        assert_eq!(loader.parse_line(" cat "), Some(" cat "));
        assert_eq!(loader.parse_line("# cat"), Some("# cat"));
        assert_eq!(loader.parse_line(""), None);
    }

    #[test]
    fn test_parse_line_trim_and_comments() {
        let loader = VocabularyLoader::new()
            .with_trim_whitespace(true)
            .with_comment_prefix("#");
        assert_eq!(loader.parse_line("  cat \t"), Some("cat"));
        assert_eq!(loader.parse_line("   "), None);
        assert_eq!(loader.parse_line("#comment"), None);
        assert_eq!(loader.parse_line("  # indented comment"), None);
    }

    #[test]
    fn test_load_into_counts() {
        let loader = VocabularyLoader::new().with_comment_prefix("//");
        let input = Cursor::new("cat\ndog\n\ncat\n// note\r\nbird\r\n");
        let mut trie = HuaTrie::new();

        let stats = loader.load_into(input, &mut trie).unwrap();
        assert_eq!(
            stats,
            LoadStats {
                lines: 6,
                added: 3,
                duplicates: 1,
                skipped: 2,
            }
        );
        assert!(trie.contains("bird"));
        assert!(!trie.contains("bird\r"));
    }
}
