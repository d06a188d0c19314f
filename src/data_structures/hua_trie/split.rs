// Copyright (c) 2025 Hua Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Greedy longest-match tokenization over the Hua Trie.
//!
//! The scan keeps extending the current span while the trie has a child for
//! the next character. When the path breaks, the span is emitted either as a
//! recognized word (terminal node) or as an unknown candidate, and the
//! breaking character is retried once from the root.
//!
//! Unknown candidates go through a single predicate,
//! [`should_emit_unknown`], which collapses consecutive markers and drops
//! candidates listed in the ignore set.
//!
//! When the breaking character cannot start a new match either, the unknown
//! test runs a second time on the span that was just emitted, not on the
//! breaking character, and the character itself is discarded. This means an
//! ignored character right after a recognized word still yields a marker.

use fnv::FnvHashSet;

use super::{HuaTrie, NodeId};

/// A single output token of [`HuaTrie::split`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// A complete vocabulary word
    Word(String),

    /// An unrecognized span, rendered as the unknown marker
    Unknown,
}

impl Token {
    /// Renders the token, substituting `marker` for unknown spans.
    pub fn as_str<'a>(&'a self, marker: &'a str) -> &'a str {
        match self {
            Token::Word(word) => word,
            Token::Unknown => marker,
        }
    }

    /// Whether this is the unknown marker.
    pub fn is_unknown(&self) -> bool {
        matches!(self, Token::Unknown)
    }
}

/// Policy knobs for [`HuaTrie::split`].
#[derive(Debug, Clone, Default)]
pub struct SplitOptions {
    /// Value unknown spans render as; may be left unset
    unknown_marker: Option<String>,

    /// Unmatched candidates that produce no token at all
    ignore_tokens: FnvHashSet<String>,
}

impl SplitOptions {
    /// Options with no marker and an empty ignore set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value unknown spans render as.
    pub fn with_unknown_marker<S: Into<String>>(mut self, marker: S) -> Self {
        self.unknown_marker = Some(marker.into());
        self
    }

    /// Add one string to the ignore set.
    pub fn with_ignore_token<S: Into<String>>(mut self, token: S) -> Self {
        self.ignore_tokens.insert(token.into());
        self
    }

    /// Add every string of `tokens` to the ignore set.
    pub fn with_ignore_tokens<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore_tokens.extend(tokens.into_iter().map(Into::into));
        self
    }

    /// The configured unknown marker, if any.
    pub fn unknown_marker(&self) -> Option<&str> {
        self.unknown_marker.as_deref()
    }

    /// Whether `candidate` is in the ignore set.
    pub fn is_ignored(&self, candidate: &str) -> bool {
        self.ignore_tokens.contains(candidate)
    }

    /// Whether `token` renders the same as the unknown marker.
    ///
    /// A recognized word whose text equals the configured marker counts as a
    /// marker for collapsing purposes.
    fn renders_as_marker(&self, token: &Token) -> bool {
        match token {
            Token::Unknown => true,
            Token::Word(word) => self.unknown_marker.as_deref() == Some(word.as_str()),
        }
    }
}

/// Decides whether an unknown candidate produces a marker.
///
/// No marker is emitted when the last output token already renders as the
/// marker, or when `candidate` is in the ignore set.
pub fn should_emit_unknown(output: &[Token], candidate: &str, options: &SplitOptions) -> bool {
    let follows_marker = output
        .last()
        .is_some_and(|last| options.renders_as_marker(last));

    !follows_marker && !options.is_ignored(candidate)
}

fn push_unknown(output: &mut Vec<Token>, candidate: &str, options: &SplitOptions) {
    if should_emit_unknown(output, candidate, options) {
        output.push(Token::Unknown);
    }
}

impl HuaTrie {
    /// Emits the span ending at `node`: a word if terminal, else an unknown
    /// candidate.
    fn close_span(&self, node: NodeId, span: &str, options: &SplitOptions, output: &mut Vec<Token>) {
        if self.node(node).is_terminal() {
            output.push(Token::Word(span.to_string()));
        } else {
            push_unknown(output, span, options);
        }
    }

    /// Splits `text` into vocabulary words and unknown markers.
    ///
    /// Empty text yields no tokens. Recognized words are never collapsed;
    /// consecutive unknown spans produce a single [`Token::Unknown`].
    pub fn split(&self, text: &str, options: &SplitOptions) -> Vec<Token> {
        let mut output = Vec::new();
        if text.is_empty() {
            return output;
        }

        let root = self.root();
        let mut node = root;
        let mut span = String::new();

        for c in text.chars() {
            if let Some(next) = self.node(node).child(c) {
                span.push(c);
                node = next;
                continue;
            }

            self.close_span(node, &span, options, &mut output);

            match self.node(root).child(c) {
                Some(start) => {
                    span.clear();
                    span.push(c);
                    node = start;
                }
                None => {
                    // `c` is dropped; the stale span is tested again.
                    push_unknown(&mut output, &span, options);
                    span.clear();
                    node = root;
                }
            }
        }

        self.close_span(node, &span, options, &mut output);

        tracing::trace!(bytes = text.len(), tokens = output.len(), "split text");
        output
    }

    /// Splits `text` and renders every token as a string, using `marker` for
    /// unknown spans.
    pub fn split_to_strings<S>(&self, text: &str, marker: &str, ignore_tokens: &[S]) -> Vec<String>
    where
        S: AsRef<str>,
    {
        let options = SplitOptions::new()
            .with_unknown_marker(marker)
            .with_ignore_tokens(ignore_tokens.iter().map(|s| s.as_ref().to_string()));

        self.split(text, &options)
            .iter()
            .map(|token| token.as_str(marker).to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicate_empty_output() {
        let options = SplitOptions::new();
        assert!(should_emit_unknown(&[], "x", &options));
    }

    #[test]
    fn test_predicate_collapses_after_unknown() {
        let options = SplitOptions::new().with_unknown_marker("<unk>");
        assert!(!should_emit_unknown(&[Token::Unknown], "x", &options));
    }

    #[test]
    fn test_predicate_word_equal_to_marker_counts_as_marker() {
        let options = SplitOptions::new().with_unknown_marker("<unk>");
        let output = [Token::Word("<unk>".to_string())];
        assert!(!should_emit_unknown(&output, "x", &options));

        let unset = SplitOptions::new();
        assert!(should_emit_unknown(&output, "x", &unset));
    }

    #[test]
    fn test_predicate_ignored_candidate() {
        let options = SplitOptions::new().with_ignore_token(" ");
        let output = [Token::Word("hello".to_string())];
        assert!(!should_emit_unknown(&output, " ", &options));
        assert!(should_emit_unknown(&output, "hello", &options));
    }

    #[test]
    fn test_token_rendering() {
        assert_eq!(Token::Word("cat".to_string()).as_str("<unk>"), "cat");
        assert_eq!(Token::Unknown.as_str("<unk>"), "<unk>");
        assert!(Token::Unknown.is_unknown());
        assert!(!Token::Word("cat".to_string()).is_unknown());
    }

    #[test]
    fn test_options_builder() {
        let options = SplitOptions::new()
            .with_unknown_marker("?")
            .with_ignore_tokens([" ", "\t"]);
        assert_eq!(options.unknown_marker(), Some("?"));
        assert!(options.is_ignored(" "));
        assert!(options.is_ignored("\t"));
        assert!(!options.is_ignored("x"));
    }
}
