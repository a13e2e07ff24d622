use std::sync::Arc;

use textshard_core::TextshardError;
use tiktoken_rs::CoreBPE;

use crate::config::validate_window;
use crate::vocabulary::cl100k_vocabulary;
use crate::{TailPolicy, TextSplitter};

/// Splits text by a sliding window over BPE tokens.
///
/// The input is encoded with a fixed subword vocabulary (cl100k by default),
/// windowed `chunk_size` tokens at a time advancing by
/// `chunk_size - chunk_overlap`, and each window is decoded back to text.
/// `chunk_size` and `chunk_overlap` are measured in tokens.
pub struct TokenTextSplitter {
    vocabulary: Arc<CoreBPE>,
    chunk_size: usize,
    chunk_overlap: usize,
    tail_policy: TailPolicy,
}

impl TokenTextSplitter {
    /// Create a token splitter over the shared cl100k vocabulary.
    ///
    /// Fails if `chunk_size` is zero or `chunk_overlap >= chunk_size`.
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Result<Self, TextshardError> {
        validate_window(chunk_size, chunk_overlap)?;
        Ok(Self {
            vocabulary: cl100k_vocabulary()?,
            chunk_size,
            chunk_overlap,
            tail_policy: TailPolicy::default(),
        })
    }

    /// Replace the vocabulary, e.g. with one matching a different model family.
    pub fn with_vocabulary(mut self, vocabulary: Arc<CoreBPE>) -> Self {
        self.vocabulary = vocabulary;
        self
    }

    pub fn with_tail_policy(mut self, policy: TailPolicy) -> Self {
        self.tail_policy = policy;
        self
    }
}

impl std::fmt::Debug for TokenTextSplitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenTextSplitter")
            .field("chunk_size", &self.chunk_size)
            .field("chunk_overlap", &self.chunk_overlap)
            .field("tail_policy", &self.tail_policy)
            .finish_non_exhaustive()
    }
}

impl TextSplitter for TokenTextSplitter {
    fn split_text(&self, text: &str) -> Vec<String> {
        let tokens = self.vocabulary.encode_ordinary(text);
        if tokens.is_empty() {
            return Vec::new();
        }

        let step = self.chunk_size.saturating_sub(self.chunk_overlap).max(1);
        let mut chunks = Vec::new();
        let mut start = 0;

        while start < tokens.len() {
            let end = (start + self.chunk_size).min(tokens.len());
            let window = &tokens[start..end];

            let piece = match self.vocabulary.decode(window.to_vec()) {
                Ok(piece) => piece,
                // A window boundary can cut a multi-byte character across two
                // tokens; decode per token and substitute replacement
                // characters for the dangling bytes.
                Err(_) => {
                    let mut bytes = Vec::new();
                    for piece in self.vocabulary._decode_native_and_split(window.to_vec()) {
                        bytes.extend(piece);
                    }
                    String::from_utf8_lossy(&bytes).into_owned()
                }
            };
            chunks.push(piece);

            if self.tail_policy == TailPolicy::StopAtEnd && start + self.chunk_size >= tokens.len()
            {
                break;
            }
            start += step;
        }

        chunks
    }
}
