use textshard_core::TextshardError;

use crate::config::validate_window;
use crate::{TailPolicy, TextSplitter};

/// Splits text by a sliding window over Unicode characters.
///
/// Same windowing as `TokenTextSplitter` but chunk boundaries are exact
/// character slices, with no encode/decode step. `chunk_size` and
/// `chunk_overlap` are measured in characters.
#[derive(Debug)]
pub struct CharacterTextSplitter {
    chunk_size: usize,
    chunk_overlap: usize,
    tail_policy: TailPolicy,
}

impl CharacterTextSplitter {
    /// Fails if `chunk_size` is zero or `chunk_overlap >= chunk_size`.
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Result<Self, TextshardError> {
        validate_window(chunk_size, chunk_overlap)?;
        Ok(Self {
            chunk_size,
            chunk_overlap,
            tail_policy: TailPolicy::default(),
        })
    }

    pub fn with_tail_policy(mut self, policy: TailPolicy) -> Self {
        self.tail_policy = policy;
        self
    }
}

impl TextSplitter for CharacterTextSplitter {
    fn split_text(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        if chars.is_empty() {
            return Vec::new();
        }

        let step = self.chunk_size.saturating_sub(self.chunk_overlap).max(1);
        let mut chunks = Vec::new();
        let mut start = 0;

        while start < chars.len() {
            let end = (start + self.chunk_size).min(chars.len());
            chunks.push(chars[start..end].iter().collect());

            if self.tail_policy == TailPolicy::StopAtEnd && start + self.chunk_size >= chars.len()
            {
                break;
            }
            start += step;
        }

        chunks
    }
}
