use textshard_core::TextshardError;

use crate::config::validate_window;
use crate::{OverlapPolicy, TextSplitter};

/// Splits text at sentence boundaries, packing sentences into chunks bounded
/// by a character budget.
///
/// A sentence ends immediately after terminal punctuation (`.`, `!`, `?`)
/// followed by whitespace. Sentences are accumulated greedily, joined by a
/// single space, while the chunk stays within `chunk_size` characters. A
/// single sentence longer than `chunk_size` is emitted whole: sentence
/// integrity wins over the size bound.
#[derive(Debug)]
pub struct SentenceTextSplitter {
    chunk_size: usize,
    chunk_overlap: usize,
    overlap_policy: OverlapPolicy,
}

impl SentenceTextSplitter {
    /// Fails if `chunk_size` is zero or `chunk_overlap >= chunk_size`.
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Result<Self, TextshardError> {
        validate_window(chunk_size, chunk_overlap)?;
        Ok(Self {
            chunk_size,
            chunk_overlap,
            overlap_policy: OverlapPolicy::default(),
        })
    }

    pub fn with_overlap_policy(mut self, policy: OverlapPolicy) -> Self {
        self.overlap_policy = policy;
        self
    }

    fn split_sentences(text: &str) -> Vec<String> {
        let mut sentences = Vec::new();
        let mut current = String::new();
        let mut chars = text.chars().peekable();

        while let Some(c) = chars.next() {
            current.push(c);
            if matches!(c, '.' | '!' | '?')
                && chars.peek().is_some_and(|next| next.is_whitespace())
            {
                while chars.peek().is_some_and(|next| next.is_whitespace()) {
                    chars.next();
                }
                push_trimmed(&mut sentences, &mut current);
            }
        }
        push_trimmed(&mut sentences, &mut current);

        sentences
    }
}

/// Push the accumulated sentence if it has any non-whitespace content.
fn push_trimmed(sentences: &mut Vec<String>, current: &mut String) {
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
    current.clear();
}

/// The last `n` characters of `s` (the whole string if shorter).
fn tail_chars(s: &str, n: usize) -> &str {
    let skip = s.chars().count().saturating_sub(n);
    match s.char_indices().nth(skip) {
        Some((idx, _)) => &s[idx..],
        None => "",
    }
}

impl TextSplitter for SentenceTextSplitter {
    fn split_text(&self, text: &str) -> Vec<String> {
        let sentences = Self::split_sentences(text);

        let mut chunks: Vec<String> = Vec::new();
        let mut current = String::new();

        for sentence in sentences {
            if !current.is_empty() {
                let candidate_len = current.chars().count() + 1 + sentence.chars().count();
                if candidate_len > self.chunk_size {
                    chunks.push(std::mem::take(&mut current));
                }
            }
            if current.is_empty() {
                current = sentence;
            } else {
                current.push(' ');
                current.push_str(&sentence);
            }
        }
        if !current.is_empty() {
            chunks.push(current);
        }

        if self.chunk_overlap > 0 && chunks.len() > 1 {
            match self.overlap_policy {
                OverlapPolicy::Compounding => {
                    for i in 1..chunks.len() {
                        let prefix = tail_chars(&chunks[i - 1], self.chunk_overlap).to_string();
                        chunks[i] = format!("{prefix} {}", chunks[i]);
                    }
                }
                OverlapPolicy::Distinct => {
                    let originals = chunks.clone();
                    for i in 1..chunks.len() {
                        let prefix = tail_chars(&originals[i - 1], self.chunk_overlap);
                        chunks[i] = format!("{prefix} {}", chunks[i]);
                    }
                }
            }
        }

        chunks
    }
}
