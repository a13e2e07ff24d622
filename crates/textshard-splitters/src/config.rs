use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use textshard_core::TextshardError;

use crate::{CharacterTextSplitter, SentenceTextSplitter, TextSplitter, TokenTextSplitter};

// ---------------------------------------------------------------------------
// Strategy
// ---------------------------------------------------------------------------

/// Which splitter implementation to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SplitterStrategy {
    /// Sliding window over BPE tokens.
    #[default]
    Token,
    /// Sliding window over Unicode characters.
    Char,
    /// Sentence-boundary-aware packing under a character budget.
    Sentence,
}

impl FromStr for SplitterStrategy {
    type Err = TextshardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "token" => Ok(Self::Token),
            "char" => Ok(Self::Char),
            "sentence" => Ok(Self::Sentence),
            other => Err(TextshardError::UnsupportedStrategy(other.to_string())),
        }
    }
}

impl fmt::Display for SplitterStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Token => "token",
            Self::Char => "char",
            Self::Sentence => "sentence",
        };
        write!(f, "{name}")
    }
}

// ---------------------------------------------------------------------------
// Policies
// ---------------------------------------------------------------------------

/// How the sliding-window splitters treat the final stretch of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TailPolicy {
    /// Stop after the first window that reaches the end of the input. The
    /// trailing short window, whose content is fully contained in the
    /// previous chunk, is never emitted.
    #[default]
    StopAtEnd,
    /// Keep emitting windows until the start index passes the end of the
    /// input, including trailing windows contained in earlier ones.
    AllWindows,
}

/// Where the sentence splitter takes each overlap prefix from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OverlapPolicy {
    /// From the previous chunk as written to the output, including any
    /// prefix it already received. Prefixes accumulate across runs of
    /// chunks shorter than the overlap.
    #[default]
    Compounding,
    /// From the previous chunk as originally accumulated, before any
    /// prefixing.
    Distinct,
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Configuration for building a splitter, embeddable in a pipeline config.
///
/// `chunk_size` is in tokens for the token strategy and characters for the
/// other two; `chunk_overlap` uses the same unit and must stay below
/// `chunk_size`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitterConfig {
    #[serde(default)]
    pub strategy: SplitterStrategy,
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
    #[serde(default = "default_chunk_overlap")]
    pub chunk_overlap: usize,
    #[serde(default)]
    pub tail_policy: TailPolicy,
    #[serde(default)]
    pub overlap_policy: OverlapPolicy,
}

fn default_chunk_size() -> usize {
    300
}

fn default_chunk_overlap() -> usize {
    50
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self::new(SplitterStrategy::default(), default_chunk_size(), default_chunk_overlap())
    }
}

impl SplitterConfig {
    pub fn new(strategy: SplitterStrategy, chunk_size: usize, chunk_overlap: usize) -> Self {
        Self {
            strategy,
            chunk_size,
            chunk_overlap,
            tail_policy: TailPolicy::default(),
            overlap_policy: OverlapPolicy::default(),
        }
    }

    pub fn with_tail_policy(mut self, policy: TailPolicy) -> Self {
        self.tail_policy = policy;
        self
    }

    pub fn with_overlap_policy(mut self, policy: OverlapPolicy) -> Self {
        self.overlap_policy = policy;
        self
    }

    /// Check the window invariants without constructing anything.
    pub fn validate(&self) -> Result<(), TextshardError> {
        validate_window(self.chunk_size, self.chunk_overlap)
    }

    /// Construct the configured splitter variant.
    pub fn build(&self) -> Result<Splitter, TextshardError> {
        self.validate()?;
        Ok(match self.strategy {
            SplitterStrategy::Token => Splitter::Token(
                TokenTextSplitter::new(self.chunk_size, self.chunk_overlap)?
                    .with_tail_policy(self.tail_policy),
            ),
            SplitterStrategy::Char => Splitter::Char(
                CharacterTextSplitter::new(self.chunk_size, self.chunk_overlap)?
                    .with_tail_policy(self.tail_policy),
            ),
            SplitterStrategy::Sentence => Splitter::Sentence(
                SentenceTextSplitter::new(self.chunk_size, self.chunk_overlap)?
                    .with_overlap_policy(self.overlap_policy),
            ),
        })
    }
}

pub(crate) fn validate_window(chunk_size: usize, chunk_overlap: usize) -> Result<(), TextshardError> {
    if chunk_size == 0 {
        return Err(TextshardError::SplitterConfig(
            "chunk_size must be positive".to_string(),
        ));
    }
    if chunk_overlap >= chunk_size {
        return Err(TextshardError::SplitterConfig(format!(
            "chunk_overlap ({chunk_overlap}) must be smaller than chunk_size ({chunk_size})"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Factory
// ---------------------------------------------------------------------------

/// Tagged dispatch over the three splitter implementations.
#[derive(Debug)]
pub enum Splitter {
    Token(TokenTextSplitter),
    Char(CharacterTextSplitter),
    Sentence(SentenceTextSplitter),
}

impl TextSplitter for Splitter {
    fn split_text(&self, text: &str) -> Vec<String> {
        match self {
            Splitter::Token(inner) => inner.split_text(text),
            Splitter::Char(inner) => inner.split_text(text),
            Splitter::Sentence(inner) => inner.split_text(text),
        }
    }
}

/// Build a splitter from a strategy name.
///
/// An unrecognized name fails with `UnsupportedStrategy` and invalid window
/// parameters with `SplitterConfig`, before any splitter is constructed.
pub fn build_splitter(
    strategy: &str,
    chunk_size: usize,
    chunk_overlap: usize,
) -> Result<Splitter, TextshardError> {
    let strategy: SplitterStrategy = strategy.parse()?;
    SplitterConfig::new(strategy, chunk_size, chunk_overlap).build()
}
