//! Textshard — text chunking and document loading for RAG evaluation
//! pipelines.
//!
//! This crate re-exports the Textshard sub-crates for convenient
//! single-import usage. Enable features to control which modules are
//! available.
//!
//! # Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `default` | `splitters`, `loaders` |
//! | `splitters` | Token/Char/Sentence splitters, strategy config and factory |
//! | `loaders` | File/directory loaders and the extension registry |
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use textshard::splitters::{build_splitter, TextSplitter};
//!
//! let splitter = build_splitter("sentence", 200, 40)?;
//! let chunks = splitter.split_text(&corpus);
//! ```

/// Core types: Document, Loader, TextshardError. Always available.
pub use textshard_core as core;

/// Text splitters: Token, Char, Sentence, plus SplitterConfig and
/// build_splitter.
#[cfg(feature = "splitters")]
pub use textshard_splitters as splitters;

/// Document loaders: TextLoader, FileLoader, DirectoryLoader, LoaderRegistry.
#[cfg(feature = "loaders")]
pub use textshard_loaders as loaders;
