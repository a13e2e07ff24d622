use std::sync::{Arc, OnceLock};

use textshard_core::TextshardError;
use tiktoken_rs::{cl100k_base, CoreBPE};

static CL100K: OnceLock<Result<Arc<CoreBPE>, String>> = OnceLock::new();

/// The shared cl100k BPE vocabulary.
///
/// Loaded from the embedded encoder data once per process on first use and
/// read-only afterwards. Every `TokenTextSplitter` holds an `Arc` to the same
/// instance unless an alternate vocabulary is injected.
pub fn cl100k_vocabulary() -> Result<Arc<CoreBPE>, TextshardError> {
    CL100K
        .get_or_init(|| cl100k_base().map(Arc::new).map_err(|e| e.to_string()))
        .clone()
        .map_err(TextshardError::Vocabulary)
}
