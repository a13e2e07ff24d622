use async_trait::async_trait;
use textshard_core::TextshardError;

use crate::{Document, Loader};

/// Wraps an in-memory string as a single-document source.
///
/// Useful as a test seam and for feeding already-loaded text into a
/// splitting pipeline.
pub struct TextLoader {
    id: String,
    content: String,
}

impl TextLoader {
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
        }
    }
}

#[async_trait]
impl Loader for TextLoader {
    async fn load(&self) -> Result<Vec<Document>, TextshardError> {
        Ok(vec![Document::new(self.id.clone(), self.content.clone())])
    }
}
