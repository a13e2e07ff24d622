use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use textshard_core::TextshardError;

use crate::Document;

/// Reads one file of a known format into plain text.
///
/// Implementations are registered per extension in a `LoaderRegistry`; the
/// registry owns existence checks and extension dispatch, so an
/// implementation only has to turn a present file into a string.
#[async_trait]
pub trait PathLoader: Send + Sync {
    async fn load_path(&self, path: &Path) -> Result<String, TextshardError>;
}

/// Reads the file as UTF-8 text, unchanged. Handles txt and md.
pub struct PlainTextLoader;

#[async_trait]
impl PathLoader for PlainTextLoader {
    async fn load_path(&self, path: &Path) -> Result<String, TextshardError> {
        tokio::fs::read_to_string(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TextshardError::FileNotFound(path.display().to_string())
            } else {
                TextshardError::Loader(format!("cannot read {}: {e}", path.display()))
            }
        })
    }
}

/// Maps lowercase file extensions to loaders and dispatches by path.
///
/// A missing file fails with `FileNotFound` and an unregistered extension
/// with `UnsupportedFileType`, before any file content is read.
#[derive(Default)]
pub struct LoaderRegistry {
    loaders: HashMap<String, Arc<dyn PathLoader>>,
}

impl LoaderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, extension: impl Into<String>, loader: Arc<dyn PathLoader>) {
        self.loaders.insert(extension.into().to_lowercase(), loader);
    }

    /// Load one file into a Document, dispatching on its extension.
    pub async fn load_path(&self, path: impl AsRef<Path>) -> Result<Document, TextshardError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(TextshardError::FileNotFound(path.display().to_string()));
        }

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        let loader = self.loaders.get(&extension).ok_or_else(|| {
            TextshardError::UnsupportedFileType(if extension.is_empty() {
                path.display().to_string()
            } else {
                extension.clone()
            })
        })?;

        tracing::debug!(path = %path.display(), extension = %extension, "dispatching loader");
        let content = loader.load_path(path).await?;

        let mut metadata = HashMap::new();
        metadata.insert(
            "source".to_string(),
            Value::String(path.display().to_string()),
        );

        Ok(Document::with_metadata(
            path.display().to_string(),
            content,
            metadata,
        ))
    }
}

/// Registry with the stock mappings: `txt` and `md` as plain text.
///
/// Binary document formats (pdf, docx) are intentionally unmapped and fail
/// with `UnsupportedFileType` until a parser for them is registered.
pub fn default_registry() -> LoaderRegistry {
    let mut registry = LoaderRegistry::new();
    let plain = Arc::new(PlainTextLoader);
    registry.register("txt", plain.clone());
    registry.register("md", plain);
    registry
}
