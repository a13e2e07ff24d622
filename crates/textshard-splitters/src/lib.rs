mod character;
mod config;
mod sentence;
mod token;
mod vocabulary;

pub use character::CharacterTextSplitter;
pub use config::{
    build_splitter, OverlapPolicy, Splitter, SplitterConfig, SplitterStrategy, TailPolicy,
};
pub use sentence::SentenceTextSplitter;
pub use token::TokenTextSplitter;
pub use vocabulary::cl100k_vocabulary;

// Re-export Document from core so splitter users need only this crate.
pub use textshard_core::Document;

/// Trait for splitting text into chunks.
pub trait TextSplitter: Send + Sync {
    /// Split a string into chunks.
    fn split_text(&self, text: &str) -> Vec<String>;

    /// Split documents by splitting each document's content and producing
    /// new documents for each chunk. Metadata is preserved on each chunk.
    fn split_documents(&self, docs: Vec<Document>) -> Vec<Document> {
        let mut result = Vec::new();
        for doc in docs {
            let chunks = self.split_text(&doc.content);
            for (i, chunk) in chunks.into_iter().enumerate() {
                let mut metadata = doc.metadata.clone();
                metadata.insert(
                    "chunk_index".to_string(),
                    serde_json::Value::Number(i.into()),
                );
                result.push(Document::with_metadata(
                    format!("{}-chunk-{i}", doc.id),
                    chunk,
                    metadata,
                ));
            }
        }
        result
    }
}
