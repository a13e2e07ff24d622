mod directory_loader;
mod file_loader;
mod registry;
mod text_loader;

pub use directory_loader::DirectoryLoader;
pub use file_loader::FileLoader;
pub use registry::{default_registry, LoaderRegistry, PathLoader, PlainTextLoader};
pub use text_loader::TextLoader;

// Re-export Document and Loader from core for backward compatibility
pub use textshard_core::{Document, Loader};
