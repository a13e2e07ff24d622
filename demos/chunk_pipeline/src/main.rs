use textshard::core::TextshardError;
use textshard::loaders::{default_registry, Loader, TextLoader};
use textshard::splitters::{build_splitter, TextSplitter};

const SAMPLE: &str = "Rust is a systems programming language focused on safety, \
speed, and concurrency. It achieves memory safety without garbage collection! \
Evaluation pipelines chunk corpora like this one before generating questions. \
Does each chunk stay within its configured budget? The splitter guarantees it.";

/// Usage: chunk_pipeline [FILE] [STRATEGY] [CHUNK_SIZE] [OVERLAP]
///
/// With no FILE, splits a built-in sample text.
#[tokio::main]
async fn main() -> Result<(), TextshardError> {
    tracing_subscriber::fmt().init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let strategy = args.get(1).map(String::as_str).unwrap_or("sentence");
    let chunk_size = parse_arg(&args, 2, 120)?;
    let overlap = parse_arg(&args, 3, 20)?;

    // --- Load ---
    println!("=== Loading ===");
    let docs = match args.first() {
        Some(path) => vec![default_registry().load_path(path).await?],
        None => TextLoader::new("sample", SAMPLE).load().await?,
    };
    println!("Loaded {} document(s)", docs.len());

    // --- Split ---
    println!("\n=== Splitting ({strategy}, size={chunk_size}, overlap={overlap}) ===");
    let splitter = build_splitter(strategy, chunk_size, overlap)?;
    let chunks = splitter.split_documents(docs);
    tracing::info!(strategy, chunk_size, overlap, chunks = chunks.len(), "split complete");

    println!("Split into {} chunks", chunks.len());
    for chunk in &chunks {
        println!(
            "  {} ({} chars): \"{}...\"",
            chunk.id,
            chunk.content.chars().count(),
            chunk.content.chars().take(48).collect::<String>()
        );
    }

    Ok(())
}

fn parse_arg(args: &[String], index: usize, default: usize) -> Result<usize, TextshardError> {
    match args.get(index) {
        Some(raw) => raw.parse().map_err(|_| {
            TextshardError::SplitterConfig(format!("not a number: {raw}"))
        }),
        None => Ok(default),
    }
}
