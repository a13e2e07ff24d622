use textshard_splitters::{OverlapPolicy, SentenceTextSplitter, TextSplitter};

#[test]
fn packs_sentences_under_character_budget() {
    let splitter = SentenceTextSplitter::new(20, 0).unwrap();
    let chunks = splitter.split_text("Hi there. How are you? I am fine.");
    assert_eq!(chunks, vec!["Hi there.", "How are you?", "I am fine."]);
}

#[test]
fn joins_sentences_that_fit_with_a_space() {
    let splitter = SentenceTextSplitter::new(25, 0).unwrap();
    let chunks = splitter.split_text("Hi there. How are you? I am fine.");
    assert_eq!(chunks, vec!["Hi there. How are you?", "I am fine."]);
}

#[test]
fn oversize_sentence_is_emitted_whole() {
    let splitter = SentenceTextSplitter::new(10, 0).unwrap();
    let chunks = splitter.split_text("Short. This sentence is very long indeed.");
    assert_eq!(
        chunks,
        vec!["Short.", "This sentence is very long indeed."]
    );
}

#[test]
fn text_without_terminal_punctuation_is_one_sentence() {
    let splitter = SentenceTextSplitter::new(5, 0).unwrap();
    let chunks = splitter.split_text("no terminal punctuation anywhere here");
    assert_eq!(chunks, vec!["no terminal punctuation anywhere here"]);
}

#[test]
fn blank_sentences_are_dropped() {
    let splitter = SentenceTextSplitter::new(200, 0).unwrap();
    let chunks = splitter.split_text("One.  \n\n   Two.    \t  ");
    assert_eq!(chunks, vec!["One. Two."]);
}

#[test]
fn whitespace_only_text_yields_no_chunks() {
    let splitter = SentenceTextSplitter::new(20, 0).unwrap();
    assert!(splitter.split_text("   \n\t  ").is_empty());
    assert!(splitter.split_text("").is_empty());
}

#[test]
fn overlap_prefixes_chunks_with_previous_tail() {
    let splitter = SentenceTextSplitter::new(12, 4).unwrap();
    let chunks = splitter.split_text("Aaaa. Bbbb. Cccc.");
    assert_eq!(chunks, vec!["Aaaa. Bbbb.", "bbb. Cccc."]);
}

#[test]
fn single_chunk_receives_no_overlap_prefix() {
    let splitter = SentenceTextSplitter::new(100, 30).unwrap();
    let chunks = splitter.split_text("Hi there. How are you?");
    assert_eq!(chunks, vec!["Hi there. How are you?"]);
}

#[test]
fn compounding_overlap_carries_earlier_prefixes_forward() {
    let text = "Aa. Bb. Cc.";

    let compounding = SentenceTextSplitter::new(6, 5).unwrap();
    assert_eq!(
        compounding.split_text(text),
        vec!["Aa.", "Aa. Bb.", ". Bb. Cc."]
    );

    let distinct = SentenceTextSplitter::new(6, 5)
        .unwrap()
        .with_overlap_policy(OverlapPolicy::Distinct);
    assert_eq!(
        distinct.split_text(text),
        vec!["Aa.", "Aa. Bb.", "Bb. Cc."]
    );
}

#[test]
fn chunks_never_cut_mid_sentence() {
    let text = "First point made. Second point follows! Third, as a question? Fourth wraps up.";
    let splitter = SentenceTextSplitter::new(30, 0).unwrap();
    let chunks = splitter.split_text(text);

    assert!(chunks.len() >= 2);
    for chunk in &chunks {
        assert!(
            chunk.ends_with('.') || chunk.ends_with('!') || chunk.ends_with('?'),
            "chunk cut mid-sentence: {chunk:?}"
        );
    }
}
