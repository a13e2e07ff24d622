use textshard_splitters::{cl100k_vocabulary, TailPolicy, TextSplitter, TokenTextSplitter};

#[test]
fn empty_text_yields_no_chunks() {
    let splitter = TokenTextSplitter::new(100, 0).unwrap();
    assert!(splitter.split_text("").is_empty());
}

#[test]
fn short_text_decodes_to_single_whole_chunk() {
    let splitter = TokenTextSplitter::new(100, 10).unwrap();
    let chunks = splitter.split_text("hello world");
    assert_eq!(chunks, vec!["hello world"]);
}

#[test]
fn no_overlap_concat_reconstructs_input() {
    let text = "the quick brown fox jumps over the lazy dog ".repeat(6);
    let splitter = TokenTextSplitter::new(8, 0).unwrap();
    let chunks = splitter.split_text(&text);

    assert!(chunks.len() > 1, "expected several chunks");
    assert_eq!(chunks.concat(), text);
}

#[test]
fn every_chunk_within_token_budget() {
    let text = "the quick brown fox jumps over the lazy dog ".repeat(6);
    let vocabulary = cl100k_vocabulary().unwrap();
    let splitter = TokenTextSplitter::new(8, 0).unwrap();

    for chunk in splitter.split_text(&text) {
        let count = vocabulary.encode_ordinary(&chunk).len();
        assert!(count <= 8, "chunk of {count} tokens: {chunk:?}");
    }
}

#[test]
fn overlapping_chunks_share_a_boundary() {
    let text = "one two three four five six seven eight nine ten eleven twelve ".repeat(3);
    let splitter = TokenTextSplitter::new(8, 3).unwrap();
    let chunks = splitter.split_text(&text);
    assert!(chunks.len() > 1);

    for window in chunks.windows(2) {
        let (a, b) = (&window[0], &window[1]);
        let shares_boundary = (1..=a.len()).any(|k| b.starts_with(&a[a.len() - k..]));
        assert!(
            shares_boundary,
            "no shared boundary between {a:?} and {b:?}"
        );
    }
}

#[test]
fn stop_rule_skips_trailing_window() {
    let text = "a ".repeat(40);
    let vocabulary = cl100k_vocabulary().unwrap();
    let total = vocabulary.encode_ordinary(&text).len();

    let (chunk_size, overlap) = (7, 2);
    let step = chunk_size - overlap;

    // expected number of windows under each policy, from the window rule
    let mut stopped_expected = 0;
    let mut start = 0;
    while start < total {
        stopped_expected += 1;
        if start + chunk_size >= total {
            break;
        }
        start += step;
    }
    let all_expected = total.div_ceil(step); // starts 0, step, 2*step, ... < total

    let stop = TokenTextSplitter::new(chunk_size, overlap).unwrap();
    let all = TokenTextSplitter::new(chunk_size, overlap)
        .unwrap()
        .with_tail_policy(TailPolicy::AllWindows);

    assert_eq!(stop.split_text(&text).len(), stopped_expected);
    assert_eq!(all.split_text(&text).len(), all_expected);
}

#[test]
fn identically_configured_splitters_agree() {
    let text = "Determinism is the whole point of a fixed vocabulary. \
                Two splitters with the same parameters must agree exactly.";
    let a = TokenTextSplitter::new(300, 50).unwrap();
    let b = TokenTextSplitter::new(300, 50).unwrap();
    assert_eq!(a.split_text(text), b.split_text(text));
}
