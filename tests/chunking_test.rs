//! End-to-end chunking tests: boundary preference, budget compliance,
//! and the hard delivery cap.

use proptest::prelude::*;

use telegraft::{
    SAFE_CHUNK_LENGTH, TELEGRAM_MAX_LENGTH, chunk_message, chunk_message_with_limit,
    escape_markdown_v2,
};

#[test]
fn fitting_input_is_returned_unchanged() {
    let text = "a single short message.";
    assert_eq!(chunk_message(text), vec![text]);
    assert_eq!(chunk_message_with_limit("", 10), vec![""]);
}

#[test]
fn paragraphs_are_the_preferred_boundary() {
    let text = "para1\n\npara2";
    assert_eq!(chunk_message_with_limit(text, 10), vec!["para1", "para2"]);
}

#[test]
fn multi_paragraph_document_packs_greedily() {
    let paragraphs: Vec<String> = (0..10).map(|i| format!("paragraph number {i}")).collect();
    let text = paragraphs.join("\n\n");
    let chunks = chunk_message_with_limit(&text, 50);

    for chunk in &chunks {
        assert!(chunk.chars().count() <= 50);
    }
    // Joining the chunks back with the canonical separator recovers the
    // original document, since every split fell on a paragraph boundary.
    assert_eq!(chunks.join("\n\n"), text);
}

#[test]
fn sentences_break_an_oversized_paragraph() {
    let text = "First sentence here. Second sentence here. Third one.";
    let chunks = chunk_message_with_limit(text, 25);
    assert_eq!(
        chunks,
        vec!["First sentence here.", "Second sentence here.", "Third one."]
    );
}

#[test]
fn words_break_an_oversized_sentence() {
    let text = "one two three four five six seven";
    let chunks = chunk_message_with_limit(text, 13);
    assert_eq!(chunks, vec!["one two three", "four five six", "seven"]);
}

#[test]
fn unbreakable_token_is_hard_sliced() {
    let word = "w".repeat(9000);
    let chunks = chunk_message_with_limit(&word, 4000);
    let lengths: Vec<usize> = chunks.iter().map(|c| c.chars().count()).collect();
    assert_eq!(lengths, vec![4000, 4000, 1000]);
    assert_eq!(chunks.concat(), word);
}

#[test]
fn oversized_budget_still_respects_hard_cap() {
    let text = "q".repeat(6000);
    let chunks = chunk_message_with_limit(&text, 100_000);
    assert!(
        chunks
            .iter()
            .all(|c| c.chars().count() <= TELEGRAM_MAX_LENGTH)
    );
    assert_eq!(chunks.concat(), text);
}

#[test]
fn default_budget_leaves_headroom() {
    assert!(SAFE_CHUNK_LENGTH < TELEGRAM_MAX_LENGTH);
    let text = "r".repeat(SAFE_CHUNK_LENGTH + 1);
    let chunks = chunk_message(&text);
    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[0].chars().count(), SAFE_CHUNK_LENGTH);
}

#[test]
fn escaped_output_chunks_cleanly() {
    // The typical pipeline: escape first, then chunk the escaped payload.
    let raw = "## Update\n\nAll **good** now. Next check at 10.30!\n\n".repeat(200);
    let chunks = chunk_message(&escape_markdown_v2(&raw));
    assert!(chunks.len() > 1);
    for chunk in &chunks {
        assert!(chunk.chars().count() <= SAFE_CHUNK_LENGTH);
    }
}

proptest! {
    #[test]
    fn prop_concatenation_preserves_non_whitespace(
        text in "[a-z .!\n]{0,3000}",
        max_len in 1usize..500,
    ) {
        // Separators are canonicalized across split points, but no other
        // content may be lost or invented.
        let chunks = chunk_message_with_limit(&text, max_len);
        let packed: String = chunks.concat().split_whitespace().collect();
        let original: String = text.split_whitespace().collect();
        prop_assert_eq!(packed, original);
    }

    #[test]
    fn prop_always_at_least_one_chunk(
        text in "\\PC{0,500}",
        max_len in 1usize..100,
    ) {
        prop_assert!(!chunk_message_with_limit(&text, max_len).is_empty());
    }

    #[test]
    fn prop_hard_cap_is_never_exceeded(
        text in "[a-z \n]{0,6000}",
        max_len in 1usize..20_000,
    ) {
        for chunk in chunk_message_with_limit(&text, max_len) {
            prop_assert!(chunk.chars().count() <= TELEGRAM_MAX_LENGTH);
        }
    }
}
