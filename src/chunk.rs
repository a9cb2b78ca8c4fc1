//! Greedy multi-level message segmentation.
//!
//! Telegram rejects messages over 4096 characters, so long output has to
//! be split before sending. The splitter prefers the largest boundary that
//! fits: paragraphs first, then sentences, then words, and only for a
//! single over-budget token a fixed-width hard slice. All four levels
//! share one greedy accumulate-with-flush routine, parameterized by the
//! split rule and the join separator, so the fits/overflow policy cannot
//! drift between levels.
//!
//! Lengths are measured in Unicode scalar values and slices always land on
//! character boundaries.

use memchr::memchr_iter;

/// The maximum message length the Telegram Bot API accepts.
pub const TELEGRAM_MAX_LENGTH: usize = 4096;

/// Default chunk budget, leaving headroom below [`TELEGRAM_MAX_LENGTH`].
pub const SAFE_CHUNK_LENGTH: usize = 4000;

/// Split text into chunks of at most [`SAFE_CHUNK_LENGTH`] characters.
///
/// Equivalent to [`chunk_message_with_limit`] with the default budget.
///
/// # Examples
///
/// ```
/// use telegraft::chunk_message;
///
/// assert_eq!(chunk_message("short"), vec!["short"]);
/// ```
pub fn chunk_message(text: &str) -> Vec<String> {
    chunk_message_with_limit(text, SAFE_CHUNK_LENGTH)
}

/// Split text into chunks of at most `max_len` characters.
///
/// Boundaries are chosen greedily at the largest granularity that fits:
/// paragraphs (runs of two or more newlines) are packed joined by a blank
/// line; an over-budget paragraph is split into sentences packed with
/// single spaces; an over-budget sentence into words; and an over-budget
/// word is hard-sliced at exactly `max_len` characters. Whatever `max_len`
/// is passed, no returned chunk ever exceeds [`TELEGRAM_MAX_LENGTH`].
///
/// Text already within budget (including the empty string) comes back as
/// a single chunk, unchanged. The original whitespace between packed units
/// is canonicalized: a blank line between paragraphs, a single space
/// between sentences or words.
///
/// # Examples
///
/// ```
/// use telegraft::chunk_message_with_limit;
///
/// let chunks = chunk_message_with_limit("para1\n\npara2", 10);
/// assert_eq!(chunks, vec!["para1", "para2"]);
/// ```
pub fn chunk_message_with_limit(text: &str, max_len: usize) -> Vec<String> {
    let max_len = max_len.max(1);

    let mut chunks = if char_len(text) <= max_len {
        vec![text.to_string()]
    } else {
        pack(split_paragraphs(text), "\n\n", max_len, chunk_paragraph)
    };

    // Safety pass: a max_len above the hard cap can leave oversized
    // chunks; re-slice those at the default budget.
    if chunks.iter().any(|c| char_len(c) > TELEGRAM_MAX_LENGTH) {
        chunks = chunks
            .into_iter()
            .flat_map(|c| {
                if char_len(&c) > TELEGRAM_MAX_LENGTH {
                    hard_slice(&c, SAFE_CHUNK_LENGTH)
                } else {
                    vec![c]
                }
            })
            .collect();
    }

    if chunks.is_empty() {
        chunks.push(String::new());
    }
    chunks
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Greedily pack units into chunks of at most `max_len` characters.
///
/// Units are appended to a running buffer, joined by `sep`, while the
/// candidate still fits. On overflow the buffer is flushed; a unit that
/// fits on its own starts the next buffer, and one that does not is
/// handed to `split_deeper` for the next granularity level.
///
/// The fits test is always on the candidate (buffer + separator + unit),
/// never on the unit alone while the buffer is non-empty. No look-ahead,
/// no rebalancing.
fn pack<F>(units: Vec<&str>, sep: &str, max_len: usize, split_deeper: F) -> Vec<String>
where
    F: Fn(&str, usize) -> Vec<String>,
{
    let sep_len = char_len(sep);
    let mut chunks = Vec::new();
    let mut buffer = String::new();
    let mut buffer_len = 0;

    for unit in units {
        let unit_len = char_len(unit);
        let candidate_len = if buffer.is_empty() {
            unit_len
        } else {
            buffer_len + sep_len + unit_len
        };

        if candidate_len <= max_len {
            if !buffer.is_empty() {
                buffer.push_str(sep);
            }
            buffer.push_str(unit);
            buffer_len = candidate_len;
            continue;
        }

        if !buffer.is_empty() {
            chunks.push(std::mem::take(&mut buffer));
            buffer_len = 0;
        }
        if unit_len <= max_len {
            buffer.push_str(unit);
            buffer_len = unit_len;
        } else {
            chunks.extend(split_deeper(unit, max_len));
        }
    }

    if !buffer.is_empty() {
        chunks.push(buffer);
    }
    chunks
}

fn chunk_paragraph(paragraph: &str, max_len: usize) -> Vec<String> {
    pack(split_sentences(paragraph), " ", max_len, chunk_sentence)
}

fn chunk_sentence(sentence: &str, max_len: usize) -> Vec<String> {
    let words: Vec<&str> = sentence.split_whitespace().collect();
    pack(words, " ", max_len, |word, width| hard_slice(word, width))
}

/// Split on runs of two or more newlines.
///
/// The newline runs themselves are consumed; packing re-joins paragraphs
/// with a canonical blank line.
fn split_paragraphs(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut paragraphs = Vec::new();
    let mut start = 0;
    let mut newlines = memchr_iter(b'\n', bytes).peekable();

    while let Some(first) = newlines.next() {
        let mut last = first;
        while newlines.peek() == Some(&(last + 1)) {
            last = newlines.next().unwrap();
        }
        if last > first {
            paragraphs.push(&text[start..first]);
            start = last + 1;
        }
    }
    paragraphs.push(&text[start..]);
    paragraphs
}

/// Split after sentence-ending punctuation (`.`, `!`, `?`, `…`) that is
/// followed by whitespace and then more text.
///
/// The punctuation run stays with its sentence; the whitespace between
/// sentences is consumed. Text with no such boundary is one sentence.
fn split_sentences(text: &str) -> Vec<&str> {
    let is_terminator = |c: char| matches!(c, '.' | '!' | '?' | '…');
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut iter = text.char_indices().peekable();

    while let Some((i, c)) = iter.next() {
        if !is_terminator(c) {
            continue;
        }
        // Extend over the whole punctuation run (e.g. "...", "?!").
        let mut end = i + c.len_utf8();
        while let Some(&(j, next)) = iter.peek() {
            if !is_terminator(next) {
                break;
            }
            end = j + next.len_utf8();
            iter.next();
        }
        // A boundary needs whitespace and then a non-whitespace character.
        let mut ws_end = end;
        while let Some(&(j, next)) = iter.peek() {
            if !next.is_whitespace() {
                break;
            }
            ws_end = j + next.len_utf8();
            iter.next();
        }
        if ws_end > end && iter.peek().is_some() {
            sentences.push(&text[start..end]);
            start = ws_end;
        }
    }

    if start < text.len() || sentences.is_empty() {
        sentences.push(&text[start..]);
    }
    sentences
}

/// Cut text into pieces of exactly `width` characters (last may be short).
fn hard_slice(text: &str, width: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut piece = String::new();
    let mut count = 0;

    for c in text.chars() {
        piece.push(c);
        count += 1;
        if count == width {
            pieces.push(std::mem::take(&mut piece));
            count = 0;
        }
    }
    if !piece.is_empty() || pieces.is_empty() {
        pieces.push(piece);
    }
    pieces
}
