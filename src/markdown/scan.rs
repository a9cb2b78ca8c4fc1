//! Span scanner for the MarkdownV2 escaper.
//!
//! One left-to-right pass over normalized text, producing an ordered list
//! of typed spans. Rendering the output is then a flat concatenation over
//! the list, which keeps recognized markup structurally separate from the
//! plain text that gets the full reserved-character escape.
//!
//! At any position the scanner tries, in order: link, bold, italic,
//! spoiler. A delimiter that fails to open a span falls through into the
//! surrounding plain-text run and will be escaped like any other reserved
//! character.

/// One scanned region of the input text.
///
/// Interiors and labels are stored raw; escaping happens at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    /// A run of plain text between markup spans.
    Text(String),
    /// `*interior*`
    Bold(String),
    /// `_interior_`
    Italic(String),
    /// `||interior||`
    Spoiler(String),
    /// `[label](url)` with the URL still unnormalized.
    Link { label: String, url: String },
}

/// Tokenize normalized text into an ordered span list.
pub fn scan_spans(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut plain = String::new();
    let mut rest = text;

    while let Some(c) = rest.chars().next() {
        let matched = match c {
            '[' => match_link(rest),
            '*' => match_delimited(rest, "*").map(|(s, n)| (Span::Bold(s), n)),
            '_' => match_delimited(rest, "_").map(|(s, n)| (Span::Italic(s), n)),
            '|' if rest.starts_with("||") => {
                match_delimited(rest, "||").map(|(s, n)| (Span::Spoiler(s), n))
            }
            _ => None,
        };

        match matched {
            Some((span, consumed)) => {
                if !plain.is_empty() {
                    spans.push(Span::Text(std::mem::take(&mut plain)));
                }
                spans.push(span);
                rest = &rest[consumed..];
            }
            None => {
                plain.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }
    }

    if !plain.is_empty() {
        spans.push(Span::Text(plain));
    }
    spans
}

/// Match `[label](url)` at the start of `rest`.
///
/// The label must be non-empty and contain no `]` or newline; the URL must
/// be non-empty and contain no `)`. Returns the span and the number of
/// bytes consumed.
fn match_link(rest: &str) -> Option<(Span, usize)> {
    let body = rest.strip_prefix('[')?;
    let label_end = body.find([']', '\n'])?;
    if label_end == 0 || !body[label_end..].starts_with(']') {
        return None;
    }
    let label = &body[..label_end];

    let after_label = &body[label_end + 1..];
    let url_body = after_label.strip_prefix('(')?;
    let url_end = url_body.find(')')?;
    if url_end == 0 {
        return None;
    }
    let url = &url_body[..url_end];

    // "[" + label + "](" + url + ")"
    let consumed = 1 + label_end + 2 + url_end + 1;
    Some((
        Span::Link {
            label: label.to_string(),
            url: url.to_string(),
        },
        consumed,
    ))
}

/// Match a delimited span (`*x*`, `_x_`, `||x||`) at the start of `rest`.
///
/// Non-greedy: the nearest closer wins. The interior must be non-empty and
/// stay on one line. Returns the raw interior and the bytes consumed.
fn match_delimited(rest: &str, delim: &str) -> Option<(String, usize)> {
    let body = &rest[delim.len()..];
    let close = body.find(delim)?;
    if close == 0 {
        return None;
    }
    let interior = &body[..close];
    if interior.contains('\n') {
        return None;
    }
    Some((interior.to_string(), delim.len() + close + delim.len()))
}
