//! MarkdownV2 escaping and normalization.
//!
//! Converts loosely-formatted Markdown into the strict escaped dialect the
//! Telegram Bot API expects when `parse_mode` is `MarkdownV2`. The design
//! separates the stages into pure submodules:
//!
//! - `normalize`: rewrite common-Markdown forms (`**x**`, `__x__`, ATX
//!   headings) into their MarkdownV2 equivalents
//! - `scan`: tokenize the normalized text into typed spans (plain text,
//!   bold, italic, spoiler, link)
//! - `escape`: reserved-character escaping for plain text and the
//!   narrower escape for link URLs
//! - `link`: URL normalization with a bare-domain fallback
//!
//! ## Design Notes
//!
//! Escaping must never touch delimiters belonging to recognized markup but
//! must escape the same characters in plain text. A single global escape
//! pass cannot tell the two apart, so the text is first tokenized into a
//! span list; each span then renders itself (interior escaped, delimiters
//! literal) and the output is one ordered concatenation. Unmatched
//! delimiters never become spans, so they land in plain-text runs and get
//! escaped like any other reserved character.
//!
//! Scan precedence is links, then bold, then italic, then spoiler: once a
//! position is consumed by a link, its interior can no longer be mistaken
//! for emphasis syntax, and so on down the chain.

mod escape;
mod link;
mod normalize;
mod scan;

pub use escape::{escape_link_url, escape_text, is_reserved};
pub use normalize::normalize_common_markdown;

use scan::Span;

/// Escape text for Telegram's MarkdownV2 parse mode.
///
/// Recognizes bold (`*x*` or `**x**`), italic (`_x_` or `__x__`), spoiler
/// (`||x||`), link (`[label](url)`), and ATX heading syntax; everything
/// else is treated as plain text and every reserved character in it is
/// backslash-escaped. Span interiors are escaped too, with their
/// delimiters kept literal, so recognized markup survives intact.
///
/// A link whose URL parses neither as an absolute URL nor as a bare
/// domain is dropped: only its escaped label appears in the output.
///
/// Empty input yields empty output. The function never fails.
///
/// # Examples
///
/// ```
/// use telegraft::escape_markdown_v2;
///
/// assert_eq!(escape_markdown_v2("**bold** move."), "*bold* move\\.");
/// assert_eq!(
///     escape_markdown_v2("[docs](https://example.com)"),
///     "[docs](https://example.com/)"
/// );
/// ```
pub fn escape_markdown_v2(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let normalized = normalize_common_markdown(text);
    let mut result = String::with_capacity(normalized.len() + normalized.len() / 4);

    for span in scan::scan_spans(&normalized) {
        match span {
            Span::Text(t) => result.push_str(&escape_text(&t)),
            Span::Bold(t) => {
                result.push('*');
                result.push_str(&escape_text(&t));
                result.push('*');
            }
            Span::Italic(t) => {
                result.push('_');
                result.push_str(&escape_text(&t));
                result.push('_');
            }
            Span::Spoiler(t) => {
                result.push_str("||");
                result.push_str(&escape_text(&t));
                result.push_str("||");
            }
            Span::Link { label, url } => match link::normalize_url(&url) {
                Some(normalized_url) => {
                    result.push('[');
                    result.push_str(&escape_text(&label));
                    result.push_str("](");
                    result.push_str(&escape_link_url(&normalized_url));
                    result.push(')');
                }
                // Unusable URL: the link degrades to its label.
                None => result.push_str(&escape_text(&label)),
            },
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(escape_markdown_v2(""), "");
    }

    #[test]
    fn test_plain_text_escaped() {
        assert_eq!(escape_markdown_v2("1 + 2 = 3."), "1 \\+ 2 \\= 3\\.");
    }

    #[test]
    fn test_bold_interior_escaped_delimiters_kept() {
        assert_eq!(escape_markdown_v2("*a.b*"), "*a\\.b*");
        assert_eq!(escape_markdown_v2("**a.b**"), "*a\\.b*");
    }

    #[test]
    fn test_italic_and_spoiler() {
        assert_eq!(escape_markdown_v2("_x!_"), "_x\\!_");
        assert_eq!(escape_markdown_v2("||top. secret||"), "||top\\. secret||");
    }

    #[test]
    fn test_heading_becomes_bold() {
        assert_eq!(escape_markdown_v2("# Status: OK."), "*Status: OK\\.*");
    }

    #[test]
    fn test_mixed_markup() {
        assert_eq!(
            escape_markdown_v2("**bold** and _ital_ and\n# Heading"),
            "*bold* and _ital_ and\n*Heading*"
        );
    }

    #[test]
    fn test_link_label_and_url_escaped() {
        assert_eq!(
            escape_markdown_v2("[a.b](https://example.com/x_1)"),
            "[a\\.b](https://example.com/x_1)"
        );
    }

    #[test]
    fn test_url_stops_at_first_close_paren() {
        // The scanned URL ends at the first `)`; the stray one left behind
        // is plain text and gets escaped.
        assert_eq!(
            escape_markdown_v2("[a](https://example.com/x(1))"),
            "[a](https://example.com/x(1)\\)"
        );
    }

    #[test]
    fn test_bare_domain_link() {
        assert_eq!(
            escape_markdown_v2("[site](example.com)"),
            "[site](https://example.com/)"
        );
    }

    #[test]
    fn test_dead_link_degrades_to_label() {
        let result = escape_markdown_v2("[text](not a url)");
        assert_eq!(result, "text");
    }

    #[test]
    fn test_unmatched_delimiters_escaped() {
        assert_eq!(escape_markdown_v2("2 * 3"), "2 \\* 3");
        assert_eq!(escape_markdown_v2("a _ b"), "a \\_ b");
        assert_eq!(escape_markdown_v2("[orphan"), "\\[orphan");
    }

    #[test]
    fn test_double_application_over_escapes() {
        // Re-escaping escaped text is expected to differ: the backslashes
        // themselves get escaped on the second pass.
        let once = escape_markdown_v2("Done.");
        let twice = escape_markdown_v2(&once);
        assert_eq!(once, "Done\\.");
        assert_eq!(twice, "Done\\\\\\.");
        assert_ne!(once, twice);
    }
}
