//! Pure MarkdownV2 escaping utilities.
//!
//! These functions handle backslash-escaping of the characters Telegram's
//! MarkdownV2 parse mode reserves, both for plain text and for the URL
//! portion of a text link (which has its own, smaller reserved set).

/// Check whether a character is reserved in MarkdownV2 plain text.
///
/// The reserved set is the backslash plus the 18 characters Telegram
/// requires to be escaped outside of markup delimiters.
pub fn is_reserved(c: char) -> bool {
    matches!(
        c,
        '\\' | '_'
            | '*'
            | '['
            | ']'
            | '('
            | ')'
            | '~'
            | '`'
            | '>'
            | '#'
            | '+'
            | '-'
            | '='
            | '|'
            | '{'
            | '}'
            | '.'
            | '!'
    )
}

/// Escape every reserved MarkdownV2 character in text.
///
/// This is the escape applied to plain text runs, to the interiors of
/// bold, italic, and spoiler spans, and to link labels. It knows nothing
/// about markup structure; callers are responsible for keeping delimiters
/// out of the input.
///
/// # Examples
///
/// ```
/// use telegraft::markdown::escape_text;
///
/// assert_eq!(escape_text("Hello, world!"), "Hello, world\\!");
/// assert_eq!(escape_text("a*b_c"), "a\\*b\\_c");
/// assert_eq!(escape_text("back\\slash"), "back\\\\slash");
/// ```
pub fn escape_text(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + text.len() / 4);
    for c in text.chars() {
        if is_reserved(c) {
            result.push('\\');
        }
        result.push(c);
    }
    result
}

/// Escape the URL portion of a MarkdownV2 text link.
///
/// Inside `[label](url)` only `)` and `\` can break the link syntax, so
/// only those two characters are escaped. Everything else passes through
/// untouched.
///
/// # Examples
///
/// ```
/// use telegraft::markdown::escape_link_url;
///
/// assert_eq!(
///     escape_link_url("https://example.com/a_(b)"),
///     "https://example.com/a_(b\\)"
/// );
/// ```
pub fn escape_link_url(url: &str) -> String {
    let mut result = String::with_capacity(url.len() + 2);
    for c in url.chars() {
        if c == ')' || c == '\\' {
            result.push('\\');
        }
        result.push(c);
    }
    result
}
