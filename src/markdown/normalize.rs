//! Common-Markdown normalization applied before span scanning.
//!
//! Telegram's MarkdownV2 uses single-character delimiters (`*bold*`,
//! `_italic_`), while most generated Markdown uses doubled ones. This pass
//! rewrites doubled delimiters to their MarkdownV2 forms and turns ATX
//! headings into bold lines, so the span scanner only has to recognize the
//! target dialect.

/// Rewrite common-Markdown constructs into their MarkdownV2 equivalents.
///
/// Three rewrites, applied over the whole text:
///
/// - `**bold**` becomes `*bold*`
/// - `__italic__` becomes `_italic_`
/// - a line starting with 1–6 `#` followed by whitespace becomes the
///   trimmed remainder wrapped in `*...*`
///
/// Doubled delimiters are matched non-greedily and may span lines.
/// Unpaired doubles and headings with no title text are left untouched.
///
/// # Examples
///
/// ```
/// use telegraft::markdown::normalize_common_markdown;
///
/// assert_eq!(normalize_common_markdown("**x** and __y__"), "*x* and _y_");
/// assert_eq!(normalize_common_markdown("## Title"), "*Title*");
/// ```
pub fn normalize_common_markdown(text: &str) -> String {
    let collapsed = collapse_double_delimiter(text, '*');
    let collapsed = collapse_double_delimiter(&collapsed, '_');
    rewrite_headings(&collapsed)
}

/// Collapse `dd...dd` spans to `d...d` for a single delimiter character.
///
/// Matches non-greedily: each opener pairs with the nearest following
/// closer that leaves a non-empty interior. An opener with no closer
/// stays in the text verbatim.
fn collapse_double_delimiter(text: &str, delim: char) -> String {
    let needle: String = [delim, delim].iter().collect();
    let mut result = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find(&needle) {
        let after = &rest[open + needle.len()..];
        match after.find(&needle) {
            Some(close) if close > 0 => {
                result.push_str(&rest[..open]);
                result.push(delim);
                result.push_str(&after[..close]);
                result.push(delim);
                rest = &after[close + needle.len()..];
            }
            _ => {
                // No closer (or empty interior): the pair is literal text.
                result.push_str(&rest[..open + needle.len()]);
                rest = after;
            }
        }
    }
    result.push_str(rest);
    result
}

fn rewrite_headings(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            result.push('\n');
        }
        match heading_title(line) {
            Some(title) => {
                result.push('*');
                result.push_str(title);
                result.push('*');
            }
            None => result.push_str(line),
        }
    }
    result
}

/// Extract the trimmed title of an ATX heading line, if it is one.
fn heading_title(line: &str) -> Option<&str> {
    let hashes = line.chars().take_while(|&c| c == '#').count();
    if !(1..=6).contains(&hashes) {
        return None;
    }
    let rest = &line[hashes..];
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let title = rest.trim();
    if title.is_empty() { None } else { Some(title) }
}
