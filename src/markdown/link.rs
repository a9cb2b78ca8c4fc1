//! Link URL normalization.
//!
//! URLs written in `[label](url)` syntax come in three flavors: absolute
//! (`https://example.com/x`), bare-domain (`example.com/x`), and garbage.
//! The first two are normalized through a real URL parse; garbage causes
//! the link to be dropped so only the label survives as plain text.

use url::Url;

/// Normalize a raw link URL, returning `None` when it cannot be salvaged.
///
/// Tries an absolute parse first. If that fails and the string looks
/// domain-like (`host.tld` with an optional path, query, or fragment),
/// retries with an assumed `https://` prefix. Both parses failing means
/// the caller should drop the link and keep just the label.
pub fn normalize_url(raw: &str) -> Option<String> {
    if let Ok(parsed) = Url::parse(raw) {
        return Some(parsed.to_string());
    }
    if looks_like_domain(raw)
        && let Ok(parsed) = Url::parse(&format!("https://{raw}"))
    {
        return Some(parsed.to_string());
    }
    None
}

/// Heuristic for scheme-less URLs: a dotted hostname, optionally followed
/// by a path, query, or fragment.
fn looks_like_domain(raw: &str) -> bool {
    let host = raw.split(['/', '?', '#']).next().unwrap_or("");
    let labels: Vec<&str> = host.split('.').collect();
    if labels.len() < 2 {
        return false;
    }
    let valid_label = |label: &&str| {
        !label.is_empty()
            && label
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-')
    };
    if !labels.iter().all(valid_label) {
        return false;
    }
    // The TLD must look like one: at least two letters.
    let tld = labels[labels.len() - 1];
    tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
}
