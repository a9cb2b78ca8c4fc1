//! # telegraft
//!
//! A small, dependency-light library for preparing text payloads for the
//! Telegram Bot API: MarkdownV2 escaping and delivery-size chunking.
//!
//! ## Features
//!
//! - Convert a common-Markdown subset (bold, italic, spoiler, links, ATX
//!   headings) into Telegram's strict MarkdownV2 dialect, escaping every
//!   reserved character outside recognized markup spans
//! - Split long output into chunks at or under a size budget, preferring
//!   paragraph, then sentence, then word boundaries, hard-slicing only
//!   unbreakable tokens
//!
//! Both transforms are pure functions: no I/O, no shared state, never
//! failing for any string input. Delivery itself (sending, retries, rate
//! limits) is out of scope; the downstream bot client consumes each chunk
//! as one message.
//!
//! ## Quick Start
//!
//! ```
//! use telegraft::{chunk_message, escape_markdown_v2};
//!
//! let payload = escape_markdown_v2("**Done!** See [docs](https://example.com).");
//! assert_eq!(payload, "*Done\\!* See [docs](https://example.com/)\\.");
//!
//! // Fits in one message; longer payloads come back in several chunks,
//! // each within Telegram's 4096-character limit.
//! let chunks = chunk_message(&payload);
//! assert_eq!(chunks.len(), 1);
//! ```
//!
//! ## Composing
//!
//! The two transforms are independent: skip [`escape_markdown_v2`] when
//! the text is already valid MarkdownV2, or skip chunking when the output
//! is known to fit. [`chunk_message_with_limit`] takes an explicit budget
//! for callers that reserve room for prefixes or suffixes of their own.

pub mod chunk;
pub mod markdown;

pub use chunk::{SAFE_CHUNK_LENGTH, TELEGRAM_MAX_LENGTH, chunk_message, chunk_message_with_limit};
pub use markdown::escape_markdown_v2;
