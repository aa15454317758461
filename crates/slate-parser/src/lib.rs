//! # Slate Parser
//!
//! Tag and link parsing for markdown notes.
//!
//! This crate turns raw note text into two pieces of derived data:
//!
//! - [`parse_tags`] - a normalized tag set from the YAML frontmatter block
//! - [`extract_links`] - raw wikilink and markdown link targets from the body
//!
//! Both parsers follow the engine's local-recovery rule: malformed input
//! (unclosed frontmatter, odd tag values) yields an empty or reduced result,
//! never an error. Regex patterns are compiled once via `std::sync::LazyLock`.
//!
//! ## Quick Start
//!
//! ```
//! use slate_parser::{extract_links, parse_tags};
//!
//! let content = "---\ntags: [rust, meta/vault]\n---\n\nSee [[Other Note]] and [docs](guide.md).";
//!
//! let tags = parse_tags(content);
//! assert_eq!(tags, vec!["meta", "meta/vault", "rust", "vault"]);
//!
//! let links = extract_links(content);
//! assert_eq!(links.wikilinks, vec!["Other Note"]);
//! assert_eq!(links.markdown_links, vec!["guide.md"]);
//! ```

mod links;
mod tags;

pub use links::extract_links;
pub use tags::parse_tags;

// Re-export the shared result type so consumers don't need slate-core just
// for link extraction.
pub use slate_core::ExtractedLinks;
