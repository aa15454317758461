//! Link extractor: `[[Note]]`, `[[Note|alias]]`, `[text](path)`.
//!
//! Returns raw, unresolved targets. Resolution against the vault's note and
//! folder index happens in `slate-graph`.

use regex::Regex;
use slate_core::ExtractedLinks;
use std::sync::LazyLock;

/// Matches `[[target]]` or `[[target|display]]`, capturing only the target.
static WIKILINK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[([^\]|]+)(?:\|[^\]]+)?\]\]").unwrap());

/// Matches `[text](path)`. External and anchor links are filtered afterwards
/// since the regex crate has no lookahead.
static MARKDOWN_LINK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

/// Prefixes that mark a markdown link as external or anchor-only.
const EXCLUDED_PREFIXES: [&str; 5] = ["http://", "https://", "mailto:", "#", "data:"];

/// Extract all indexable link targets from note content.
///
/// Wikilink targets are whitespace-trimmed, with any `|display` alias
/// removed. Markdown link paths have their `#fragment` stripped, are
/// percent-decoded, and lose a leading `./`; links to external protocols and
/// bare anchors are skipped entirely.
pub fn extract_links(content: &str) -> ExtractedLinks {
    let wikilinks = WIKILINK_PATTERN
        .captures_iter(content)
        .filter_map(|caps| {
            let target = caps.get(1).map(|m| m.as_str().trim())?;
            (!target.is_empty()).then(|| target.to_string())
        })
        .collect();

    let markdown_links = MARKDOWN_LINK_PATTERN
        .captures_iter(content)
        .filter_map(|caps| normalize_markdown_path(caps.get(2)?.as_str()))
        .collect();

    ExtractedLinks {
        wikilinks,
        markdown_links,
    }
}

/// Clean a raw markdown link path, or drop it if it is not indexable.
fn normalize_markdown_path(raw: &str) -> Option<String> {
    if EXCLUDED_PREFIXES.iter().any(|p| raw.starts_with(p)) {
        return None;
    }

    // "note.md#section" links the note itself.
    let path = raw.split('#').next().unwrap_or("");
    if path.is_empty() {
        return None;
    }

    // "My%20Note.md" was percent-encoded by the editor.
    let decoded = urlencoding::decode(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string());

    let cleaned = decoded.strip_prefix("./").unwrap_or(&decoded);
    (!cleaned.is_empty()).then(|| cleaned.to_string())
}
