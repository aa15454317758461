//! Frontmatter tag parser.
//!
//! Extracts a normalized tag set from the YAML frontmatter block at the top
//! of a note. This is deliberately not a full YAML parser: only the `tags:`
//! key is understood, in the three shapes users actually write (inline array,
//! inline scalar, nested list). Malformed frontmatter is ignored, never an
//! error.

use std::collections::BTreeSet;

/// Extract tags from the YAML frontmatter of markdown content.
///
/// Supported formats:
///
/// ```text
/// ---
/// tags: [python, tutorial, backend]     # inline array
/// tags: python tutorial backend         # space-separated
/// tags: python, tutorial, backend       # comma-separated
/// tags: #python #tutorial               # hash prefixes stripped
/// tags: #parent/child                   # hierarchical, expands segments
/// tags:
///   - python
///   - tutorial
/// ---
/// ```
///
/// Returns a sorted, deduplicated, lowercase tag list. Content without a
/// leading `---` delimiter, or with an unclosed frontmatter block, yields an
/// empty list.
pub fn parse_tags(content: &str) -> Vec<String> {
    let lines: Vec<&str> = content.lines().collect();

    // Frontmatter starts at the first non-empty line, which must be `---`.
    let Some(start) = lines.iter().position(|l| !l.trim().is_empty()) else {
        return Vec::new();
    };
    if lines[start].trim() != "---" {
        return Vec::new();
    }

    // Unclosed block means no frontmatter at all.
    let Some(end) = lines[start + 1..]
        .iter()
        .position(|l| l.trim() == "---")
        .map(|i| start + 1 + i)
    else {
        return Vec::new();
    };

    let mut tags = BTreeSet::new();
    let mut in_tags_list = false;

    for line in &lines[start + 1..end] {
        let stripped = line.trim();

        if let Some(rest) = stripped.strip_prefix("tags:") {
            let rest = rest.trim();
            if rest.starts_with('[') && rest.ends_with(']') {
                // Inline array: each comma-separated item is its own scalar.
                for item in rest[1..rest.len() - 1].split(',') {
                    normalize_scalar(item, &mut tags);
                }
                return tags.into_iter().collect();
            }
            if !rest.is_empty() {
                normalize_scalar(rest, &mut tags);
                return tags.into_iter().collect();
            }
            in_tags_list = true;
        } else if in_tags_list {
            if let Some(item) = stripped.strip_prefix('-') {
                normalize_scalar(item, &mut tags);
            } else if !stripped.is_empty() {
                // First non-dash, non-blank line terminates the list.
                break;
            }
        }
    }

    tags.into_iter().collect()
}

/// Split a scalar tag value and fold the normalized tokens into `tags`.
///
/// Commas take precedence over whitespace: `"a b, c"` yields `{"a b", "c"}`
/// while `"a b"` yields `{"a", "b"}`.
fn normalize_scalar(text: &str, tags: &mut BTreeSet<String>) {
    let text = text.trim();
    if text.is_empty() {
        return;
    }

    if text.contains(',') {
        for part in text.split(',') {
            normalize_token(part, tags);
        }
    } else {
        for part in text.split_whitespace() {
            normalize_token(part, tags);
        }
    }
}

/// Normalize a single raw token: trim, strip leading `#`, lowercase, and
/// expand hierarchical tags into every path segment.
///
/// Normalization is idempotent: applying it to its own output is a no-op.
fn normalize_token(part: &str, tags: &mut BTreeSet<String>) {
    let tag = part.trim().trim_start_matches('#').trim().to_lowercase();
    if tag.is_empty() {
        return;
    }

    if tag.contains('/') {
        for segment in tag.split('/') {
            let segment = segment.trim();
            if !segment.is_empty() {
                tags.insert(segment.to_string());
            }
        }
    }
    tags.insert(tag);
}
