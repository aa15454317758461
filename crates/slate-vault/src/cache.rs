//! Mtime-keyed tag cache.
//!
//! Wraps the frontmatter tag parser with a memo per absolute file path. An
//! entry is valid iff its stored mtime equals the file's current mtime; any
//! mismatch forces a re-parse and entry replacement. Entries never expire on
//! their own; note/folder delete and move must invalidate explicitly.
//!
//! The map is sharded (`DashMap`) because concurrent requests race on it:
//! one request may be re-reading tags while another invalidates a moved
//! folder's subtree.

use dashmap::DashMap;
use slate_parser::parse_tags;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

#[derive(Debug, Clone)]
struct CacheEntry {
    mtime: f64,
    tags: Vec<String>,
}

/// Per-file tag memo keyed by modification time.
#[derive(Debug, Default)]
pub struct TagCache {
    entries: DashMap<PathBuf, CacheEntry>,
}

impl TagCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the tags for a file, re-parsing only when its mtime changed.
    ///
    /// Any I/O failure (missing file, permission error) yields an empty tag
    /// set rather than an error; a single bad note must not break indexing
    /// for the whole vault.
    pub fn tags(&self, path: &Path) -> Vec<String> {
        let Some(mtime) = file_mtime(path) else {
            return Vec::new();
        };

        if let Some(entry) = self.entries.get(path)
            && entry.mtime == mtime
        {
            return entry.tags.clone();
        }

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                log::debug!("failed to read {} for tag parsing: {}", path.display(), e);
                return Vec::new();
            }
        };

        let tags = parse_tags(&content);
        self.entries.insert(
            path.to_path_buf(),
            CacheEntry {
                mtime,
                tags: tags.clone(),
            },
        );
        tags
    }

    /// Drop the entry for a single file (note delete or move).
    pub fn invalidate(&self, path: &Path) {
        self.entries.remove(path);
    }

    /// Drop every entry rooted under a path prefix (folder delete or move).
    pub fn invalidate_prefix(&self, prefix: &Path) {
        self.entries.retain(|path, _| !path.starts_with(prefix));
    }

    /// Drop all entries.
    pub fn clear(&self) {
        self.entries.clear();
    }

    /// Number of cached files.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Modification time as fractional seconds since the epoch, or `None` when
/// the file cannot be stat'ed.
fn file_mtime(path: &Path) -> Option<f64> {
    let modified = std::fs::metadata(path).ok()?.modified().ok()?;
    modified
        .duration_since(UNIX_EPOCH)
        .ok()
        .map(|d| d.as_secs_f64())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;
    use tempfile::TempDir;

    fn write_note(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_cache_hit_without_change() {
        let temp = TempDir::new().unwrap();
        let path = write_note(&temp, "note.md", "---\ntags: [x]\n---\n");

        let cache = TagCache::new();
        let first = cache.tags(&path);
        let second = cache.tags(&path);

        assert_eq!(first, vec!["x"]);
        assert_eq!(first, second);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_reparse_after_mtime_change() {
        let temp = TempDir::new().unwrap();
        let path = write_note(&temp, "note.md", "---\ntags: [x]\n---\n");

        let cache = TagCache::new();
        assert_eq!(cache.tags(&path), vec!["x"]);

        // Coarse filesystem clocks need a beat between writes.
        sleep(Duration::from_millis(50));
        std::fs::write(&path, "---\ntags: [y]\n---\n").unwrap();

        assert_eq!(cache.tags(&path), vec!["y"]);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_missing_file_yields_empty() {
        let temp = TempDir::new().unwrap();
        let cache = TagCache::new();
        assert!(cache.tags(&temp.path().join("missing.md")).is_empty());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_invalidate_single_entry() {
        let temp = TempDir::new().unwrap();
        let path = write_note(&temp, "note.md", "---\ntags: [x]\n---\n");

        let cache = TagCache::new();
        cache.tags(&path);
        assert_eq!(cache.len(), 1);

        cache.invalidate(&path);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_invalidate_prefix() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join("Projects")).unwrap();
        let inside = write_note(&temp, "Projects/a.md", "---\ntags: [a]\n---\n");
        let outside = write_note(&temp, "b.md", "---\ntags: [b]\n---\n");

        let cache = TagCache::new();
        cache.tags(&inside);
        cache.tags(&outside);
        assert_eq!(cache.len(), 2);

        cache.invalidate_prefix(&temp.path().join("Projects"));
        assert_eq!(cache.len(), 1);
        // The surviving entry still answers without a stat surprise.
        assert_eq!(cache.tags(&outside), vec!["b"]);
    }

    #[test]
    fn test_clear() {
        let temp = TempDir::new().unwrap();
        let path = write_note(&temp, "note.md", "---\ntags: [x]\n---\n");

        let cache = TagCache::new();
        cache.tags(&path);
        cache.clear();
        assert!(cache.is_empty());
    }
}
