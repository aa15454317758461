//! Directory scanning: note and folder discovery.
//!
//! A scan is the source of truth for what exists; nothing about the file
//! tree is persisted between requests. Unreadable entries are skipped with a
//! log line, never an error.

use crate::cache::TagCache;
use chrono::{DateTime, Utc};
use slate_core::Note;
use std::path::Path;
use walkdir::WalkDir;

/// Recursively discover all `.md` notes under the root.
///
/// Paths are relative to the root and posix-separated. Tags come through the
/// cache, so unchanged files are not re-read. Results are sorted newest
/// first, ties broken by path for a stable order.
pub fn scan_notes(root: &Path, cache: &TagCache) -> Vec<Note> {
    let mut notes = Vec::new();

    for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() || entry.path().extension().is_none_or(|e| e != "md") {
            continue;
        }

        let Some(rel) = relative_posix(root, entry.path()) else {
            continue;
        };
        let metadata = match entry.metadata() {
            Ok(m) => m,
            Err(e) => {
                log::debug!("failed to stat {}: {}", entry.path().display(), e);
                continue;
            }
        };
        let modified = metadata
            .modified()
            .map(DateTime::<Utc>::from)
            .unwrap_or_else(|_| DateTime::<Utc>::UNIX_EPOCH);

        let name = rel
            .rsplit('/')
            .next()
            .unwrap_or(&rel)
            .strip_suffix(".md")
            .unwrap_or(&rel)
            .to_string();
        let folder = match rel.rsplit_once('/') {
            Some((parent, _)) => parent.to_string(),
            None => String::new(),
        };

        notes.push(Note {
            name,
            folder,
            modified,
            size: metadata.len(),
            tags: cache.tags(entry.path()),
            path: rel,
        });
    }

    notes.sort_by(|a, b| b.modified.cmp(&a.modified).then(a.path.cmp(&b.path)));
    notes
}

/// Discover every directory under the root, including empty ones.
///
/// Returns relative posix paths, sorted.
pub fn scan_folders(root: &Path) -> Vec<String> {
    let mut folders: Vec<String> = WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_dir())
        .filter_map(|e| relative_posix(root, e.path()))
        .collect();

    folders.sort();
    folders
}

/// A path relative to the root, joined with forward slashes.
fn relative_posix(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let parts: Vec<&str> = rel.components().filter_map(|c| c.as_os_str().to_str()).collect();
    if parts.is_empty() {
        return None;
    }
    Some(parts.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> TempDir {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("Projects/Active")).unwrap();
        std::fs::create_dir(temp.path().join("Empty")).unwrap();
        std::fs::write(temp.path().join("index.md"), "---\ntags: [home]\n---\n").unwrap();
        std::fs::write(temp.path().join("Projects/plan.md"), "no frontmatter").unwrap();
        std::fs::write(temp.path().join("Projects/notes.txt"), "not a note").unwrap();
        temp
    }

    #[test]
    fn test_scan_notes_finds_markdown_only() {
        let temp = setup();
        let cache = TagCache::new();
        let notes = scan_notes(temp.path(), &cache);

        let mut paths: Vec<&str> = notes.iter().map(|n| n.path.as_str()).collect();
        paths.sort();
        assert_eq!(paths, vec!["Projects/plan.md", "index.md"]);
    }

    #[test]
    fn test_note_fields() {
        let temp = setup();
        let cache = TagCache::new();
        let notes = scan_notes(temp.path(), &cache);

        let index = notes.iter().find(|n| n.path == "index.md").unwrap();
        assert_eq!(index.name, "index");
        assert_eq!(index.folder, "");
        assert_eq!(index.tags, vec!["home"]);
        assert!(index.size > 0);

        let plan = notes.iter().find(|n| n.path == "Projects/plan.md").unwrap();
        assert_eq!(plan.name, "plan");
        assert_eq!(plan.folder, "Projects");
        assert!(plan.tags.is_empty());
    }

    #[test]
    fn test_scan_folders_includes_empty() {
        let temp = setup();
        let folders = scan_folders(temp.path());
        assert_eq!(folders, vec!["Empty", "Projects", "Projects/Active"]);
    }

    #[test]
    fn test_scan_empty_root() {
        let temp = TempDir::new().unwrap();
        let cache = TagCache::new();
        assert!(scan_notes(temp.path(), &cache).is_empty());
        assert!(scan_folders(temp.path()).is_empty());
    }
}
