//! Vault: the notes root plus its tag cache.

use crate::cache::TagCache;
use crate::scan::{scan_folders, scan_notes};
use slate_core::Note;
use slate_graph::ContentProvider;
use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};

/// A notes directory and the derived state kept against it.
///
/// All queries are scan-backed: the vault holds no note list of its own, only
/// the per-file tag memo. Relative note paths coming from callers are treated
/// as untrusted and are rejected if they escape the root.
#[derive(Debug)]
pub struct Vault {
    root: PathBuf,
    tag_cache: TagCache,
}

impl Vault {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            tag_cache: TagCache::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn tag_cache(&self) -> &TagCache {
        &self.tag_cache
    }

    /// All notes under the root, newest first.
    pub fn notes(&self) -> Vec<Note> {
        scan_notes(&self.root, &self.tag_cache)
    }

    /// All folders under the root, including empty ones, sorted.
    pub fn folders(&self) -> Vec<String> {
        scan_folders(&self.root)
    }

    /// Tag usage counts across the whole vault, sorted by tag.
    pub fn all_tags(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for note in self.notes() {
            for tag in note.tags {
                *counts.entry(tag).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Notes carrying a tag, matched case-insensitively.
    pub fn notes_by_tag(&self, tag: &str) -> Vec<Note> {
        let tag_lower = tag.to_lowercase();
        self.notes()
            .into_iter()
            .filter(|note| note.tags.iter().any(|t| *t == tag_lower))
            .collect()
    }

    /// Cached tags for a single note path.
    pub fn tags_cached(&self, note_path: &str) -> Vec<String> {
        match self.resolve(note_path) {
            Some(path) => self.tag_cache.tags(&path),
            None => Vec::new(),
        }
    }

    /// Read a note's body, or `None` for a missing, unreadable, or escaping
    /// path.
    pub fn note_content(&self, note_path: &str) -> Option<String> {
        let path = self.resolve(note_path)?;
        match std::fs::read_to_string(&path) {
            Ok(content) => Some(content),
            Err(e) => {
                log::debug!("failed to read {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Drop cached state for a deleted or moved note.
    pub fn invalidate_note(&self, note_path: &str) {
        if let Some(path) = self.resolve(note_path) {
            self.tag_cache.invalidate(&path);
        }
    }

    /// Drop cached state for everything under a deleted or moved folder.
    pub fn invalidate_folder(&self, folder_path: &str) {
        if let Some(path) = self.resolve(folder_path) {
            self.tag_cache.invalidate_prefix(&path);
        }
    }

    /// Join a caller-supplied relative path onto the root, refusing absolute
    /// paths and `..` traversal.
    fn resolve(&self, rel: &str) -> Option<PathBuf> {
        let rel_path = Path::new(rel);
        if rel_path.is_absolute() {
            log::warn!("rejected absolute note path: {rel}");
            return None;
        }
        for component in rel_path.components() {
            match component {
                Component::Normal(_) | Component::CurDir => {}
                _ => {
                    log::warn!("rejected traversal in note path: {rel}");
                    return None;
                }
            }
        }
        Some(self.root.join(rel_path))
    }
}

impl ContentProvider for Vault {
    fn content(&self, note_path: &str) -> Option<String> {
        self.note_content(note_path)
    }
}
