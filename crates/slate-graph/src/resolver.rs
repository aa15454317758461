//! Link resolver: raw link targets to canonical note or folder paths.
//!
//! Resolution runs an ordered fallback over lookup maps built once per graph
//! build. Notes always take priority over folders, because a note can shadow
//! a folder of the same name. An unresolvable target is dropped, not an
//! error.

use slate_core::Note;
use std::collections::{HashMap, HashSet};

/// A resolved link target: the canonical on-disk path of a note or folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedTarget {
    Note(String),
    Folder(String),
}

impl ResolvedTarget {
    /// The canonical path regardless of kind.
    pub fn path(&self) -> &str {
        match self {
            ResolvedTarget::Note(p) | ResolvedTarget::Folder(p) => p,
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, ResolvedTarget::Folder(_))
    }
}

/// Lookup structures for link resolution, built once per graph build.
#[derive(Debug, Default)]
pub struct LinkIndex {
    /// Note paths, stored both with and without their `.md` suffix
    note_paths: HashSet<String>,
    /// Lowercase note path (both forms) -> canonical path
    note_paths_lower: HashMap<String, String>,
    /// Lowercase file stem -> canonical path
    note_names_lower: HashMap<String, String>,
    folder_paths: HashSet<String>,
    folder_paths_lower: HashMap<String, String>,
    /// Lowercase folder basename -> canonical folder path
    folder_names_lower: HashMap<String, String>,
}

impl LinkIndex {
    /// Build the index from a scan's notes and folders.
    pub fn new(notes: &[Note], folders: &[String]) -> Self {
        let mut index = Self::default();

        for note in notes {
            let path = note.path.clone();
            let bare = note.path_without_extension().to_string();

            index.note_paths.insert(path.clone());
            index.note_paths.insert(bare.clone());
            index.note_paths_lower.insert(path.to_lowercase(), path.clone());
            index.note_paths_lower.insert(bare.to_lowercase(), path.clone());
            index
                .note_names_lower
                .insert(note.name.to_lowercase(), path);
        }

        for folder in folders {
            index.folder_paths.insert(folder.clone());
            index
                .folder_paths_lower
                .insert(folder.to_lowercase(), folder.clone());
            let basename = folder.rsplit('/').next().unwrap_or(folder);
            index
                .folder_names_lower
                .insert(basename.to_lowercase(), folder.clone());
        }

        index
    }

    /// Resolve a wikilink target (`[[Target]]`).
    pub fn resolve_wikilink(&self, target: &str) -> Option<ResolvedTarget> {
        let target = target.trim();
        if target.is_empty() {
            return None;
        }

        self.resolve_note(target)
            .map(ResolvedTarget::Note)
            .or_else(|| self.resolve_folder(target).map(ResolvedTarget::Folder))
    }

    /// Resolve a markdown link path (`[text](path)`).
    ///
    /// Same strategy order as wikilinks, with one extra fallback before the
    /// folder strategies: retry the stem lookup with only the final path
    /// segment, to tolerate relative-link variance (`a/b/c.md` -> `c.md`).
    pub fn resolve_markdown(&self, target: &str) -> Option<ResolvedTarget> {
        let target = target.trim();
        if target.is_empty() {
            return None;
        }

        if let Some(path) = self.resolve_note(target) {
            return Some(ResolvedTarget::Note(path));
        }

        if let Some(segment) = target.rsplit('/').next()
            && segment != target
            && let Some(path) = self.lookup_stem(segment)
        {
            return Some(ResolvedTarget::Note(path));
        }

        self.resolve_folder(target).map(ResolvedTarget::Folder)
    }

    /// Note strategies, in fixed priority order:
    /// 1. exact path match (with or without `.md`)
    /// 2. exact path match after appending `.md`
    /// 3. case-insensitive path match (with/without `.md`)
    /// 4. file stem match, case-insensitive
    fn resolve_note(&self, target: &str) -> Option<String> {
        if self.note_paths.contains(target) {
            return Some(canonical_note_path(target));
        }

        if !target.ends_with(".md") {
            let with_md = format!("{target}.md");
            if self.note_paths.contains(&with_md) {
                return Some(with_md);
            }
        }

        let lower = target.to_lowercase();
        if let Some(path) = self.note_paths_lower.get(&lower) {
            return Some(path.clone());
        }
        if !lower.ends_with(".md")
            && let Some(path) = self.note_paths_lower.get(&format!("{lower}.md"))
        {
            return Some(path.clone());
        }

        self.lookup_stem(target)
    }

    /// Strategy 4: case-insensitive stem lookup, tolerating a `.md` suffix on
    /// the target (`c.md` matches the stem `c`).
    fn lookup_stem(&self, target: &str) -> Option<String> {
        let lower = target.to_lowercase();
        let stem = lower.strip_suffix(".md").unwrap_or(&lower);
        self.note_names_lower.get(stem).cloned()
    }

    /// Folder strategies, tried only after every note strategy missed:
    /// 5. exact folder path
    /// 6. case-insensitive folder path
    /// 7. folder basename, case-insensitive
    fn resolve_folder(&self, target: &str) -> Option<String> {
        if self.folder_paths.contains(target) {
            return Some(target.to_string());
        }

        let lower = target.to_lowercase();
        if let Some(path) = self.folder_paths_lower.get(&lower) {
            return Some(path.clone());
        }

        self.folder_names_lower.get(&lower).cloned()
    }
}

/// The canonical form of a matched note path always carries `.md`.
fn canonical_note_path(target: &str) -> String {
    if target.ends_with(".md") {
        target.to_string()
    } else {
        format!("{target}.md")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn note(path: &str) -> Note {
        let name = path
            .rsplit('/')
            .next()
            .unwrap()
            .strip_suffix(".md")
            .unwrap()
            .to_string();
        let folder = match path.rsplit_once('/') {
            Some((parent, _)) => parent.to_string(),
            None => String::new(),
        };
        Note {
            name,
            path: path.to_string(),
            folder,
            modified: Utc::now(),
            size: 0,
            tags: vec![],
        }
    }

    fn index(notes: &[&str], folders: &[&str]) -> LinkIndex {
        let notes: Vec<Note> = notes.iter().map(|p| note(p)).collect();
        let folders: Vec<String> = folders.iter().map(|f| f.to_string()).collect();
        LinkIndex::new(&notes, &folders)
    }

    #[test]
    fn test_exact_path_with_extension() {
        let idx = index(&["Projects/Active.md"], &[]);
        assert_eq!(
            idx.resolve_wikilink("Projects/Active.md"),
            Some(ResolvedTarget::Note("Projects/Active.md".to_string()))
        );
    }

    #[test]
    fn test_exact_path_without_extension() {
        let idx = index(&["Projects/Active.md"], &[]);
        assert_eq!(
            idx.resolve_wikilink("Projects/Active"),
            Some(ResolvedTarget::Note("Projects/Active.md".to_string()))
        );
    }

    #[test]
    fn test_case_insensitive_path() {
        let idx = index(&["Projects/Active.md"], &[]);
        assert_eq!(
            idx.resolve_wikilink("projects/active"),
            Some(ResolvedTarget::Note("Projects/Active.md".to_string()))
        );
    }

    #[test]
    fn test_stem_match_case_insensitive() {
        // Bare [[ACTIVE]] resolves no matter where the note lives.
        let idx = index(&["Projects/Active.md"], &[]);
        assert_eq!(
            idx.resolve_wikilink("ACTIVE"),
            Some(ResolvedTarget::Note("Projects/Active.md".to_string()))
        );
    }

    #[test]
    fn test_note_shadows_folder() {
        // A note named like a folder wins; without the note, the folder does.
        let idx = index(&["Projects.md"], &["Projects"]);
        assert_eq!(
            idx.resolve_wikilink("Projects"),
            Some(ResolvedTarget::Note("Projects.md".to_string()))
        );

        let idx = index(&[], &["Projects"]);
        assert_eq!(
            idx.resolve_wikilink("Projects"),
            Some(ResolvedTarget::Folder("Projects".to_string()))
        );
    }

    #[test]
    fn test_folder_exact_path() {
        let idx = index(&[], &["Projects", "Projects/Active"]);
        assert_eq!(
            idx.resolve_wikilink("Projects/Active"),
            Some(ResolvedTarget::Folder("Projects/Active".to_string()))
        );
    }

    #[test]
    fn test_folder_case_insensitive() {
        let idx = index(&[], &["Archive"]);
        assert_eq!(
            idx.resolve_wikilink("ARCHIVE"),
            Some(ResolvedTarget::Folder("Archive".to_string()))
        );
    }

    #[test]
    fn test_folder_basename() {
        let idx = index(&[], &["Projects", "Projects/Active"]);
        assert_eq!(
            idx.resolve_wikilink("active"),
            Some(ResolvedTarget::Folder("Projects/Active".to_string()))
        );
    }

    #[test]
    fn test_unresolvable_returns_none() {
        let idx = index(&["a.md"], &["Folder"]);
        assert_eq!(idx.resolve_wikilink("does-not-exist"), None);
        assert_eq!(idx.resolve_markdown("nope/nothing.md"), None);
    }

    #[test]
    fn test_markdown_final_segment_fallback() {
        // Relative link with a wrong prefix still finds the note by filename.
        let idx = index(&["Projects/notes/overview.md"], &[]);
        assert_eq!(
            idx.resolve_markdown("wrong/prefix/overview.md"),
            Some(ResolvedTarget::Note("Projects/notes/overview.md".to_string()))
        );
    }

    #[test]
    fn test_markdown_segment_fallback_before_folders() {
        // The filename fallback beats a folder basename match.
        let idx = index(&["docs/guide.md"], &["other/guide"]);
        assert_eq!(
            idx.resolve_markdown("elsewhere/guide.md"),
            Some(ResolvedTarget::Note("docs/guide.md".to_string()))
        );
    }

    #[test]
    fn test_wikilink_has_no_segment_fallback() {
        let idx = index(&["Projects/notes/overview.md"], &[]);
        assert_eq!(idx.resolve_wikilink("wrong/prefix/overview"), None);
    }

    #[test]
    fn test_markdown_resolves_folder() {
        let idx = index(&[], &["Projects"]);
        assert_eq!(
            idx.resolve_markdown("Projects"),
            Some(ResolvedTarget::Folder("Projects".to_string()))
        );
    }

    #[test]
    fn test_empty_target() {
        let idx = index(&["a.md"], &[]);
        assert_eq!(idx.resolve_wikilink(""), None);
        assert_eq!(idx.resolve_wikilink("   "), None);
    }
}
