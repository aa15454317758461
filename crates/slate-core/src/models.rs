//! Core data models shared by all engine crates.
//!
//! Paths are always relative to the notes root and posix-separated, so the
//! same string works as a map key, a graph node id, and a JSON value.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A markdown note discovered during a directory scan.
///
/// Identity is `path`. A note exists while a scan finds the file and is gone
/// once it does not; nothing is persisted between scans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// File stem, without the `.md` extension
    pub name: String,
    /// Relative posix-separated path, unique within the vault
    pub path: String,
    /// Parent folder path, empty string for the vault root
    pub folder: String,
    /// Filesystem modification timestamp
    pub modified: DateTime<Utc>,
    /// File size in bytes
    pub size: u64,
    /// Sorted, deduplicated tags from the note's frontmatter
    pub tags: Vec<String>,
}

impl Note {
    /// The note's path without its `.md` suffix.
    pub fn path_without_extension(&self) -> &str {
        self.path.strip_suffix(".md").unwrap_or(&self.path)
    }
}

/// Graph node kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    Note,
    Folder,
}

/// Graph edge kind. The `-folder` variants mark links whose target resolved
/// to a folder rather than a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdgeType {
    #[serde(rename = "wikilink")]
    Wikilink,
    #[serde(rename = "wikilink-folder")]
    WikilinkFolder,
    #[serde(rename = "markdown")]
    Markdown,
    #[serde(rename = "markdown-folder")]
    MarkdownFolder,
}

/// A node in the renderable knowledge graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    /// Note or folder path
    pub id: String,
    /// Display label: note stem or folder basename
    pub label: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
}

impl GraphNode {
    /// Create a note node.
    pub fn note(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            node_type: NodeType::Note,
        }
    }

    /// Create a folder node.
    pub fn folder(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            node_type: NodeType::Folder,
        }
    }
}

/// A directed edge in the knowledge graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
    #[serde(rename = "type")]
    pub edge_type: EdgeType,
}

/// The assembled knowledge graph, ready for JSON serialization.
///
/// Invariants: no duplicate `(source, target)` edge pairs (the first
/// discovered edge wins) and no self-loops.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl Graph {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

/// Raw link targets pulled out of a note body, before resolution.
///
/// Wikilink targets are the trimmed text before any `|` display alias.
/// Markdown link paths are fragment-stripped, percent-decoded, and have any
/// leading `./` removed; external and anchor-only links are never included.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedLinks {
    pub wikilinks: Vec<String>,
    pub markdown_links: Vec<String>,
}

impl ExtractedLinks {
    pub fn is_empty(&self) -> bool {
        self.wikilinks.is_empty() && self.markdown_links.is_empty()
    }

    pub fn len(&self) -> usize {
        self.wikilinks.len() + self.markdown_links.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_type_wire_names() {
        let json = serde_json::to_string(&EdgeType::WikilinkFolder).unwrap();
        assert_eq!(json, "\"wikilink-folder\"");
        let json = serde_json::to_string(&EdgeType::Markdown).unwrap();
        assert_eq!(json, "\"markdown\"");
    }

    #[test]
    fn test_node_serialization_shape() {
        let node = GraphNode::note("Projects/Active.md", "Active");
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["id"], "Projects/Active.md");
        assert_eq!(json["label"], "Active");
        assert_eq!(json["type"], "note");
    }

    #[test]
    fn test_edge_serialization_shape() {
        let edge = GraphEdge {
            source: "a.md".to_string(),
            target: "b.md".to_string(),
            edge_type: EdgeType::Wikilink,
        };
        let json = serde_json::to_value(&edge).unwrap();
        assert_eq!(json["source"], "a.md");
        assert_eq!(json["target"], "b.md");
        assert_eq!(json["type"], "wikilink");
    }

    #[test]
    fn test_path_without_extension() {
        let note = Note {
            name: "Active".to_string(),
            path: "Projects/Active.md".to_string(),
            folder: "Projects".to_string(),
            modified: Utc::now(),
            size: 0,
            tags: vec![],
        };
        assert_eq!(note.path_without_extension(), "Projects/Active");
    }
}
