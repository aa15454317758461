//! Graph builder: notes, folders, and their links as a node/edge list.

use crate::resolver::{LinkIndex, ResolvedTarget};
use slate_core::{EdgeType, Graph, GraphEdge, GraphNode, Note};
use slate_parser::extract_links;
use std::collections::HashSet;

/// Source of note body text for the builder.
///
/// The vault implements this over the filesystem; tests use an in-memory map.
/// Returning `None` (missing or unreadable note) simply yields no edges for
/// that note.
pub trait ContentProvider {
    fn content(&self, note_path: &str) -> Option<String>;
}

impl ContentProvider for std::collections::HashMap<String, String> {
    fn content(&self, note_path: &str) -> Option<String> {
        self.get(note_path).cloned()
    }
}

/// Assemble the knowledge graph from a scan's notes and folders.
///
/// Emits one node per note (label = file stem) and one per folder (label =
/// basename). Each note's content is read once; extracted targets are
/// resolved through [`LinkIndex`], and successful resolutions become edges.
/// Self-loops are dropped, then edges are deduplicated by `(source, target)`
/// keeping the first occurrence.
pub fn build_graph(notes: &[Note], folders: &[String], provider: &dyn ContentProvider) -> Graph {
    let index = LinkIndex::new(notes, folders);

    let mut nodes = Vec::with_capacity(notes.len() + folders.len());
    let mut edges = Vec::new();

    for note in notes {
        nodes.push(GraphNode::note(&note.path, &note.name));

        let Some(content) = provider.content(&note.path) else {
            log::debug!("no content for {}, skipping link extraction", note.path);
            continue;
        };
        let links = extract_links(&content);

        for target in &links.wikilinks {
            if let Some(resolved) = index.resolve_wikilink(target) {
                push_edge(&mut edges, note, resolved, EdgeType::Wikilink, EdgeType::WikilinkFolder);
            }
        }
        for target in &links.markdown_links {
            if let Some(resolved) = index.resolve_markdown(target) {
                push_edge(&mut edges, note, resolved, EdgeType::Markdown, EdgeType::MarkdownFolder);
            }
        }
    }

    for folder in folders {
        let basename = folder.rsplit('/').next().unwrap_or(folder);
        nodes.push(GraphNode::folder(folder, basename));
    }

    Graph {
        nodes,
        edges: dedup_edges(edges),
    }
}

/// Append an edge for a resolved target unless it is a self-loop.
fn push_edge(
    edges: &mut Vec<GraphEdge>,
    source: &Note,
    resolved: ResolvedTarget,
    note_type: EdgeType,
    folder_type: EdgeType,
) {
    let edge_type = if resolved.is_folder() {
        folder_type
    } else {
        note_type
    };
    let target = match resolved {
        ResolvedTarget::Note(p) | ResolvedTarget::Folder(p) => p,
    };

    if target == source.path {
        return;
    }

    edges.push(GraphEdge {
        source: source.path.clone(),
        target,
        edge_type,
    });
}

/// Deduplicate by `(source, target)`, preserving discovery order. The type of
/// the first discovered edge wins.
fn dedup_edges(edges: Vec<GraphEdge>) -> Vec<GraphEdge> {
    let mut seen = HashSet::new();
    edges
        .into_iter()
        .filter(|e| seen.insert((e.source.clone(), e.target.clone())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::collections::HashMap;

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

    fn contents(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_note_and_folder_nodes() {
        let notes = vec![note("index.md"), note("Projects/Active.md")];
        let folders = vec!["Projects".to_string()];
        let graph = build_graph(&notes, &folders, &contents(&[]));

        assert_eq!(graph.node_count(), 3);
        let index_node = graph.nodes.iter().find(|n| n.id == "index.md").unwrap();
        assert_eq!(index_node.label, "index");
        let folder_node = graph.nodes.iter().find(|n| n.id == "Projects").unwrap();
        assert_eq!(folder_node.label, "Projects");
        assert_eq!(
            serde_json::to_value(&folder_node.node_type).unwrap(),
            "folder"
        );
    }

    #[test]
    fn test_wikilink_edge() {
        let notes = vec![note("a.md"), note("b.md")];
        let provider = contents(&[("a.md", "Link to [[b]]")]);
        let graph = build_graph(&notes, &[], &provider);

        assert_eq!(graph.edge_count(), 1);
        let edge = &graph.edges[0];
        assert_eq!(edge.source, "a.md");
        assert_eq!(edge.target, "b.md");
        assert_eq!(edge.edge_type, EdgeType::Wikilink);
    }

    #[test]
    fn test_folder_edge_types() {
        let notes = vec![note("index.md")];
        let folders = vec!["Projects".to_string()];
        let provider = contents(&[("index.md", "[[Projects]] and [see](Projects)")]);
        let graph = build_graph(&notes, &folders, &provider);

        let types: Vec<EdgeType> = graph.edges.iter().map(|e| e.edge_type).collect();
        assert_eq!(types, vec![EdgeType::WikilinkFolder]);
        // The markdown edge to the same (source, target) pair was deduped;
        // the first discovered type wins.
        assert_eq!(graph.edges[0].target, "Projects");
    }

    #[test]
    fn test_markdown_edge_to_distinct_folder() {
        let notes = vec![note("index.md")];
        let folders = vec!["Projects".to_string(), "Archive".to_string()];
        let provider = contents(&[("index.md", "[[Projects]] and [old](Archive)")]);
        let graph = build_graph(&notes, &folders, &provider);

        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.edges[1].target, "Archive");
        assert_eq!(graph.edges[1].edge_type, EdgeType::MarkdownFolder);
    }

    #[test]
    fn test_duplicate_links_deduped() {
        let notes = vec![note("a.md"), note("b.md")];
        let provider = contents(&[("a.md", "[[b]] and again [[b]]")]);
        let graph = build_graph(&notes, &[], &provider);

        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_self_link_excluded() {
        let notes = vec![note("a.md")];
        let provider = contents(&[("a.md", "I link to [[a]] myself")]);
        let graph = build_graph(&notes, &[], &provider);

        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_unresolvable_link_dropped() {
        let notes = vec![note("a.md")];
        let provider = contents(&[("a.md", "[[nowhere]] [gone](missing.md)")]);
        let graph = build_graph(&notes, &[], &provider);

        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.node_count(), 1);
    }

    #[test]
    fn test_missing_content_skipped() {
        let notes = vec![note("a.md"), note("b.md")];
        let provider = contents(&[("b.md", "[[a]]")]);
        let graph = build_graph(&notes, &[], &provider);

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edges[0].source, "b.md");
    }

    #[test]
    fn test_case_insensitive_folder_links() {
        let notes = vec![note("case_test.md")];
        let folders = vec!["Projects".to_string(), "Archive".to_string(), "0_Inbox".to_string()];
        let provider = contents(&[("case_test.md", "[[projects]], [[ARCHIVE]], [[0_inbox]]")]);
        let graph = build_graph(&notes, &folders, &provider);

        let targets: Vec<&str> = graph.edges.iter().map(|e| e.target.as_str()).collect();
        assert_eq!(targets, vec!["Projects", "Archive", "0_Inbox"]);
    }

    #[test]
    fn test_graph_serializes_to_wire_shape() {
        let notes = vec![note("a.md"), note("b.md")];
        let provider = contents(&[("a.md", "[[b]]")]);
        let graph = build_graph(&notes, &[], &provider);

        let json = serde_json::to_value(&graph).unwrap();
        assert_eq!(json["nodes"][0]["type"], "note");
        assert_eq!(json["edges"][0]["type"], "wikilink");
    }
}
