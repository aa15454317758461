//! # Slate
//!
//! Content indexing and link resolution engine for markdown knowledge bases.
//!
//! Notes are plain `.md` files in folders; Slate derives the structured view
//! of them: a normalized tag index, resolved cross-note links, and a
//! renderable graph. Derived data is never persisted; per-file tag parses
//! are memoized against mtime and everything else is rebuilt per request.
//! Content mutations flow through a plugin hook pipeline that can observe or
//! transform them.
//!
//! The [`Engine`] is the composition root: it owns the vault (notes root +
//! tag cache) and the plugin registry, and exposes the surface the HTTP
//! layer consumes. File save/delete/move primitives stay with the caller;
//! the engine only prepares content (hooks) and keeps its cache honest
//! (invalidation).
//!
//! ```no_run
//! use slate::{Engine, EngineConfig};
//!
//! # fn main() -> slate::Result<()> {
//! let engine = Engine::new(EngineConfig::new("/srv/notes"))?;
//! engine.startup();
//!
//! let tags = engine.all_tags();
//! let graph = engine.build_graph();
//! println!("{} tags, {} nodes", tags.len(), graph.node_count());
//! # Ok(())
//! # }
//! ```

use slate_graph::build_graph;
use slate_vault::Vault;
use std::collections::BTreeMap;

// Re-exported so consumers need only this crate.
pub use slate_core::{
    EdgeType, EngineConfig, Error, ExtractedLinks, Graph, GraphEdge, GraphNode, NodeType, Note,
    Result,
};
pub use slate_graph::{ContentProvider, LinkIndex, ResolvedTarget};
pub use slate_parser::{extract_links, parse_tags};
pub use slate_plugins::{Plugin, PluginInfo, PluginRegistry};
pub use slate_vault::TagCache;

/// The engine's composition root.
pub struct Engine {
    vault: Vault,
    plugins: PluginRegistry,
}

impl Engine {
    /// Create an engine from a validated configuration.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;

        let plugins = match &config.plugin_state_file {
            Some(path) => PluginRegistry::with_state_file(path),
            None => PluginRegistry::new(),
        };

        Ok(Self {
            vault: Vault::new(&config.notes_dir),
            plugins,
        })
    }

    /// Register a plugin. Call before [`Engine::startup`]; registration
    /// order is hook execution order.
    pub fn register_plugin(&mut self, id: impl Into<String>, plugin: Box<dyn Plugin>) {
        self.plugins.register(id, plugin);
    }

    /// Announce startup to every enabled plugin and persist the registry's
    /// current state.
    pub fn startup(&self) {
        log::info!("engine starting with {} plugin(s)", self.plugins.len());
        self.plugins.persist_state();
        self.plugins.notify_startup();
    }

    // --- tag index ---------------------------------------------------------

    /// Tag usage counts across all notes, sorted by tag.
    pub fn all_tags(&self) -> BTreeMap<String, usize> {
        self.vault.all_tags()
    }

    /// Notes carrying a tag, matched case-insensitively.
    pub fn notes_by_tag(&self, tag: &str) -> Vec<Note> {
        self.vault.notes_by_tag(tag)
    }

    /// Cached tags for one note (relative path under the notes root).
    pub fn tags_cached(&self, note_path: &str) -> Vec<String> {
        self.vault.tags_cached(note_path)
    }

    /// All notes, newest first.
    pub fn notes(&self) -> Vec<Note> {
        self.vault.notes()
    }

    /// All folders, including empty ones.
    pub fn folders(&self) -> Vec<String> {
        self.vault.folders()
    }

    // --- graph -------------------------------------------------------------

    /// Assemble the knowledge graph from the current on-disk state.
    pub fn build_graph(&self) -> Graph {
        let notes = self.vault.notes();
        let folders = self.vault.folders();
        build_graph(&notes, &folders, &self.vault)
    }

    // --- content lifecycle -------------------------------------------------

    /// Load a note's content, transformed through `on_note_load`.
    pub fn load_note(&self, note_path: &str) -> Option<String> {
        let content = self.vault.note_content(note_path)?;
        Some(self.plugins.run_note_load(note_path, &content))
    }

    /// Content to actually write for a save, after `on_note_save`
    /// transformations. The caller performs the write.
    pub fn prepare_save(&self, note_path: &str, content: &str) -> String {
        self.plugins.run_note_save(note_path, content)
    }

    /// Initial content for a brand-new note, after `on_note_create`
    /// transformations. The caller performs the write.
    pub fn prepare_create(&self, note_path: &str, initial_content: &str) -> String {
        self.plugins.run_note_create(note_path, initial_content)
    }

    /// A note was deleted: drop its cache entry and notify plugins.
    pub fn note_deleted(&self, note_path: &str) {
        self.vault.invalidate_note(note_path);
        self.plugins.notify_note_delete(note_path);
    }

    /// A note was moved: drop the old path's cache entry. The new path is
    /// parsed lazily on its next read.
    pub fn note_moved(&self, old_path: &str) {
        self.vault.invalidate_note(old_path);
    }

    /// A folder was deleted or moved away: drop every cache entry under it.
    pub fn folder_removed(&self, folder_path: &str) {
        self.vault.invalidate_folder(folder_path);
    }

    /// A search completed: notify plugins with the query and results.
    pub fn search_performed(&self, query: &str, results: &[serde_json::Value]) {
        self.plugins.notify_search(query, results);
    }

    // --- plugin management -------------------------------------------------

    /// List registered plugins in execution order.
    pub fn list_plugins(&self) -> Vec<PluginInfo> {
        self.plugins.list()
    }

    /// Enable a plugin by id and persist the change.
    pub fn enable_plugin(&self, id: &str) -> Result<()> {
        self.plugins.enable(id)
    }

    /// Disable a plugin by id and persist the change.
    pub fn disable_plugin(&self, id: &str) -> Result<()> {
        self.plugins.disable(id)
    }
}
