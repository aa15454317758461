//! Hook pipeline: the typed entry points collaborators call.
//!
//! Each entry point iterates enabled plugins in registration order. Content
//! hooks chain transformations; void hooks fire for side effects. A failing
//! plugin is logged and skipped, so one misbehaving plugin never blocks the
//! pipeline or its peers. There is no rollback: a plugin that transformed
//! content earlier and fails later leaves its transformation applied.

use crate::registry::PluginRegistry;

impl PluginRegistry {
    /// Thread loaded note content through every enabled plugin's
    /// `on_note_load` and return the final value.
    pub fn run_note_load(&self, note_path: &str, content: &str) -> String {
        self.transform("on_note_load", content, |plugin, value| {
            plugin.on_note_load(note_path, value)
        })
    }

    /// Thread to-be-saved note content through every enabled plugin's
    /// `on_note_save` and return the final value.
    pub fn run_note_save(&self, note_path: &str, content: &str) -> String {
        self.transform("on_note_save", content, |plugin, value| {
            plugin.on_note_save(note_path, value)
        })
    }

    /// Thread a new note's initial content through every enabled plugin's
    /// `on_note_create` and return the final value.
    pub fn run_note_create(&self, note_path: &str, initial_content: &str) -> String {
        self.transform("on_note_create", initial_content, |plugin, value| {
            plugin.on_note_create(note_path, value)
        })
    }

    /// Fire `on_note_delete` on every enabled plugin.
    pub fn notify_note_delete(&self, note_path: &str) {
        self.notify("on_note_delete", |plugin| plugin.on_note_delete(note_path));
    }

    /// Fire `on_search` on every enabled plugin.
    pub fn notify_search(&self, query: &str, results: &[serde_json::Value]) {
        self.notify("on_search", |plugin| plugin.on_search(query, results));
    }

    /// Fire `on_app_startup` on every enabled plugin.
    pub fn notify_startup(&self) {
        self.notify("on_app_startup", |plugin| plugin.on_app_startup());
    }
}
