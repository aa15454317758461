//! The plugin capability interface.
//!
//! Every lifecycle hook is a method with a no-op default, so "does this
//! plugin implement X" is an interface question, not runtime reflection.
//! Plugins are compiled in and registered explicitly; there is no dynamic
//! code loading.

use slate_core::Result;

/// A compiled-in plugin. Implement only the hooks you care about.
///
/// Transform hooks return `Ok(Some(new_value))` to replace the value threaded
/// through the pipeline, or `Ok(None)` to leave it unchanged. An `Err` from
/// any hook is logged against the plugin's id and never stops the pipeline.
pub trait Plugin: Send + Sync {
    /// Human-readable plugin name.
    fn name(&self) -> &str;

    /// Plugin version string.
    fn version(&self) -> &str {
        "1.0.0"
    }

    /// A note was loaded from disk; may transform the content before it is
    /// shown (e.g. decrypt).
    fn on_note_load(&self, _note_path: &str, _content: &str) -> Result<Option<String>> {
        Ok(None)
    }

    /// A note is about to be saved; may transform the content before it is
    /// written (e.g. encrypt).
    fn on_note_save(&self, _note_path: &str, _content: &str) -> Result<Option<String>> {
        Ok(None)
    }

    /// A new note is being created, before its first save; may rewrite the
    /// initial content.
    fn on_note_create(&self, _note_path: &str, _initial_content: &str) -> Result<Option<String>> {
        Ok(None)
    }

    /// A note was deleted.
    fn on_note_delete(&self, _note_path: &str) -> Result<()> {
        Ok(())
    }

    /// A search completed.
    fn on_search(&self, _query: &str, _results: &[serde_json::Value]) -> Result<()> {
        Ok(())
    }

    /// The application started up. Useful for sync or health checks.
    fn on_app_startup(&self) -> Result<()> {
        Ok(())
    }
}
