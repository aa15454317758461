//! # Slate Plugins
//!
//! The engine's extensibility point: a fixed set of lifecycle hooks plugins
//! may implement, a registry with an explicit execution order and persisted
//! enabled state, and the pipeline that dispatches hooks with per-plugin
//! failure isolation.
//!
//! ## Hooks
//!
//! - `on_note_load` / `on_note_save` / `on_note_create` - content-transform
//!   hooks; each enabled plugin may replace the threaded value
//! - `on_note_delete` / `on_search` / `on_app_startup` - void hooks, fired
//!   for side effects only
//!
//! ## Example
//!
//! ```
//! use slate_plugins::{Plugin, PluginRegistry};
//! use slate_core::Result;
//!
//! struct Shout;
//! impl Plugin for Shout {
//!     fn name(&self) -> &str { "Shout" }
//!     fn on_note_save(&self, _path: &str, content: &str) -> Result<Option<String>> {
//!         Ok(Some(content.to_uppercase()))
//!     }
//! }
//!
//! let mut registry = PluginRegistry::new();
//! registry.register("shout", Box::new(Shout));
//! assert_eq!(registry.run_note_save("a.md", "hi"), "HI");
//! ```

mod pipeline;
mod plugin;
mod registry;

pub use plugin::Plugin;
pub use registry::{PluginInfo, PluginRegistry};
