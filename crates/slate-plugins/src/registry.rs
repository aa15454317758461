//! Plugin registry: explicit registration order and persisted enabled state.

use crate::plugin::Plugin;
use serde::{Deserialize, Serialize};
use slate_core::{Error, Result};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

struct RegisteredPlugin {
    id: String,
    enabled: AtomicBool,
    plugin: Box<dyn Plugin>,
}

/// Listing entry for a registered plugin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginInfo {
    pub id: String,
    pub name: String,
    pub version: String,
    pub enabled: bool,
}

/// Holds plugins in an explicit, stable order.
///
/// Hook execution follows registration order, never map iteration order.
/// Enabled flags are runtime-mutable and, when a state file is configured,
/// persisted as an id -> bool JSON map so restarts keep user choices.
/// State-file problems are logged and non-fatal.
#[derive(Default)]
pub struct PluginRegistry {
    plugins: Vec<RegisteredPlugin>,
    state_file: Option<PathBuf>,
    saved_state: BTreeMap<String, bool>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry that persists enabled state to the given file.
    pub fn with_state_file(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let saved_state = load_state(&path);
        Self {
            plugins: Vec::new(),
            state_file: Some(path),
            saved_state,
        }
    }

    /// Register a plugin under an id. Enabled by default unless the state
    /// file says otherwise. Registration order is execution order.
    pub fn register(&mut self, id: impl Into<String>, plugin: Box<dyn Plugin>) {
        let id = id.into();
        let enabled = self.saved_state.get(&id).copied().unwrap_or(true);
        log::info!(
            "plugin '{}' registered ({})",
            id,
            if enabled { "enabled" } else { "disabled" }
        );
        self.plugins.push(RegisteredPlugin {
            id,
            enabled: AtomicBool::new(enabled),
            plugin,
        });
    }

    /// Enable a plugin and persist the change.
    pub fn enable(&self, id: &str) -> Result<()> {
        self.set_enabled(id, true)
    }

    /// Disable a plugin and persist the change.
    pub fn disable(&self, id: &str) -> Result<()> {
        self.set_enabled(id, false)
    }

    fn set_enabled(&self, id: &str, enabled: bool) -> Result<()> {
        let plugin = self
            .plugins
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| Error::not_found(format!("plugin '{id}'")))?;
        plugin.enabled.store(enabled, Ordering::SeqCst);
        self.persist_state();
        Ok(())
    }

    /// Whether a plugin is currently enabled, or `None` for an unknown id.
    pub fn is_enabled(&self, id: &str) -> Option<bool> {
        self.plugins
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.enabled.load(Ordering::SeqCst))
    }

    /// List all registered plugins in registration order.
    pub fn list(&self) -> Vec<PluginInfo> {
        self.plugins
            .iter()
            .map(|p| PluginInfo {
                id: p.id.clone(),
                name: p.plugin.name().to_string(),
                version: p.plugin.version().to_string(),
                enabled: p.enabled.load(Ordering::SeqCst),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// Write the current id -> enabled map to the state file, if configured.
    pub fn persist_state(&self) {
        let Some(path) = &self.state_file else {
            return;
        };

        let state: BTreeMap<&str, bool> = self
            .plugins
            .iter()
            .map(|p| (p.id.as_str(), p.enabled.load(Ordering::SeqCst)))
            .collect();

        match serde_json::to_string_pretty(&state) {
            Ok(json) => {
                if let Err(e) = std::fs::write(path, json) {
                    log::warn!("failed to save plugin state to {}: {}", path.display(), e);
                }
            }
            Err(e) => log::warn!("failed to serialize plugin state: {}", e),
        }
    }

    /// Run a content-transform hook over every enabled plugin, threading the
    /// value through the chain. `Some` replaces the running value, `None`
    /// keeps it; an `Err` is logged and the chain continues.
    pub(crate) fn transform<F>(&self, hook: &str, initial: &str, apply: F) -> String
    where
        F: Fn(&dyn Plugin, &str) -> Result<Option<String>>,
    {
        let mut value = initial.to_string();
        for registered in self.enabled_plugins() {
            match apply(registered.plugin.as_ref(), &value) {
                Ok(Some(transformed)) => value = transformed,
                Ok(None) => {}
                Err(e) => {
                    log::error!("plugin '{}' error in {}: {}", registered.id, hook, e);
                }
            }
        }
        value
    }

    /// Run a void hook over every enabled plugin for side effects only.
    pub(crate) fn notify<F>(&self, hook: &str, apply: F)
    where
        F: Fn(&dyn Plugin) -> Result<()>,
    {
        for registered in self.enabled_plugins() {
            if let Err(e) = apply(registered.plugin.as_ref()) {
                log::error!("plugin '{}' error in {}: {}", registered.id, hook, e);
            }
        }
    }

    fn enabled_plugins(&self) -> impl Iterator<Item = &RegisteredPlugin> {
        self.plugins
            .iter()
            .filter(|p| p.enabled.load(Ordering::SeqCst))
    }
}

fn load_state(path: &std::path::Path) -> BTreeMap<String, bool> {
    if !path.exists() {
        return BTreeMap::new();
    }
    match std::fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str(&content) {
            Ok(state) => state,
            Err(e) => {
                log::warn!("invalid plugin state file {}: {}", path.display(), e);
                BTreeMap::new()
            }
        },
        Err(e) => {
            log::warn!("failed to read plugin state file {}: {}", path.display(), e);
            BTreeMap::new()
        }
    }
}
