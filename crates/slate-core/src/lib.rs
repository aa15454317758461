//! # Slate Core
//!
//! Core data models, error types, and configuration for the Slate content
//! indexing engine. This crate defines the canonical types all other crates
//! depend on.
//!
//! ## Architecture Principles
//!
//! - **Zero Panic in Libraries**: fallible operations return `Result<T, Error>`
//! - **Local Recovery**: malformed input degrades to an empty result, it does
//!   not abort indexing for the rest of the vault
//! - **Type-Driven Design**: node and edge kinds are enums, not strings
//!
//! ## Core Modules
//!
//! - [`models`] - Notes, graph nodes/edges, extracted link targets
//! - [`error`] - Error types and the `Result` alias
//! - [`config`] - Engine configuration

pub mod config;
pub mod error;
pub mod models;

pub use config::EngineConfig;
pub use error::{Error, Result};
pub use models::*;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::EngineConfig;
    pub use crate::error::{Error, Result};
    pub use crate::models::{
        EdgeType, ExtractedLinks, Graph, GraphEdge, GraphNode, NodeType, Note,
    };
}
