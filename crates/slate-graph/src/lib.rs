//! # Slate Graph
//!
//! Link resolution and knowledge graph assembly.
//!
//! A graph build composes the rest of the engine: a scan's notes and folders
//! become nodes, and every note body is run through `slate-parser`'s link
//! extractor. Raw targets are resolved against a [`LinkIndex`] using an
//! ordered fallback (exact path, appended `.md`, case-insensitive path, file
//! stem, then folder strategies); notes shadow folders of the same name.
//!
//! ```
//! use slate_graph::{build_graph, LinkIndex, ResolvedTarget};
//! # use slate_core::Note;
//! # use chrono::Utc;
//! # let note = Note {
//! #     name: "Active".into(), path: "Projects/Active.md".into(),
//! #     folder: "Projects".into(), modified: Utc::now(), size: 0, tags: vec![],
//! # };
//!
//! let index = LinkIndex::new(std::slice::from_ref(&note), &[]);
//! assert_eq!(
//!     index.resolve_wikilink("active"),
//!     Some(ResolvedTarget::Note("Projects/Active.md".into()))
//! );
//! ```

mod builder;
mod resolver;

pub use builder::{ContentProvider, build_graph};
pub use resolver::{LinkIndex, ResolvedTarget};
