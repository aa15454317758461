//! # Slate Vault
//!
//! Vault scanning, tag caching, and tag index queries.
//!
//! A [`Vault`] is a notes root plus a [`TagCache`]. Scans rediscover the file
//! tree on every call; only per-file tag parses are memoized, keyed by mtime,
//! so unchanged notes are never re-read. The tag index (counts, notes by tag)
//! is folded from cached tags at query time and never persisted.

mod cache;
mod scan;
mod vault;

pub use cache::TagCache;
pub use scan::{scan_folders, scan_notes};
pub use vault::Vault;
