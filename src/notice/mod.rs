//! Notice file parsing.
//!
//! - [`separator`] — separator line detection and double-separator tracking.
//! - [`classifier`] — decides whether a block title belongs to npm or NuGet.
//! - [`splitter`] — the line scanner that segments a notice stream into entries.
//! - [`title`] — extracts package name / version from a title for registry lookups.

pub mod classifier;
pub mod separator;
pub mod splitter;
pub mod title;
