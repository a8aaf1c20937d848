//! Output rendering for a split run.
//!
//! - [`document`] — builds the npm / NuGet notice documents and the summary report text.
//! - [`writer`] — writes every document to all of its configured destinations.
//! - [`terminal`] — console progress lines, verbose title tables and `--online` findings.

pub mod document;
pub mod terminal;
pub mod writer;
