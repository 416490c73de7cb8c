//! Favicon export module
//!
//! This module orchestrates rendering every requested size and packing the
//! results into one container.

mod favicon_export;

#[cfg(test)]
mod tests;

pub use favicon_export::{ExportSummary, FaviconExporter};
