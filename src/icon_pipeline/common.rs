//! Common utilities module
//!
//! This module contains shared utilities used across the icon pipeline.

pub mod error;

pub use error::{ExportError, Result};
