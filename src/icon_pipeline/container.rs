//! ICO container module
//!
//! This module packs finished rasters into a multi-resolution ICO file.

mod writer;
mod standard_ico_writer;
pub mod types;

pub use writer::IconWriter;
pub use standard_ico_writer::StandardIcoWriter;
pub use types::{IcoEncoding, ExportConfig, ExportConfigBuilder, MAX_ICO_SIZE, MIN_ICO_SIZE};
