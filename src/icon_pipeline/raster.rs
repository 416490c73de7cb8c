//! Raster drawing module
//!
//! This module provides the filled-shape primitives the icon is built from.

mod painter;
pub mod types;

pub use painter::Painter;
pub use types::BoundingBox;
