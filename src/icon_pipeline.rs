//! Icon generation pipeline
//!
//! This module draws the switch icon at several resolutions and packs the
//! results into a multi-size ICO container, with separate modules for raster
//! drawing, icon composition, container encoding and export orchestration.

pub mod raster;
pub mod compose;
pub mod container;
pub mod export;
pub mod common;

pub use common::{
    ExportError,
    Result,
};

pub use raster::{
    BoundingBox,
    Painter,
};

pub use compose::{
    IconRenderer,
    SwitchIconRenderer,
    SwitchLayout,
};

pub use container::{
    IcoEncoding,
    ExportConfig,
    ExportConfigBuilder,
    IconWriter,
    StandardIcoWriter,
};

pub use export::{
    ExportSummary,
    FaviconExporter,
};
