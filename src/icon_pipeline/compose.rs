//! Icon composition module
//!
//! This module lays out and paints the switch icon for a single pixel size.

mod renderer;
mod switch_renderer;
pub mod layout;
pub mod palette;

pub use renderer::IconRenderer;
pub use switch_renderer::SwitchIconRenderer;
pub use layout::SwitchLayout;
