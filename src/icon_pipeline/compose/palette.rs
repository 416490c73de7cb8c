//! Fixed icon palette

use image::Rgba;

/// Outer ring of the background panel.
pub const BACKGROUND_OUTER: Rgba<u8> = Rgba([22, 27, 44, 255]);
/// Background panel face, inset by one pixel.
pub const BACKGROUND_INNER: Rgba<u8> = Rgba([15, 17, 28, 255]);

/// Switch track in the "on" state.
pub const TRACK_ON: Rgba<u8> = Rgba([22, 163, 74, 255]);
/// Glossy band across the top of the track.
pub const TRACK_SHEEN: Rgba<u8> = Rgba([74, 222, 128, 60]);

pub const KNOB_FACE: Rgba<u8> = Rgba([235, 238, 245, 255]);
pub const KNOB_SHADOW: Rgba<u8> = Rgba([0, 0, 0, 80]);
pub const KNOB_HIGHLIGHT: Rgba<u8> = Rgba([255, 255, 255, 160]);

pub const POWER_GLYPH: Rgba<u8> = Rgba([22, 163, 74, 220]);
