//! Size-proportional geometry of the switch icon.
//!
//! Every length is a fixed ratio of the icon size, truncated to whole pixels,
//! so all sizes are scaled copies of one design.

use crate::icon_pipeline::raster::BoundingBox;

pub const BACKGROUND_RADIUS_RATIO: f64 = 0.22;

pub const TRACK_MARGIN_RATIO: f64 = 0.125;
pub const TRACK_TOP_RATIO: f64 = 0.34;
pub const TRACK_BOTTOM_RATIO: f64 = 0.66;

/// Knob radius relative to the track height, not the icon size.
pub const KNOB_RADIUS_RATIO: f64 = 0.58;

/// Shadow offset and glyph stroke are `size / STROKE_DIVISOR`, at least 1px.
pub const STROKE_DIVISOR: i64 = 32;

pub const MIN_SHEEN_HEIGHT: i64 = 2;

fn scaled(size: i64, ratio: f64) -> i64 {
    (size as f64 * ratio) as i64
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchLayout {
    pub size: i64,
    pub background_radius: i64,
    pub track: BoundingBox,
    pub track_radius: i64,
    pub sheen_width: i64,
    pub sheen_height: i64,
    pub knob_cx: i64,
    pub knob_cy: i64,
    pub knob_radius: i64,
    pub shadow_offset: i64,
    pub highlight_radius: i64,
    pub glyph_top: i64,
    pub glyph_bottom: i64,
    pub glyph_width: i64,
}

impl SwitchLayout {
    pub fn for_size(size: u32) -> Self {
        let s = i64::from(size);

        let margin = scaled(s, TRACK_MARGIN_RATIO);
        let top = scaled(s, TRACK_TOP_RATIO);
        let bottom = scaled(s, TRACK_BOTTOM_RATIO);
        let track_height = bottom - top;
        let track_radius = track_height / 2;

        // The knob sits at the right end of the track: the "on" position.
        let knob_radius = scaled(track_height, KNOB_RADIUS_RATIO);
        let knob_cx = s - margin - track_radius;
        let knob_cy = (top + bottom) / 2;

        Self {
            size: s,
            background_radius: scaled(s, BACKGROUND_RADIUS_RATIO),
            track: BoundingBox::new(margin, top, s - margin, bottom),
            track_radius,
            sheen_width: s - 2 * margin,
            sheen_height: (track_height / 3).max(MIN_SHEEN_HEIGHT),
            knob_cx,
            knob_cy,
            knob_radius,
            shadow_offset: (s / STROKE_DIVISOR).max(1),
            highlight_radius: (knob_radius / 3).max(1),
            glyph_top: knob_cy - knob_radius / 2,
            glyph_bottom: knob_cy + knob_radius / 2,
            glyph_width: (s / STROKE_DIVISOR).max(1),
        }
    }

    pub fn track_height(&self) -> i64 {
        self.track.y1 - self.track.y0
    }

    /// Horizontal midpoint of the track, in (possibly half) pixels.
    pub fn track_midpoint_x(&self) -> f64 {
        (self.track.x0 + self.track.x1) as f64 / 2.0
    }

    pub fn knob(&self) -> BoundingBox {
        BoundingBox::around(self.knob_cx, self.knob_cy, self.knob_radius)
    }

    pub fn knob_shadow(&self) -> BoundingBox {
        self.knob().offset(self.shadow_offset, self.shadow_offset)
    }

    /// Highlight spot, shifted toward the knob's upper-left quadrant.
    pub fn knob_highlight(&self) -> BoundingBox {
        let r = self.highlight_radius;
        BoundingBox::around(self.knob_cx - r, self.knob_cy - r, r)
    }
}
