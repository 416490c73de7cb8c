//! Renderer for the "switch on" icon.

use image::RgbaImage;
use tracing::{debug, instrument};

use crate::icon_pipeline::compose::layout::SwitchLayout;
use crate::icon_pipeline::compose::palette;
use crate::icon_pipeline::compose::renderer::IconRenderer;
use crate::icon_pipeline::raster::{BoundingBox, Painter};

/// Paints a rounded dark panel holding a green pill-shaped switch with its
/// knob on the right. Only the "on" state exists.
pub struct SwitchIconRenderer;

impl IconRenderer for SwitchIconRenderer {
    #[instrument(skip(self))]
    fn render(&self, size: u32) -> RgbaImage {
        let layout = SwitchLayout::for_size(size);
        debug!(?layout, "Switch layout");

        let mut image = RgbaImage::new(size, size);
        let mut painter = Painter::new(&mut image);
        let s = layout.size;

        // Panel: a lighter one-pixel rim around the darker face.
        painter.rounded_rectangle(
            BoundingBox::new(0, 0, s - 1, s - 1),
            layout.background_radius,
            palette::BACKGROUND_OUTER,
        );
        painter.rounded_rectangle(
            BoundingBox::new(1, 1, s - 2, s - 2),
            layout.background_radius,
            palette::BACKGROUND_INNER,
        );

        painter.rounded_rectangle(layout.track, layout.track_radius, palette::TRACK_ON);

        if layout.sheen_width > 0 {
            let sheen = RgbaImage::from_pixel(
                layout.sheen_width as u32,
                layout.sheen_height as u32,
                palette::TRACK_SHEEN,
            );
            painter.alpha_composite(&sheen, layout.track.x0, layout.track.y0);
        }

        painter.ellipse(layout.knob_shadow(), palette::KNOB_SHADOW);
        painter.ellipse(layout.knob(), palette::KNOB_FACE);
        painter.ellipse(layout.knob_highlight(), palette::KNOB_HIGHLIGHT);

        painter.vertical_line(
            layout.knob_cx,
            layout.glyph_top,
            layout.glyph_bottom,
            layout.glyph_width,
            palette::POWER_GLYPH,
        );

        image
    }
}
