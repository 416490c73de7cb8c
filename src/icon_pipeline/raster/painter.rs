//! Filled-shape drawing on an RGBA canvas.
//!
//! Every primitive except [`Painter::alpha_composite`] replaces the pixels it
//! covers, alpha channel included. Drawing a translucent fill therefore leaves
//! translucent pixels behind instead of tinting what was underneath.

use image::{Rgba, RgbaImage};
use tracing::trace;

use crate::icon_pipeline::raster::types::BoundingBox;

/// Draws onto a borrowed canvas. Geometry is never validated: shapes outside
/// the canvas are clipped and inverted boxes draw nothing.
pub struct Painter<'a> {
    image: &'a mut RgbaImage,
}

impl<'a> Painter<'a> {
    pub fn new(image: &'a mut RgbaImage) -> Self {
        Self { image }
    }

    /// Visible part of `bbox` as unsigned inclusive ranges, if any.
    fn clip(&self, bbox: BoundingBox) -> Option<(u32, u32, u32, u32)> {
        let (width, height) = self.image.dimensions();
        if bbox.is_inverted() || width == 0 || height == 0 {
            return None;
        }

        let x0 = bbox.x0.max(0);
        let y0 = bbox.y0.max(0);
        let x1 = bbox.x1.min(i64::from(width) - 1);
        let y1 = bbox.y1.min(i64::from(height) - 1);
        if x1 < x0 || y1 < y0 {
            return None;
        }

        Some((x0 as u32, y0 as u32, x1 as u32, y1 as u32))
    }

    pub fn rectangle(&mut self, bbox: BoundingBox, fill: Rgba<u8>) {
        let Some((x0, y0, x1, y1)) = self.clip(bbox) else {
            return;
        };
        for y in y0..=y1 {
            for x in x0..=x1 {
                self.image.put_pixel(x, y, fill);
            }
        }
    }

    /// Fills the ellipse inscribed in `bbox`. A pixel belongs to the ellipse
    /// when its center does.
    pub fn ellipse(&mut self, bbox: BoundingBox, fill: Rgba<u8>) {
        let Some((x0, y0, x1, y1)) = self.clip(bbox) else {
            return;
        };

        let cx = (bbox.x0 + bbox.x1 + 1) as f64 / 2.0;
        let cy = (bbox.y0 + bbox.y1 + 1) as f64 / 2.0;
        let rx = (bbox.x1 - bbox.x0 + 1) as f64 / 2.0;
        let ry = (bbox.y1 - bbox.y0 + 1) as f64 / 2.0;

        for y in y0..=y1 {
            let dy = (y as f64 + 0.5 - cy) / ry;
            for x in x0..=x1 {
                let dx = (x as f64 + 0.5 - cx) / rx;
                if dx * dx + dy * dy <= 1.0 {
                    self.image.put_pixel(x, y, fill);
                }
            }
        }
    }

    /// Vertical stroke `width` pixels wide, centered on column `x`. Even
    /// widths lean one pixel to the right.
    pub fn vertical_line(&mut self, x: i64, y0: i64, y1: i64, width: i64, fill: Rgba<u8>) {
        let width = width.max(1);
        let left = x - (width - 1) / 2;
        let (top, bottom) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
        self.rectangle(BoundingBox::new(left, top, left + width - 1, bottom), fill);
    }

    /// Source-over composite of `layer` with its top-left corner at `(x, y)`.
    pub fn alpha_composite(&mut self, layer: &RgbaImage, x: i64, y: i64) {
        let (lw, lh) = layer.dimensions();
        if lw == 0 || lh == 0 {
            return;
        }
        let target = BoundingBox::new(x, y, x + i64::from(lw) - 1, y + i64::from(lh) - 1);
        let Some((x0, y0, x1, y1)) = self.clip(target) else {
            return;
        };

        for py in y0..=y1 {
            for px in x0..=x1 {
                let src = *layer.get_pixel((i64::from(px) - x) as u32, (i64::from(py) - y) as u32);
                let dst = self.image.get_pixel_mut(px, py);
                *dst = blend_over(*dst, src);
            }
        }
    }

    /// Rectangle with circular corner caps: one circle of radius `radius` in
    /// each corner plus the two bars that fill the cross between them.
    pub fn rounded_rectangle(&mut self, bbox: BoundingBox, radius: i64, fill: Rgba<u8>) {
        trace!(?bbox, radius, "rounded rectangle");
        let BoundingBox { x0, y0, x1, y1 } = bbox;
        let d = radius * 2;

        self.ellipse(BoundingBox::new(x0, y0, x0 + d, y0 + d), fill);
        self.ellipse(BoundingBox::new(x1 - d, y0, x1, y0 + d), fill);
        self.ellipse(BoundingBox::new(x0, y1 - d, x0 + d, y1), fill);
        self.ellipse(BoundingBox::new(x1 - d, y1 - d, x1, y1), fill);

        self.rectangle(BoundingBox::new(x0 + radius, y0, x1 - radius, y1), fill);
        self.rectangle(BoundingBox::new(x0, y0 + radius, x1, y1 - radius), fill);
    }
}

/// Straight-alpha "source over destination" in 8-bit integer math. An opaque
/// destination always stays fully opaque.
fn blend_over(dst: Rgba<u8>, src: Rgba<u8>) -> Rgba<u8> {
    let sa = u32::from(src[3]);
    let da = u32::from(dst[3]);

    // Alpha scaled by 255: sa*255 + da*(255 - sa).
    let out_a255 = sa * 255 + da * (255 - sa);
    if out_a255 == 0 {
        return Rgba([0, 0, 0, 0]);
    }

    let channel = |s: u8, d: u8| -> u8 {
        let num = u32::from(s) * sa * 255 + u32::from(d) * da * (255 - sa);
        ((num + out_a255 / 2) / out_a255) as u8
    };

    Rgba([
        channel(src[0], dst[0]),
        channel(src[1], dst[1]),
        channel(src[2], dst[2]),
        ((out_a255 + 127) / 255) as u8,
    ])
}
