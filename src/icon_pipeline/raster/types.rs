//! Raster geometry types

/// Inclusive pixel box. Coordinates are signed so shapes may hang off the
/// canvas; drawing clips them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub x0: i64,
    pub y0: i64,
    pub x1: i64,
    pub y1: i64,
}

impl BoundingBox {
    pub const fn new(x0: i64, y0: i64, x1: i64, y1: i64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Box of a circle of radius `r` centered on `(cx, cy)`.
    pub const fn around(cx: i64, cy: i64, r: i64) -> Self {
        Self::new(cx - r, cy - r, cx + r, cy + r)
    }

    pub const fn offset(self, dx: i64, dy: i64) -> Self {
        Self::new(self.x0 + dx, self.y0 + dy, self.x1 + dx, self.y1 + dy)
    }

    pub const fn is_inverted(&self) -> bool {
        self.x1 < self.x0 || self.y1 < self.y0
    }
}
