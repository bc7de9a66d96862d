use serde::{Deserialize, Serialize};

/// Pixel dimensions of an image (width, height).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Size {
    pub w: u32,
    pub h: u32,
}

impl Size {
    pub fn new(w: u32, h: u32) -> Self {
        Self { w, h }
    }
    /// Returns true if either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }
}

/// Axis-aligned rectangle (pixels). `x,y` is top-left and may be negative
/// for placements that extend off-screen; `w,h` are sizes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }
    /// Rectangle with the given origin and `size` dimensions.
    pub fn from_origin_size(x: i32, y: i32, size: Size) -> Self {
        Self::new(x, y, size.w, size.h)
    }
    pub fn size(&self) -> Size {
        Size::new(self.w, self.h)
    }
    /// Inclusive right edge coordinate (`x + w - 1`).
    pub fn right(&self) -> i32 {
        self.x + self.w.saturating_sub(1) as i32
    }
    /// Inclusive bottom edge coordinate (`y + h - 1`).
    pub fn bottom(&self) -> i32 {
        self.y + self.h.saturating_sub(1) as i32
    }
    /// Returns true if `r` is fully inside `self` (inclusive edges).
    pub fn contains(&self, r: &Rect) -> bool {
        r.x >= self.x && r.y >= self.y && r.right() <= self.right() && r.bottom() <= self.bottom()
    }
}
