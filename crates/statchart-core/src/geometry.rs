// File: crates/statchart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

use skia_safe as skia;

use crate::types::Insets;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF32 {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF32 {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Canvas of `width` x `height` shrunk by `insets`. Never inverted.
    pub fn inset_canvas(width: i32, height: i32, insets: &Insets) -> Self {
        let left = insets.left;
        let top = insets.top;
        let right = (width as f32 - insets.right).max(left + 1.0);
        let bottom = (height as f32 - insets.bottom).max(top + 1.0);
        Self { left, top, right, bottom }
    }

    pub fn center_y(&self) -> f32 {
        (self.top + self.bottom) * 0.5
    }

    pub fn center_x(&self) -> f32 {
        (self.left + self.right) * 0.5
    }

    pub fn to_skia(&self) -> skia::Rect {
        skia::Rect::from_ltrb(self.left, self.top, self.right, self.bottom)
    }
}
