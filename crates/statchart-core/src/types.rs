// File: crates/statchart-core/src/types.rs
// Summary: Shared types and constants (figure size, DPI, paddings).

/// Default figure width in inches.
pub const FIGURE_WIDTH_IN: f32 = 4.0;
/// Default figure height in inches.
pub const FIGURE_HEIGHT_IN: f32 = 2.4;
/// Default raster resolution.
pub const DEFAULT_DPI: f32 = 100.0;
/// Fraction of a category band covered by its bar.
pub const BAR_WIDTH: f32 = 0.8;

/// Convert a typographic size in points to pixels at `dpi`.
#[inline]
pub fn points_to_px(pt: f32, dpi: f32) -> f32 {
    pt * dpi / 72.0
}

/// Physical figure size; the pixel canvas is derived from it and the DPI.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FigureSize {
    pub width_in: f32,
    pub height_in: f32,
}

impl FigureSize {
    pub const fn new(width_in: f32, height_in: f32) -> Self {
        Self { width_in, height_in }
    }

    /// Canvas size in whole pixels (at least 1x1).
    pub fn to_pixels(&self, dpi: f32) -> (i32, i32) {
        let w = (self.width_in * dpi).round().max(1.0) as i32;
        let h = (self.height_in * dpi).round().max(1.0) as i32;
        (w, h)
    }
}

impl Default for FigureSize {
    fn default() -> Self {
        Self::new(FIGURE_WIDTH_IN, FIGURE_HEIGHT_IN)
    }
}

/// Screen margins around the plot area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Insets {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Insets {
    pub fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self {
            left: left.max(0.0),
            right: right.max(0.0),
            top: top.max(0.0),
            bottom: bottom.max(0.0),
        }
    }
}

impl Default for Insets {
    /// Fixed margins used when labels are not drawn.
    fn default() -> Self {
        Self::new(40.0, 12.0, 12.0, 24.0)
    }
}
