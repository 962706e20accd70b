// File: crates/statchart-core/src/scale.rs
// Summary: Category band (X) and linear value (Y) transforms from data to pixels.

use crate::types::BAR_WIDTH;

/// Splits `[left_px, right_px]` into `count` equal bands, one per category.
#[derive(Clone, Copy, Debug)]
pub struct BandScale {
    pub left_px: f32,
    pub right_px: f32,
    pub count: usize,
}

impl BandScale {
    pub fn new(left_px: f32, right_px: f32, count: usize) -> Self {
        Self { left_px, right_px, count }
    }

    /// Width of one band; the full span when there are no categories.
    #[inline]
    pub fn band_width(&self) -> f32 {
        (self.right_px - self.left_px) / self.count.max(1) as f32
    }

    #[inline]
    pub fn center(&self, index: usize) -> f32 {
        self.left_px + (index as f32 + 0.5) * self.band_width()
    }

    #[inline]
    pub fn bar_half_width(&self) -> f32 {
        self.band_width() * BAR_WIDTH * 0.5
    }
}

/// Vertical value scale mapping `[vmin, vmax]` to `[bottom_px, top_px]`.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub vmin: f64,
    pub vmax: f64,
}

impl LinearScale {
    pub fn new(top_px: f32, bottom_px: f32, vmin: f64, vmax: f64) -> Self {
        let mut s = Self { top_px, bottom_px, vmin, vmax };
        if (s.vmax - s.vmin).abs() < 1e-12 {
            s.vmax = s.vmin + 1.0;
        }
        s
    }

    /// Differences are taken on halved values so ranges near `f64::MAX` do not overflow.
    #[inline]
    pub fn to_px(&self, y: f64) -> f32 {
        let span = (self.vmax * 0.5 - self.vmin * 0.5).max(1e-12);
        let t = (y * 0.5 - self.vmin * 0.5) / span;
        self.bottom_px - t as f32 * (self.bottom_px - self.top_px)
    }
}
