// File: crates/statchart-core/src/series.rs
// Summary: Bar series model: one value per category slot, single fill colour.

use skia_safe as skia;

#[derive(Clone, Debug)]
pub struct BarSeries {
    pub values: Vec<f64>,
    pub color: skia::Color,
}

impl BarSeries {
    pub fn with_data(values: Vec<f64>, color: skia::Color) -> Self {
        Self { values, color }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
