// File: crates/statchart-core/src/layout.rs
// Summary: Tight layout; derives plot insets from measured label extents so nothing is clipped.

use crate::text::{TextExtent, TextShaper};
use crate::types::Insets;

/// Measured sizes of everything drawn outside the plot rectangle.
#[derive(Clone, Debug, Default)]
pub struct LabelMetrics {
    pub title: TextExtent,
    pub y_label: TextExtent,
    /// Widest value tick label.
    pub y_tick_width: f32,
    /// Unrotated category labels, in axis order.
    pub categories: Vec<TextExtent>,
}

impl LabelMetrics {
    pub fn measure(
        shaper: &TextShaper,
        title: (&str, f32),
        y_label: (&str, f32),
        y_ticks: &[String],
        categories: &[String],
        tick_size: f32,
    ) -> Self {
        Self {
            title: shaper.measure(title.0, title.1),
            y_label: shaper.measure(y_label.0, y_label.1),
            y_tick_width: y_ticks
                .iter()
                .map(|t| shaper.measure(t, tick_size).width)
                .fold(0.0, f32::max),
            categories: categories.iter().map(|c| shaper.measure(c, tick_size)).collect(),
        }
    }
}

/// Spacing inputs for [`tight_insets`], all in pixels except `rotation` (degrees,
/// counter-clockwise).
#[derive(Clone, Copy, Debug)]
pub struct LayoutParams {
    pub width: i32,
    pub height: i32,
    pub pad: f32,
    pub tick_len: f32,
    pub rotation: f32,
}

/// Plot insets sized to fit the title above, the y label and tick labels to the left, and the
/// rotated, right-aligned category labels below. Each category label hangs left of its band
/// centre, so the left inset also grows until the first labels stay on the canvas.
pub fn tight_insets(m: &LabelMetrics, p: &LayoutParams) -> Insets {
    let w = p.width as f32;
    let h = p.height as f32;

    let mut top = p.pad;
    if m.title.height > 0.0 {
        top += m.title.height + p.pad;
    }

    let mut left = p.pad + m.y_tick_width + p.pad + p.tick_len;
    if m.y_label.height > 0.0 {
        left += m.y_label.height + p.pad;
    }

    let right = p.pad;

    let rotated: Vec<TextExtent> = m.categories.iter().map(|e| e.rotated(p.rotation)).collect();
    let tallest = rotated.iter().map(|e| e.height).fold(0.0, f32::max);
    let mut bottom = p.pad + p.tick_len + p.pad;
    if tallest > 0.0 {
        bottom += tallest + p.pad;
    }

    // Label i ends at left + (i + 0.5) * band and extends `width` further left.
    let n = rotated.len() as f32;
    for (i, e) in rotated.iter().enumerate() {
        let frac = (i as f32 + 0.5) / n;
        let need = (p.pad + e.width - (w - right) * frac) / (1.0 - frac);
        left = left.max(need);
    }

    let (left, right) = shrink_to_fit(left, right, w);
    let (top, bottom) = shrink_to_fit(top, bottom, h);
    Insets::new(left, right, top, bottom)
}

/// Vertical centre and font scale for the quarter-turned y label of `length` pixels. It is
/// centred on the plot when that keeps it on the canvas, shifted when it does not, and scaled
/// down when it is longer than the canvas is tall.
pub fn fit_y_label(length: f32, plot_center: f32, height: f32, pad: f32) -> (f32, f32) {
    let room = (height - 2.0 * pad).max(1.0);
    let scale = if length > room { room / length } else { 1.0 };
    let half = length * scale * 0.5;
    let lo = pad + half;
    let hi = height - pad - half;
    let center = if lo <= hi {
        plot_center.clamp(lo, hi)
    } else {
        height * 0.5
    };
    (center, scale)
}

/// Keep at least a fifth of the canvas for the plot itself.
fn shrink_to_fit(a: f32, b: f32, total: f32) -> (f32, f32) {
    let budget = total * 0.8;
    let sum = a + b;
    if sum <= budget || sum <= 0.0 {
        return (a, b);
    }
    tracing::warn!(needed = sum, available = budget, "labels do not fit; plot margins clamped");
    let k = budget / sum;
    (a * k, b * k)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> LayoutParams {
        LayoutParams { width: 400, height: 240, pad: 4.0, tick_len: 5.0, rotation: 45.0 }
    }

    #[test]
    fn no_labels_gives_padding_only() {
        let ins = tight_insets(&LabelMetrics::default(), &params());
        assert_eq!(ins.top, 4.0);
        assert_eq!(ins.left, 4.0 + 0.0 + 4.0 + 5.0);
        assert_eq!(ins.bottom, 4.0 + 5.0 + 4.0);
    }

    #[test]
    fn long_first_label_widens_left_margin() {
        let short = LabelMetrics {
            categories: vec![TextExtent { width: 10.0, height: 12.0 }; 4],
            ..Default::default()
        };
        let mut long = short.clone();
        long.categories[0].width = 200.0;
        let a = tight_insets(&short, &params());
        let b = tight_insets(&long, &params());
        assert!(b.left > a.left);
        assert!(b.bottom > a.bottom);
    }

    #[test]
    fn title_and_y_label_reserve_space() {
        let m = LabelMetrics {
            title: TextExtent { width: 120.0, height: 17.0 },
            y_label: TextExtent { width: 60.0, height: 14.0 },
            y_tick_width: 20.0,
            categories: Vec::new(),
        };
        let ins = tight_insets(&m, &params());
        assert_eq!(ins.top, 4.0 + 17.0 + 4.0);
        assert_eq!(ins.left, 4.0 + 20.0 + 4.0 + 5.0 + 14.0 + 4.0);
    }

    #[test]
    fn y_label_stays_centred_when_it_fits() {
        let (center, scale) = fit_y_label(60.0, 110.0, 240.0, 4.0);
        assert_eq!(scale, 1.0);
        assert_eq!(center, 110.0);
    }

    #[test]
    fn long_y_label_is_shifted_onto_the_canvas() {
        // Roughly "Average Damage per Round (ADR)" over a plot squeezed by rotated names.
        let (center, scale) = fit_y_label(200.0, 90.0, 240.0, 4.0);
        assert_eq!(scale, 1.0);
        assert!(center - 100.0 >= 4.0 - 1e-3);
        assert!(center + 100.0 <= 236.0 + 1e-3);
    }

    #[test]
    fn y_label_longer_than_canvas_is_scaled_down() {
        let (center, scale) = fit_y_label(464.0, 90.0, 240.0, 4.0);
        assert!((scale - 0.5).abs() < 1e-6);
        assert!((center - 120.0).abs() < 1e-3);
    }

    #[test]
    fn oversized_labels_are_clamped() {
        let m = LabelMetrics {
            categories: vec![TextExtent { width: 2000.0, height: 12.0 }],
            ..Default::default()
        };
        let ins = tight_insets(&m, &params());
        assert!(ins.left + ins.right <= 400.0 * 0.8 + 1e-3);
        assert!(ins.top + ins.bottom <= 240.0 * 0.8 + 1e-3);
    }
}
