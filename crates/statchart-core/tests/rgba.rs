// File: crates/statchart-core/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape, bar geometry and a few pixels.

use statchart_core::{BarChart, BarSeries, CategoryAxis, RenderOptions, TextShaper};
use skia_safe::Color;

fn chart(values: Vec<f64>) -> BarChart {
    let names = (0..values.len()).map(|i| format!("p{i}")).collect::<Vec<_>>();
    let series = BarSeries::with_data(values, Color::from_rgb(255, 153, 153));
    BarChart::new("T", CategoryAxis::new(names), "Y", series)
}

fn pixel(px: &[u8], stride: usize, x: f32, y: f32) -> [u8; 4] {
    let i = y as usize * stride + x as usize * 4;
    [px[i], px[i + 1], px[i + 2], px[i + 3]]
}

#[test]
fn render_rgba8_buffer() {
    let c = chart(vec![3.0, 1.0]);
    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    let (px, w, h, stride) = c.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Figure background is opaque white in the classic theme.
    assert_eq!(pixel(&px, stride, 0.0, 0.0), [255, 255, 255, 255]);
}

#[test]
fn bar_interior_has_series_colour() {
    let c = chart(vec![3.0, 1.0]);
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let layout = c.layout(&opts, &TextShaper::new());
    let (px, _, _, stride) = c.render_to_rgba8(&opts).expect("rgba render");

    for r in c.bar_rects(&layout) {
        let cx = (r.left + r.right) * 0.5;
        let cy = (r.top + r.bottom) * 0.5;
        assert_eq!(pixel(&px, stride, cx, cy), [255, 153, 153, 255]);
    }
}

#[test]
fn bars_follow_category_order_and_height() {
    let c = chart(vec![3.0, 1.0, 2.0]);
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let layout = c.layout(&opts, &TextShaper::new());
    let rects = c.bar_rects(&layout);

    assert_eq!(rects.len(), 3);
    assert!(rects[0].left < rects[1].left && rects[1].left < rects[2].left);
    // All bars sit on the zero line.
    let zero = layout.values.to_px(0.0);
    assert!(rects.iter().all(|r| (r.bottom - zero).abs() < 1e-3));
    // Height is proportional to value.
    let h0 = rects[0].bottom - rects[0].top;
    let h1 = rects[1].bottom - rects[1].top;
    assert!((h0 / h1 - 3.0).abs() < 1e-3);
}

#[test]
fn negative_values_hang_below_zero() {
    let c = chart(vec![-1.0, 2.0]);
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let layout = c.layout(&opts, &TextShaper::new());
    let rects = c.bar_rects(&layout);
    let zero = layout.values.to_px(0.0);
    assert!((rects[0].top - zero).abs() < 1e-3);
    assert!(rects[0].bottom > zero);
}
