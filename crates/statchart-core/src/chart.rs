// File: crates/statchart-core/src/chart.rs
// Summary: BarChart struct and headless PNG rendering pipeline using Skia CPU raster surfaces.

use std::io::Cursor;
use std::path::Path;

use skia_safe as skia;

use crate::axis::{CategoryAxis, ValueAxis};
use crate::error::{ChartError, Result};
use crate::geometry::RectF32;
use crate::grid::{format_tick, nice_step, nice_ticks, span, tick_decimals};
use crate::layout::{fit_y_label, tight_insets, LabelMetrics, LayoutParams};
use crate::scale::{BandScale, LinearScale};
use crate::series::BarSeries;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{points_to_px, FigureSize, Insets, DEFAULT_DPI};

/// Target number of value-axis intervals.
const Y_TICK_TARGET: usize = 5;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub figure: FigureSize,
    pub dpi: f32,
    pub theme: Theme,
    pub title_pt: f32,
    pub label_pt: f32,
    pub tick_pt: f32,
    /// Counter-clockwise rotation of category labels, in degrees (0..=90).
    pub label_rotation: f32,
    /// When false, no text is drawn and fixed margins replace the tight layout.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            figure: FigureSize::default(),
            dpi: DEFAULT_DPI,
            theme: Theme::classic(),
            title_pt: 12.0,
            label_pt: 10.0,
            tick_pt: 10.0,
            label_rotation: 45.0,
            draw_labels: true,
        }
    }
}

impl RenderOptions {
    pub fn pixel_size(&self) -> (i32, i32) {
        self.figure.to_pixels(self.dpi)
    }

    fn pad(&self) -> f32 {
        points_to_px(3.0, self.dpi)
    }

    fn tick_len(&self) -> f32 {
        points_to_px(3.5, self.dpi)
    }
}

/// Resolved pixel geometry for one render.
#[derive(Clone, Debug)]
pub struct ChartLayout {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub plot: RectF32,
    pub bands: BandScale,
    pub values: LinearScale,
    pub y_ticks: Vec<f64>,
    pub y_tick_labels: Vec<String>,
}

#[derive(Clone, Debug)]
pub struct BarChart {
    pub title: String,
    pub categories: CategoryAxis,
    pub y_axis: ValueAxis,
    pub series: BarSeries,
}

impl BarChart {
    /// Chart with a value axis autoscaled to `series`.
    pub fn new(
        title: impl Into<String>,
        categories: CategoryAxis,
        y_label: impl Into<String>,
        series: BarSeries,
    ) -> Self {
        let y_axis = ValueAxis::autoscale(y_label, &series.values);
        Self { title: title.into(), categories, y_axis, series }
    }

    /// Number of bars drawn; categories without a value (or vice versa) are skipped.
    pub fn bar_count(&self) -> usize {
        self.categories.len().min(self.series.len())
    }

    pub fn layout(&self, opts: &RenderOptions, shaper: &TextShaper) -> ChartLayout {
        let (width, height) = opts.pixel_size();
        let (vmin, vmax) = (self.y_axis.min, self.y_axis.max);
        let y_ticks = nice_ticks(vmin, vmax, Y_TICK_TARGET);
        let decimals = tick_decimals(nice_step(span(vmin, vmax), Y_TICK_TARGET));
        let y_tick_labels: Vec<String> =
            y_ticks.iter().map(|&v| format_tick(v, decimals)).collect();

        let insets = if opts.draw_labels {
            let metrics = LabelMetrics::measure(
                shaper,
                (&self.title, points_to_px(opts.title_pt, opts.dpi)),
                (&self.y_axis.label, points_to_px(opts.label_pt, opts.dpi)),
                &y_tick_labels,
                &self.categories.labels,
                points_to_px(opts.tick_pt, opts.dpi),
            );
            tight_insets(
                &metrics,
                &LayoutParams {
                    width,
                    height,
                    pad: opts.pad(),
                    tick_len: opts.tick_len(),
                    rotation: opts.label_rotation.clamp(0.0, 90.0),
                },
            )
        } else {
            Insets::default()
        };

        let plot = RectF32::inset_canvas(width, height, &insets);
        let bands = BandScale::new(plot.left, plot.right, self.categories.len());
        let values = LinearScale::new(plot.top, plot.bottom, vmin, vmax);
        ChartLayout {
            width,
            height,
            insets,
            plot,
            bands,
            values,
            y_ticks,
            y_tick_labels,
        }
    }

    /// Pixel rectangle of each bar, in category order. Bars grow from zero.
    pub fn bar_rects(&self, layout: &ChartLayout) -> Vec<RectF32> {
        let half = layout.bands.bar_half_width();
        self.series
            .values
            .iter()
            .take(self.bar_count())
            .enumerate()
            .map(|(i, &v)| {
                let cx = layout.bands.center(i);
                let top = layout.values.to_px(v.max(0.0));
                let bottom = layout.values.to_px(v.min(0.0));
                RectF32::from_ltrb(cx - half, top, cx + half, bottom)
            })
            .collect()
    }

    /// Render to a tightly packed RGBA8 buffer: (pixels, width, height, stride).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let shaper = TextShaper::new();
        let layout = self.layout(opts, &shaper);
        let (w, h) = (layout.width, layout.height);

        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or(ChartError::Surface { width: w, height: h })?;
        {
            let canvas = surface.canvas();
            canvas.clear(opts.theme.background);
            self.draw(canvas, opts, &layout, &shaper);
        }

        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        let info = skia::ImageInfo::new(
            (w, h),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(ChartError::ReadPixels);
        }
        Ok((pixels, w as u32, h as u32, stride))
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let (pixels, w, h, _) = self.render_to_rgba8(opts)?;
        let img = image::RgbaImage::from_raw(w, h, pixels).ok_or(ChartError::ReadPixels)?;
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png)?;
        Ok(out.into_inner())
    }

    /// Render the chart to a PNG at `output_png_path`, replacing any existing file.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<Path>,
    ) -> Result<()> {
        let path = output_png_path.as_ref();
        let data = self.render_to_png_bytes(opts)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, data)?;
        Ok(())
    }

    fn draw(
        &self,
        canvas: &skia::Canvas,
        opts: &RenderOptions,
        layout: &ChartLayout,
        shaper: &TextShaper,
    ) {
        let theme = &opts.theme;
        let plot = &layout.plot;

        let mut face = skia::Paint::default();
        face.set_style(skia::paint::Style::Fill);
        face.set_color(theme.plot_background);
        canvas.draw_rect(plot.to_skia(), &face);

        draw_bars(canvas, &self.bar_rects(layout), self.series.color);
        draw_spines(canvas, plot, theme.axis_line);
        draw_tick_marks(canvas, layout, self.categories.len(), opts.tick_len(), theme.tick);

        if opts.draw_labels {
            self.draw_labels(canvas, opts, layout, shaper);
        }
    }

    fn draw_labels(
        &self,
        canvas: &skia::Canvas,
        opts: &RenderOptions,
        layout: &ChartLayout,
        shaper: &TextShaper,
    ) {
        let theme = &opts.theme;
        let plot = &layout.plot;
        let pad = opts.pad();
        let tick_len = opts.tick_len();
        let tick_px = points_to_px(opts.tick_pt, opts.dpi);
        let label_px = points_to_px(opts.label_pt, opts.dpi);
        let title_px = points_to_px(opts.title_pt, opts.dpi);

        // Value ticks: right-aligned against the tick marks, vertically centred.
        for (&v, text) in layout.y_ticks.iter().zip(&layout.y_tick_labels) {
            let ext = shaper.measure(text, tick_px);
            let y = layout.values.to_px(v);
            let x = plot.left - tick_len - pad - ext.width;
            shaper.draw_top_left(canvas, text, x, y - ext.height * 0.5, tick_px, theme.tick);
        }

        // Category ticks: top-right corner of the rotated box pinned under the band centre.
        let theta = opts.label_rotation.clamp(0.0, 90.0);
        let cos = theta.to_radians().cos();
        for (i, text) in self.categories.labels.iter().enumerate() {
            let ext = shaper.measure(text, tick_px);
            let anchor = (layout.bands.center(i), plot.bottom + tick_len + pad + ext.height * cos);
            let offset = (-ext.width, -ext.height);
            shaper.draw_rotated(canvas, text, anchor, offset, -theta, tick_px, theme.tick);
        }

        // Y label: rotated a quarter turn against the left edge, kept on the canvas.
        let mut y_ext = shaper.measure(&self.y_axis.label, label_px);
        let (y_center, y_scale) =
            fit_y_label(y_ext.width, plot.center_y(), layout.height as f32, pad);
        let y_label_px = label_px * y_scale;
        if y_scale < 1.0 {
            y_ext = shaper.measure(&self.y_axis.label, y_label_px);
        }
        shaper.draw_rotated(
            canvas,
            &self.y_axis.label,
            (pad, y_center),
            (-y_ext.width * 0.5, 0.0),
            -90.0,
            y_label_px,
            theme.axis_label,
        );

        let t_ext = shaper.measure(&self.title, title_px);
        let title_x = plot.center_x() - t_ext.width * 0.5;
        shaper.draw_top_left(canvas, &self.title, title_x, pad, title_px, theme.title);
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_bars(canvas: &skia::Canvas, rects: &[RectF32], color: skia::Color) {
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(color);
    for r in rects {
        canvas.draw_rect(r.to_skia(), &fill);
    }
}

fn draw_spines(canvas: &skia::Canvas, plot: &RectF32, color: skia::Color) {
    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(1.0);
    stroke.set_color(color);
    canvas.draw_rect(plot.to_skia(), &stroke);
}

fn draw_tick_marks(
    canvas: &skia::Canvas,
    layout: &ChartLayout,
    categories: usize,
    len: f32,
    color: skia::Color,
) {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);
    paint.set_color(color);

    let plot = &layout.plot;
    for &v in &layout.y_ticks {
        let y = layout.values.to_px(v);
        canvas.draw_line((plot.left - len, y), (plot.left, y), &paint);
    }
    for i in 0..categories {
        let x = layout.bands.center(i);
        canvas.draw_line((x, plot.bottom), (x, plot.bottom + len), &paint);
    }
}
