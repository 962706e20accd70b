// File: crates/statchart-core/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout; measures and paints axis labels,
// including rotated ones.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

/// Width and line height of a laid-out label, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextExtent {
    pub width: f32,
    pub height: f32,
}

impl TextExtent {
    /// Axis-aligned size of the label's box once rotated by `degrees`.
    pub fn rotated(&self, degrees: f32) -> TextExtent {
        let (s, c) = degrees.to_radians().sin_cos();
        let (s, c) = (s.abs(), c.abs());
        TextExtent {
            width: self.width * c + self.height * s,
            height: self.width * s + self.height * c,
        }
    }
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&[
            "DejaVu Sans",
            "Segoe UI",
            "Arial",
            "Helvetica",
            "Roboto",
            "sans-serif",
        ]);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(size, color);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure(&self, text: &str, size: f32) -> TextExtent {
        if text.is_empty() {
            return TextExtent::default();
        }
        let p = self.layout(text, size, skia::Color::TRANSPARENT);
        TextExtent { width: p.longest_line(), height: p.height() }
    }

    /// Paint with the label's top-left corner at (`x`, `y`).
    pub fn draw_top_left(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f32,
        y: f32,
        size: f32,
        color: skia::Color,
    ) {
        let mut p = self.layout(text, size, color);
        p.paint(canvas, (x, y));
    }

    /// Rotate the canvas by `degrees` (clockwise positive) around `anchor`, then paint
    /// with the label's top-left corner at `offset` in the rotated frame.
    pub fn draw_rotated(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        anchor: (f32, f32),
        offset: (f32, f32),
        degrees: f32,
        size: f32,
        color: skia::Color,
    ) {
        let mut p = self.layout(text, size, color);
        canvas.save();
        canvas.translate(anchor);
        canvas.rotate(degrees, None);
        p.paint(canvas, offset);
        canvas.restore();
    }
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}
