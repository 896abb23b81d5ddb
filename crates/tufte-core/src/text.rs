// File: crates/tufte-core/src/text.rs
// Summary: Text shaping and anchored drawing for tick labels, value labels and titles.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

use crate::style::FontFamily;

/// Horizontal anchor of a text run relative to its reference point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Left,
    Center,
    Right,
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size_px: f32, color: skia::Color, family: FontFamily) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size_px.max(1.0));
        ts.set_color(color);
        ts.set_font_families(family.families());
        ts
    }

    pub fn layout(&self, text: &str, size_px: f32, color: skia::Color, family: FontFamily) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(size_px, color, family));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, size_px: f32, family: FontFamily) -> f32 {
        self.layout(text, size_px, skia::Color::TRANSPARENT, family).longest_line()
    }

    /// Draw `text` vertically centred on `y`, anchored horizontally at `x`.
    #[allow(clippy::too_many_arguments)]
    pub fn draw(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        (x, y): (f32, f32),
        anchor: Anchor,
        size_px: f32,
        color: skia::Color,
        family: FontFamily,
    ) {
        let mut p = self.layout(text, size_px, color, family);
        let w = p.longest_line();
        let left = match anchor {
            Anchor::Left => x,
            Anchor::Center => x - w * 0.5,
            Anchor::Right => x - w,
        };
        p.paint(canvas, (left, y - p.height() * 0.5));
    }

    /// Draw `text` rotated by `degrees` counter-clockwise; its end is placed at (`x`, `y`).
    #[allow(clippy::too_many_arguments)]
    pub fn draw_rotated(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        (x, y): (f32, f32),
        degrees: f32,
        size_px: f32,
        color: skia::Color,
        family: FontFamily,
    ) {
        let mut p = self.layout(text, size_px, color, family);
        let w = p.longest_line();
        canvas.save();
        canvas.translate((x, y));
        canvas.rotate(-degrees, None);
        p.paint(canvas, (-w, -p.height() * 0.5));
        canvas.restore();
    }
}
