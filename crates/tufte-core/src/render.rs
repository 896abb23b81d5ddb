// File: crates/tufte-core/src/render.rs
// Summary: Headless rendering of an Axes with Skia CPU raster surfaces; RGBA frames and image encoding.

use std::path::Path;

use skia_safe as skia;
use tracing::{debug, trace};

use crate::axes::{Artist, ArtistKind, Axes, Orientation, Spines, StepWhere, ValueLabels};
use crate::axis::Axis;
use crate::error::{GraphError, GraphResult};
use crate::geometry::RectI32;
use crate::limits::SpineBounds;
use crate::scale::LinearScale;
use crate::style::{LineStyle, Marker, MarkerStyle, ResolvedStyle};
use crate::text::{Anchor, TextShaper};
use crate::types::{points_to_px, Insets, DPI, HEIGHT, WIDTH};

/// Tick mark length in points.
const TICK_LENGTH_PT: f32 = 3.5;
/// Gap between tick mark and tick label in points.
const TICK_PAD_PT: f32 = 3.5;
/// Spine stroke width in points.
const SPINE_WIDTH_PT: f32 = 0.8;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub dpi: f32,
    pub insets: Insets,
    /// Draw text (tick labels, value labels, title). Off gives font-independent output.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { width: WIDTH, height: HEIGHT, dpi: DPI, insets: Insets::default(), draw_labels: true }
    }
}

impl RenderOptions {
    /// Figure width in inches.
    pub fn figure_width_in(&self) -> f32 { self.width as f32 / self.dpi }

    pub fn validate(&self) -> GraphResult<()> {
        let plot = RectI32::inset(self.width, self.height, &self.insets);
        if self.width <= 0 || self.height <= 0 || plot.is_empty() || !(self.dpi > 0.0) {
            return Err(GraphError::InvalidFigureSize { width: self.width, height: self.height });
        }
        Ok(())
    }
}

/// Rendered pixels, RGBA8 unpremultiplied, row-major without padding.
#[derive(Clone, Debug)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl Frame {
    pub fn stride(&self) -> usize { self.width as usize * 4 }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = y as usize * self.stride() + x as usize * 4;
        Some([self.pixels[i], self.pixels[i + 1], self.pixels[i + 2], self.pixels[i + 3]])
    }

    pub fn to_image(&self) -> GraphResult<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.pixels.clone())
            .ok_or_else(|| GraphError::Render("pixel buffer does not match frame size".into()))
    }

    pub fn to_png_bytes(&self) -> GraphResult<Vec<u8>> {
        let mut out = std::io::Cursor::new(Vec::new());
        self.to_image()?.write_to(&mut out, image::ImageFormat::Png)?;
        Ok(out.into_inner())
    }

    /// Write the frame; the format follows the file extension (png, jpg/jpeg, bmp).
    pub fn save(&self, path: impl AsRef<Path>) -> GraphResult<()> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        let format = match ext.as_str() {
            "png" => image::ImageFormat::Png,
            "jpg" | "jpeg" => image::ImageFormat::Jpeg,
            "bmp" => image::ImageFormat::Bmp,
            _ => return Err(GraphError::UnsupportedFormat(path.display().to_string())),
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let img = self.to_image()?;
        if format == image::ImageFormat::Jpeg {
            // no alpha channel in JPEG
            image::DynamicImage::ImageRgba8(img).to_rgb8().save_with_format(path, format)?;
        } else {
            img.save_with_format(path, format)?;
        }
        debug!(path = %path.display(), "saved graph");
        Ok(())
    }
}

/// Raster surface for a single render pass; released when dropped.
struct RenderContext {
    surface: skia::Surface,
    width: i32,
    height: i32,
}

impl RenderContext {
    fn acquire(opts: &RenderOptions) -> GraphResult<Self> {
        opts.validate()?;
        let surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| GraphError::Render("failed to create raster surface".into()))?;
        trace!(width = opts.width, height = opts.height, "render context acquired");
        Ok(Self { surface, width: opts.width, height: opts.height })
    }

    fn canvas(&mut self) -> &skia::Canvas { self.surface.canvas() }

    fn read_frame(&mut self) -> GraphResult<Frame> {
        let info = skia::ImageInfo::new(
            (self.width, self.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let row_bytes = self.width as usize * 4;
        let mut pixels = vec![0u8; row_bytes * self.height as usize];
        if !self.surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            return Err(GraphError::Render("failed to read surface pixels".into()));
        }
        Ok(Frame { width: self.width as u32, height: self.height as u32, pixels })
    }
}

impl Drop for RenderContext {
    fn drop(&mut self) {
        trace!("render context released");
    }
}

/// Render `axes` with `style` into a fresh RGBA frame.
pub fn render(axes: &Axes, style: &ResolvedStyle, opts: &RenderOptions) -> GraphResult<Frame> {
    let mut ctx = RenderContext::acquire(opts)?;
    let plot = RectI32::inset(opts.width, opts.height, &opts.insets);
    let (x_view, y_view) = axes.view_limits();
    let sx = LinearScale::new(x_view, plot.left as f32, plot.right as f32);
    let sy = LinearScale::new(y_view, plot.bottom as f32, plot.top as f32);
    let x_ticks: Vec<f64> = axes.x_ticks().into_iter().filter(|&t| sx.contains(t)).collect();
    let y_ticks: Vec<f64> = axes.y_ticks().into_iter().filter(|&t| sy.contains(t)).collect();
    trace!(?x_view, ?y_view, x_ticks = x_ticks.len(), y_ticks = y_ticks.len(), "render pass");

    {
        let painter = Painter {
            canvas: ctx.canvas(),
            plot,
            sx,
            sy,
            style,
            opts,
            text: opts.draw_labels.then(TextShaper::new),
        };
        painter.background();

        painter.clip_to_plot(|p| {
            for artist in axes.artists().iter().filter(|a| a.is_bars()) {
                p.artist(artist);
            }
            p.grid(&x_ticks, &y_ticks);
            for artist in axes.lines() {
                p.artist(artist);
            }
        });

        painter.spines(axes.spines());
        painter.x_ticks(&axes.x_axis, &x_ticks);
        painter.y_ticks(&axes.y_axis, &y_ticks);
        if let Some(labels) = axes.value_labels() {
            for artist in axes.artists().iter().filter(|a| a.is_bars()) {
                painter.value_labels(artist, labels);
            }
        }
        painter.axis_labels(&axes.x_axis, &axes.y_axis);
        if let Some(title) = &axes.title {
            painter.title(title);
        }
    }

    ctx.read_frame()
}

struct Painter<'a> {
    canvas: &'a skia::Canvas,
    plot: RectI32,
    sx: LinearScale,
    sy: LinearScale,
    style: &'a ResolvedStyle,
    opts: &'a RenderOptions,
    text: Option<TextShaper>,
}

impl Painter<'_> {
    fn px(&self, points: f32) -> f32 { points_to_px(points, self.opts.dpi) }

    fn stroke(&self, color: skia::Color, width_px: f32) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(width_px);
        paint.set_color(color);
        paint
    }

    fn fill(&self, color: skia::Color) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Fill);
        paint.set_color(color);
        paint
    }

    fn background(&self) {
        self.canvas.clear(self.style.figure_face);
        if self.style.frame_on {
            let edge = skia::Rect::from_xywh(0.5, 0.5, self.opts.width as f32 - 1.0, self.opts.height as f32 - 1.0);
            self.canvas.draw_rect(edge, &self.stroke(self.style.figure_edge, 1.0));
        }
        self.canvas.draw_rect(self.plot.to_skia(), &self.fill(self.style.axes_face));
    }

    fn clip_to_plot(&self, draw: impl FnOnce(&Self)) {
        self.canvas.save();
        self.canvas.clip_rect(self.plot.to_skia(), skia::ClipOp::Intersect, true);
        draw(self);
        self.canvas.restore();
    }

    fn artist(&self, artist: &Artist) {
        match artist.kind {
            ArtistKind::Bars { orientation, width } => self.bars(artist, orientation, width),
            ArtistKind::Line { style, step } => self.line(artist, style, step),
            ArtistKind::Scatter { marker, size, edge } => {
                let paint = self.fill(artist.colour);
                let edge = self.stroke(edge, 1.0);
                for (x, y) in self.points(artist) {
                    self.marker(marker, (x, y), self.px(size), &paint, Some(&edge));
                }
            }
        }
    }

    fn points(&self, artist: &Artist) -> Vec<(f32, f32)> {
        artist
            .x
            .iter()
            .zip(&artist.y)
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .map(|(&x, &y)| (self.sx.to_px(x), self.sy.to_px(y)))
            .collect()
    }

    fn bars(&self, artist: &Artist, orientation: Orientation, width: f64) {
        let paint = self.fill(artist.colour);
        let half = width / 2.0;
        for (&x, &y) in artist.x.iter().zip(&artist.y) {
            let rect = match orientation {
                Orientation::Vertical => skia::Rect::from_ltrb(
                    self.sx.to_px(x - half),
                    self.sy.to_px(y.max(0.0)),
                    self.sx.to_px(x + half),
                    self.sy.to_px(y.min(0.0)),
                ),
                Orientation::Horizontal => skia::Rect::from_ltrb(
                    self.sx.to_px(x.min(0.0)),
                    self.sy.to_px(y + half),
                    self.sx.to_px(x.max(0.0)),
                    self.sy.to_px(y - half),
                ),
            };
            self.canvas.draw_rect(rect, &paint);
        }
    }

    fn line(&self, artist: &Artist, style: MarkerStyle, step: Option<StepWhere>) {
        let pts = self.points(artist);
        if pts.is_empty() {
            return;
        }
        if style.line_style != LineStyle::None && pts.len() >= 2 {
            let mut path = skia::Path::new();
            path.move_to(pts[0]);
            for pair in pts.windows(2) {
                let ((x0, y0), (x1, y1)) = (pair[0], pair[1]);
                match step {
                    None => {
                        path.line_to((x1, y1));
                    }
                    Some(StepWhere::Pre) => {
                        path.line_to((x0, y1));
                        path.line_to((x1, y1));
                    }
                    Some(StepWhere::Post) => {
                        path.line_to((x1, y0));
                        path.line_to((x1, y1));
                    }
                    Some(StepWhere::Mid) => {
                        let xm = (x0 + x1) * 0.5;
                        path.line_to((xm, y0));
                        path.line_to((xm, y1));
                        path.line_to((x1, y1));
                    }
                }
            }
            let width = self.px(style.line_width);
            let mut stroke = self.stroke(artist.colour, width);
            stroke.set_stroke_join(skia::paint::Join::Round);
            if let Some(intervals) = style.line_style.intervals(width) {
                stroke.set_path_effect(skia::PathEffect::dash(&intervals, 0.0));
            }
            self.canvas.draw_path(&path, &stroke);
        }
        if style.marker != Marker::None {
            let face = self.fill(artist.colour);
            let edge = self.stroke(self.style.axes_face, 1.0);
            for &pt in &pts {
                self.marker(style.marker, pt, self.px(style.size), &face, Some(&edge));
            }
        }
    }

    fn marker(&self, marker: Marker, (x, y): (f32, f32), diameter: f32, face: &skia::Paint, edge: Option<&skia::Paint>) {
        let r = diameter * 0.5;
        match marker {
            Marker::None => {}
            Marker::Dot | Marker::Point => {
                let r = if marker == Marker::Point { r * 0.5 } else { r };
                self.canvas.draw_circle((x, y), r, face);
                if let Some(edge) = edge {
                    self.canvas.draw_circle((x, y), r, edge);
                }
            }
            Marker::X => {
                let mut paint = face.clone();
                paint.set_style(skia::paint::Style::Stroke);
                paint.set_stroke_width((diameter / 8.0).max(1.0));
                self.canvas.draw_line((x - r, y - r), (x + r, y + r), &paint);
                self.canvas.draw_line((x - r, y + r), (x + r, y - r), &paint);
            }
            Marker::Star => {
                let mut path = skia::Path::new();
                for i in 0..10 {
                    let radius = if i % 2 == 0 { r } else { r * 0.4 };
                    let angle = -std::f32::consts::FRAC_PI_2 + i as f32 * std::f32::consts::PI / 5.0;
                    let pt = (x + radius * angle.cos(), y + radius * angle.sin());
                    if i == 0 {
                        path.move_to(pt);
                    } else {
                        path.line_to(pt);
                    }
                }
                path.close();
                self.canvas.draw_path(&path, face);
            }
        }
    }

    fn grid(&self, x_ticks: &[f64], y_ticks: &[f64]) {
        if !self.style.grid {
            return;
        }
        let paint = self.stroke(self.style.grid_colour, self.px(self.style.grid_width));
        let (l, t, r, b) = (self.plot.left as f32, self.plot.top as f32, self.plot.right as f32, self.plot.bottom as f32);
        if self.style.grid_axis.includes_x() {
            for &tick in x_ticks {
                let x = self.sx.to_px(tick);
                self.canvas.draw_line((x, t), (x, b), &paint);
            }
        }
        if self.style.grid_axis.includes_y() {
            for &tick in y_ticks {
                let y = self.sy.to_px(tick);
                self.canvas.draw_line((l, y), (r, y), &paint);
            }
        }
    }

    fn spines(&self, spines: &Spines) {
        let paint = self.stroke(self.style.edge_colour, self.px(SPINE_WIDTH_PT));
        let (l, t, r, b) = (self.plot.left as f32, self.plot.top as f32, self.plot.right as f32, self.plot.bottom as f32);
        let horizontal = |bounds: Option<SpineBounds>| {
            bounds.map(|sb| (self.sx.to_px(sb.low), self.sx.to_px(sb.high))).unwrap_or((l, r))
        };
        let vertical = |bounds: Option<SpineBounds>| {
            bounds.map(|sb| (self.sy.to_px(sb.low), self.sy.to_px(sb.high))).unwrap_or((b, t))
        };
        if spines.bottom.visible {
            let (x0, x1) = horizontal(spines.bottom.bounds);
            self.canvas.draw_line((x0, b), (x1, b), &paint);
        }
        if spines.top.visible {
            let (x0, x1) = horizontal(spines.top.bounds);
            self.canvas.draw_line((x0, t), (x1, t), &paint);
        }
        if spines.left.visible {
            let (y0, y1) = vertical(spines.left.bounds);
            self.canvas.draw_line((l, y0), (l, y1), &paint);
        }
        if spines.right.visible {
            let (y0, y1) = vertical(spines.right.bounds);
            self.canvas.draw_line((r, y0), (r, y1), &paint);
        }
    }

    fn x_ticks(&self, axis: &Axis, ticks: &[f64]) {
        let b = self.plot.bottom as f32;
        let tick_len = self.px(TICK_LENGTH_PT);
        let colour = self.style.x_tick_colour;
        if self.style.x_tick_marks {
            let paint = self.stroke(colour, self.px(SPINE_WIDTH_PT));
            for &t in ticks {
                let x = self.sx.to_px(t);
                self.canvas.draw_line((x, b), (x, b + tick_len), &paint);
            }
        }
        let Some(shaper) = &self.text else { return };
        let size = self.px(self.style.font_size);
        let top = b + tick_len + self.px(TICK_PAD_PT);
        for (t, label) in ticks.iter().zip(axis.tick_labels(ticks)) {
            let x = self.sx.to_px(*t);
            if axis.label_rotation.abs() > f32::EPSILON {
                shaper.draw_rotated(self.canvas, &label, (x, top), axis.label_rotation, size, colour, self.style.font_family);
            } else {
                shaper.draw(self.canvas, &label, (x, top + size * 0.6), Anchor::Center, size, colour, self.style.font_family);
            }
        }
    }

    fn y_ticks(&self, axis: &Axis, ticks: &[f64]) {
        let l = self.plot.left as f32;
        let tick_len = self.px(TICK_LENGTH_PT);
        let colour = self.style.y_tick_colour;
        if self.style.y_tick_marks {
            let paint = self.stroke(colour, self.px(SPINE_WIDTH_PT));
            for &t in ticks {
                let y = self.sy.to_px(t);
                self.canvas.draw_line((l - tick_len, y), (l, y), &paint);
            }
        }
        let Some(shaper) = &self.text else { return };
        let size = self.px(self.style.font_size);
        let right = l - tick_len - self.px(TICK_PAD_PT);
        for (t, label) in ticks.iter().zip(axis.tick_labels(ticks)) {
            let y = self.sy.to_px(*t);
            shaper.draw(self.canvas, &label, (right, y), Anchor::Right, size, colour, self.style.font_family);
        }
    }

    fn value_labels(&self, artist: &Artist, labels: ValueLabels) {
        let Some(shaper) = &self.text else { return };
        let ArtistKind::Bars { orientation, .. } = artist.kind else { return };
        let size = self.px(labels.font_size);
        let pad = self.px(labels.padding);
        let colour = self.style.text_colour;
        for (&x, &y) in artist.x.iter().zip(&artist.y) {
            match orientation {
                Orientation::Vertical => {
                    let end = self.sy.to_px(y);
                    let cy = if y >= 0.0 { end - pad - size * 0.5 } else { end + pad + size * 0.5 };
                    shaper.draw(self.canvas, &labels.format(y), (self.sx.to_px(x), cy), Anchor::Center, size, colour, self.style.font_family);
                }
                Orientation::Horizontal => {
                    let end = self.sx.to_px(x);
                    let (cx, anchor) = if x >= 0.0 { (end + pad, Anchor::Left) } else { (end - pad, Anchor::Right) };
                    shaper.draw(self.canvas, &labels.format(x), (cx, self.sy.to_px(y)), anchor, size, colour, self.style.font_family);
                }
            }
        }
    }

    fn axis_labels(&self, x_axis: &Axis, y_axis: &Axis) {
        let Some(shaper) = &self.text else { return };
        let size = self.px(self.style.font_size);
        let colour = self.style.label_colour;
        if let Some(label) = &x_axis.label {
            let cx = (self.plot.left + self.plot.right) as f32 * 0.5;
            let cy = self.opts.height as f32 - self.opts.insets.bottom as f32 * 0.25;
            shaper.draw(self.canvas, label, (cx, cy), Anchor::Center, size, colour, self.style.font_family);
        }
        if let Some(label) = &y_axis.label {
            let cy = (self.plot.top + self.plot.bottom) as f32 * 0.5;
            let half = shaper.measure_width(label, size, self.style.font_family) * 0.5;
            let cx = self.opts.insets.left as f32 * 0.2;
            shaper.draw_rotated(self.canvas, label, (cx, cy - half), 90.0, size, colour, self.style.font_family);
        }
    }

    fn title(&self, title: &str) {
        let Some(shaper) = &self.text else { return };
        let size = self.px(self.style.font_size * 1.2);
        let cx = (self.plot.left + self.plot.right) as f32 * 0.5;
        let cy = self.opts.insets.top as f32 * 0.5;
        shaper.draw(self.canvas, title, (cx, cy), Anchor::Center, size, self.style.text_colour, self.style.font_family);
    }
}
