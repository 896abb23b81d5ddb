// File: crates/tufte-core/src/graph.rs
// Summary: Graph variants (bar, line, scatter, step) over a fresh Axes, with spine limiting and output.

use std::fmt;
use std::path::Path;

use skia_safe as skia;
use tracing::debug;

use crate::axes::{Artist, ArtistId, ArtistKind, Axes, Orientation, StepWhere, ValueLabels};
use crate::axis::AxisId;
use crate::error::{GraphError, GraphResult};
use crate::limits::{apply_spine_bounds, spine_limits};
use crate::render::{render, Frame, RenderOptions};
use crate::series::Series;
use crate::style::{light_grey, GridAxis, Marker, ResolvedStyle, StyleOverrides, StyleProp, StyleSheet};

/// Width of a bar as a fraction of the category spacing.
pub const BAR_WIDTH: f64 = 0.8;
/// Default scatter marker size in points.
pub const SCATTER_SIZE: f32 = 12.0;
/// Approximate character width per point of font size, in inches.
const FONT_RATE: f32 = 0.01;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GraphKind {
    HorizontalBar,
    VerticalBar,
    Line,
    Scatter,
    Step(StepWhere),
}

impl GraphKind {
    pub fn name(&self) -> &'static str {
        match self {
            GraphKind::HorizontalBar => "horizontal bar",
            GraphKind::VerticalBar => "vertical bar",
            GraphKind::Line => "line",
            GraphKind::Scatter => "scatter",
            GraphKind::Step(_) => "step",
        }
    }

    pub fn is_bar(&self) -> bool { matches!(self, GraphKind::HorizontalBar | GraphKind::VerticalBar) }

    /// Properties applied after the style sheet's fragments.
    pub fn style_overrides(&self, sheet: &StyleSheet) -> StyleOverrides {
        match self {
            GraphKind::VerticalBar => vec![StyleProp::GridAxis(GridAxis::Y)],
            GraphKind::Scatter => vec![
                StyleProp::Grid(false),
                StyleProp::GridColour(sheet.background),
                StyleProp::XTickColour(sheet.colour),
                StyleProp::YTickColour(sheet.colour),
                StyleProp::XTickBottom(true),
                StyleProp::YTickLeft(true),
            ],
            GraphKind::HorizontalBar | GraphKind::Line | GraphKind::Step(_) => Vec::new(),
        }
    }

    /// Turn a series into the artist this variant draws.
    fn artist(&self, series: Series, sheet: &StyleSheet) -> Artist {
        let Series { x, y, colour, size, .. } = series;
        match self {
            GraphKind::VerticalBar => Artist {
                kind: ArtistKind::Bars { orientation: Orientation::Vertical, width: BAR_WIDTH },
                x,
                y,
                colour: colour.unwrap_or_else(light_grey),
            },
            // bars grow along x; categories sit on the y axis
            GraphKind::HorizontalBar => Artist {
                kind: ArtistKind::Bars { orientation: Orientation::Horizontal, width: BAR_WIDTH },
                x: y,
                y: x,
                colour: colour.unwrap_or_else(light_grey),
            },
            GraphKind::Line => Artist {
                kind: ArtistKind::Line { style: sheet.marker, step: None },
                x,
                y,
                colour: colour.unwrap_or(sheet.colour),
            },
            GraphKind::Step(where_) => Artist {
                kind: ArtistKind::Line { style: sheet.marker, step: Some(*where_) },
                x,
                y,
                colour: colour.unwrap_or(sheet.colour),
            },
            GraphKind::Scatter => Artist {
                kind: ArtistKind::Scatter {
                    marker: Marker::Point,
                    size: size.unwrap_or(SCATTER_SIZE),
                    edge: sheet.background,
                },
                x,
                y,
                colour: colour.unwrap_or(sheet.colour),
            },
        }
    }

    fn category_axis(&self) -> AxisId {
        match self {
            GraphKind::HorizontalBar => AxisId::Y,
            _ => AxisId::X,
        }
    }
}

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.name()) }
}

/// A single graph: style sheet, resolved style, its own axes and render options.
#[derive(Clone, Debug)]
pub struct Graph {
    kind: GraphKind,
    stylesheet: StyleSheet,
    style: ResolvedStyle,
    axes: Axes,
    options: RenderOptions,
}

impl Graph {
    /// New graph using the Tufte style sheet.
    pub fn new(kind: GraphKind) -> Self { Self::with_stylesheet(kind, StyleSheet::tufte()) }

    pub fn with_stylesheet(kind: GraphKind, stylesheet: StyleSheet) -> Self {
        let style = stylesheet.resolve(&kind.style_overrides(&stylesheet));
        let axes = Axes::new(style.spines);
        debug!(kind = kind.name(), sheet = stylesheet.name, "new graph");
        Self { kind, stylesheet, style, axes, options: RenderOptions::default() }
    }

    pub fn horizontal_bar() -> Self { Self::new(GraphKind::HorizontalBar) }
    pub fn vertical_bar() -> Self { Self::new(GraphKind::VerticalBar) }
    pub fn line() -> Self { Self::new(GraphKind::Line) }
    pub fn scatter() -> Self { Self::new(GraphKind::Scatter) }
    pub fn step(where_: StepWhere) -> Self { Self::new(GraphKind::Step(where_)) }

    /// Figure size in inches at the current dpi.
    pub fn with_figsize(mut self, width_in: f32, height_in: f32) -> Self {
        self.options.width = (width_in * self.options.dpi).round() as i32;
        self.options.height = (height_in * self.options.dpi).round() as i32;
        self
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn kind(&self) -> GraphKind { self.kind }
    pub fn stylesheet(&self) -> &StyleSheet { &self.stylesheet }
    pub fn style(&self) -> &ResolvedStyle { &self.style }
    pub fn axes(&self) -> &Axes { &self.axes }
    pub fn axes_mut(&mut self) -> &mut Axes { &mut self.axes }
    pub fn options(&self) -> &RenderOptions { &self.options }
    pub fn options_mut(&mut self) -> &mut RenderOptions { &mut self.options }

    /// Add a data set; returns a handle to the drawn artist.
    pub fn add(&mut self, series: Series) -> GraphResult<ArtistId> {
        series.validate()?;
        if let Some(labels) = series.labels.clone() {
            self.axes.axis_mut(self.kind.category_axis()).categories = Some(labels);
        }
        let samples = series.len();
        let id = self.axes.add_artist(self.kind.artist(series, &self.stylesheet));
        debug!(kind = self.kind.name(), samples, artist = id.0, "added series");
        Ok(id)
    }

    /// Convenience for `add(Series::new(x, y))`.
    pub fn add_xy(&mut self, x: &[f64], y: &[f64]) -> GraphResult<ArtistId> {
        self.add(Series::new(x.to_vec(), y.to_vec()))
    }

    pub fn title(&mut self, title: impl Into<String>) -> &mut Self {
        self.axes.title = Some(title.into());
        self
    }

    pub fn x_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.axes.x_axis.label = Some(label.into());
        self
    }

    pub fn y_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.axes.y_axis.label = Some(label.into());
        self
    }

    /// Padding around the data as a fraction of its span; `y` defaults to `x`.
    pub fn margins(&mut self, x: f64, y: Option<f64>) -> GraphResult<&mut Self> {
        self.axes.set_margins(x, y.unwrap_or(x))?;
        Ok(self)
    }

    /// Rotate x tick labels to vertical when they are too wide for the tick spacing.
    ///
    /// Label width is estimated from character count and font size; `ratio` is the
    /// label-width to tick-spacing threshold (0.8 is the usual choice).
    pub fn rotate_xlabels(&mut self, ratio: f32) -> &mut Self {
        let ticks = self.axes.x_ticks();
        if ticks.is_empty() {
            return self;
        }
        let tick_spacing = self.options.figure_width_in() / ticks.len() as f32;
        let char_width = self.style.font_size * FONT_RATE;
        let longest = self.axes.x_axis.tick_labels(&ticks).iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let max_label_width = longest as f32 * char_width;
        if max_label_width / tick_spacing >= ratio {
            debug!(max_label_width, tick_spacing, "rotating x tick labels");
            self.axes.x_axis.label_rotation = 90.0;
        }
        self
    }

    /// Annotate bar ends with their values. Bar graphs only.
    pub fn show_values(&mut self, labels: ValueLabels) -> GraphResult<&mut Self> {
        if !self.kind.is_bar() {
            return Err(GraphError::Unsupported { operation: "show_values", kind: self.kind.name() });
        }
        self.axes.set_value_labels(Some(labels));
        Ok(self)
    }

    /// Trim the bottom and left spines to the data, snapped outward to the current ticks.
    ///
    /// Without series (or with only empty ones) the axes are left unchanged.
    pub fn limit_spines(&mut self) -> GraphResult<&mut Self> {
        let lines: Vec<&Artist> = self.axes.lines().collect();
        if lines.is_empty() {
            debug!("no series on axes; spines left as they are");
            return Ok(self);
        }
        let x_ticks = self.axes.x_ticks();
        let y_ticks = self.axes.y_ticks();
        let (x_bounds, y_bounds) = match spine_limits(&lines, &x_ticks, &y_ticks) {
            Ok(bounds) => bounds,
            Err(GraphError::EmptyInput) => {
                debug!("series hold no samples; nothing to bound");
                return Ok(self);
            }
            Err(e) => return Err(e),
        };
        debug!(?x_bounds, ?y_bounds, "limiting spines");
        apply_spine_bounds(&mut self.axes, x_bounds, y_bounds);
        Ok(self)
    }

    /// Render into a fresh RGBA frame.
    pub fn draw(&self) -> GraphResult<Frame> { render(&self.axes, &self.style, &self.options) }

    pub fn render_to_png_bytes(&self) -> GraphResult<Vec<u8>> { self.draw()?.to_png_bytes() }

    /// Render and write to `path`; the format follows the extension.
    pub fn save(&self, path: impl AsRef<Path>) -> GraphResult<()> { self.draw()?.save(path) }

    /// Colour of the graph's ink, for callers composing extra series.
    pub fn ink(&self) -> skia::Color { self.stylesheet.colour }
}
