// File: crates/tufte-core/src/style.rs
// Summary: Style sheets as ordered, named fragments of style properties; Tufte and base presets.

use skia_safe as skia;

use crate::error::{GraphError, GraphResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marker {
    None,
    Dot,
    Point,
    X,
    Star,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dashed,
    DashDot,
    Dotted,
    None,
}

impl LineStyle {
    /// Dash intervals in pixels for a stroke of the given width; `None` for solid.
    pub fn intervals(&self, width: f32) -> Option<Vec<f32>> {
        let w = width.max(1.0);
        match self {
            LineStyle::Solid | LineStyle::None => None,
            LineStyle::Dashed => Some(vec![3.7 * w, 1.6 * w]),
            LineStyle::DashDot => Some(vec![6.4 * w, 1.6 * w, w, 1.6 * w]),
            LineStyle::Dotted => Some(vec![w, 1.65 * w]),
        }
    }
}

/// How line and step series draw their samples.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerStyle {
    pub marker: Marker,
    /// Marker size in points.
    pub size: f32,
    pub line_style: LineStyle,
    /// Line width in points.
    pub line_width: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontFamily {
    Serif,
    SansSerif,
    Monospace,
}

impl FontFamily {
    pub fn families(&self) -> &'static [&'static str] {
        match self {
            FontFamily::Serif => &["Georgia", "Times New Roman", "DejaVu Serif", "Liberation Serif", "serif"],
            FontFamily::SansSerif => &["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"],
            FontFamily::Monospace => &["Roboto Mono", "Consolas", "Menlo", "DejaVu Sans Mono", "monospace"],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridAxis {
    X,
    Y,
    Both,
}

impl GridAxis {
    pub fn includes_x(&self) -> bool { matches!(self, GridAxis::X | GridAxis::Both) }
    pub fn includes_y(&self) -> bool { matches!(self, GridAxis::Y | GridAxis::Both) }
}

/// A single style setting.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StyleProp {
    TextColour(skia::Color),
    LabelColour(skia::Color),
    EdgeColour(skia::Color),
    AxesFace(skia::Color),
    FigureFace(skia::Color),
    FigureEdge(skia::Color),
    FrameOn(bool),
    FontFamily(FontFamily),
    FontSize(f32),
    Grid(bool),
    GridAxis(GridAxis),
    GridColour(skia::Color),
    GridWidth(f32),
    XTickColour(skia::Color),
    YTickColour(skia::Color),
    XTickBottom(bool),
    YTickLeft(bool),
    SpineLeft(bool),
    SpineBottom(bool),
    SpineRight(bool),
    SpineTop(bool),
}

/// Graph-specific properties applied after every fragment.
pub type StyleOverrides = Vec<StyleProp>;

#[derive(Clone, Debug, PartialEq)]
pub struct StyleFragment {
    pub name: &'static str,
    pub props: Vec<StyleProp>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpineVisibility {
    pub left: bool,
    pub bottom: bool,
    pub right: bool,
    pub top: bool,
}

/// Concrete style consumed by the renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedStyle {
    pub text_colour: skia::Color,
    pub label_colour: skia::Color,
    pub edge_colour: skia::Color,
    pub axes_face: skia::Color,
    pub figure_face: skia::Color,
    pub figure_edge: skia::Color,
    pub frame_on: bool,
    pub font_family: FontFamily,
    /// Base font size in points.
    pub font_size: f32,
    pub grid: bool,
    pub grid_axis: GridAxis,
    pub grid_colour: skia::Color,
    pub grid_width: f32,
    pub x_tick_colour: skia::Color,
    pub y_tick_colour: skia::Color,
    pub x_tick_marks: bool,
    pub y_tick_marks: bool,
    pub spines: SpineVisibility,
}

impl Default for ResolvedStyle {
    fn default() -> Self {
        Self {
            text_colour: skia::Color::BLACK,
            label_colour: skia::Color::BLACK,
            edge_colour: skia::Color::BLACK,
            axes_face: skia::Color::WHITE,
            figure_face: skia::Color::WHITE,
            figure_edge: skia::Color::WHITE,
            frame_on: true,
            font_family: FontFamily::SansSerif,
            font_size: 10.0,
            grid: false,
            grid_axis: GridAxis::Both,
            grid_colour: skia::Color::from_rgb(0xb0, 0xb0, 0xb0),
            grid_width: 0.8,
            x_tick_colour: skia::Color::BLACK,
            y_tick_colour: skia::Color::BLACK,
            x_tick_marks: true,
            y_tick_marks: true,
            spines: SpineVisibility { left: true, bottom: true, right: true, top: true },
        }
    }
}

impl ResolvedStyle {
    /// Defaults, then each fragment in order, then the overrides. Later values win.
    pub fn resolve(fragments: &[StyleFragment], overrides: &[StyleProp]) -> Self {
        let mut style = Self::default();
        for fragment in fragments {
            for &prop in &fragment.props {
                style.apply(prop);
            }
        }
        for &prop in overrides {
            style.apply(prop);
        }
        style
    }

    pub fn apply(&mut self, prop: StyleProp) {
        match prop {
            StyleProp::TextColour(c) => self.text_colour = c,
            StyleProp::LabelColour(c) => self.label_colour = c,
            StyleProp::EdgeColour(c) => self.edge_colour = c,
            StyleProp::AxesFace(c) => self.axes_face = c,
            StyleProp::FigureFace(c) => self.figure_face = c,
            StyleProp::FigureEdge(c) => self.figure_edge = c,
            StyleProp::FrameOn(on) => self.frame_on = on,
            StyleProp::FontFamily(f) => self.font_family = f,
            StyleProp::FontSize(s) => self.font_size = s,
            StyleProp::Grid(on) => self.grid = on,
            StyleProp::GridAxis(a) => self.grid_axis = a,
            StyleProp::GridColour(c) => self.grid_colour = c,
            StyleProp::GridWidth(w) => self.grid_width = w,
            StyleProp::XTickColour(c) => self.x_tick_colour = c,
            StyleProp::YTickColour(c) => self.y_tick_colour = c,
            StyleProp::XTickBottom(on) => self.x_tick_marks = on,
            StyleProp::YTickLeft(on) => self.y_tick_marks = on,
            StyleProp::SpineLeft(on) => self.spines.left = on,
            StyleProp::SpineBottom(on) => self.spines.bottom = on,
            StyleProp::SpineRight(on) => self.spines.right = on,
            StyleProp::SpineTop(on) => self.spines.top = on,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Preset {
    Base,
    Tufte,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StyleSheet {
    pub name: &'static str,
    pub background: skia::Color,
    pub colour: skia::Color,
    pub fontsize: f32,
    pub marker: MarkerStyle,
    preset: Preset,
}

impl Default for StyleSheet {
    fn default() -> Self { Self::tufte() }
}

impl StyleSheet {
    /// Plain defaults: white background, black ink, every spine drawn.
    pub fn base() -> Self {
        Self {
            name: "base",
            background: skia::Color::WHITE,
            colour: skia::Color::BLACK,
            fontsize: 10.0,
            marker: MarkerStyle { marker: Marker::None, size: 6.0, line_style: LineStyle::Solid, line_width: 1.5 },
            preset: Preset::Base,
        }
    }

    pub fn tufte() -> Self {
        Self {
            name: "tufte",
            background: skia::Color::from_rgb(0xff, 0xff, 0xf8),
            colour: skia::Color::from_rgb(0x4b, 0x4b, 0x4b),
            fontsize: 10.0,
            marker: MarkerStyle { marker: Marker::Dot, size: 5.0, line_style: LineStyle::Solid, line_width: 1.0 },
            preset: Preset::Tufte,
        }
    }

    pub fn with_background(mut self, background: skia::Color) -> Self {
        self.background = background;
        self
    }

    pub fn with_colour(mut self, colour: skia::Color) -> Self {
        self.colour = colour;
        self
    }

    pub fn with_fontsize(mut self, fontsize: f32) -> Self {
        self.fontsize = fontsize;
        self
    }

    /// Named fragments in application order.
    pub fn fragments(&self) -> Vec<StyleFragment> {
        match self.preset {
            Preset::Base => vec![self.figure_fragment()],
            Preset::Tufte => vec![
                self.figure_fragment(),
                self.grid_fragment(),
                self.axes_fragment(),
                self.spines_fragment(),
            ],
        }
    }

    pub fn resolve(&self, overrides: &[StyleProp]) -> ResolvedStyle {
        ResolvedStyle::resolve(&self.fragments(), overrides)
    }

    fn figure_fragment(&self) -> StyleFragment {
        let mut props = vec![
            StyleProp::TextColour(self.colour),
            StyleProp::LabelColour(self.colour),
            StyleProp::EdgeColour(self.colour),
            StyleProp::AxesFace(self.background),
            StyleProp::FigureFace(self.background),
            StyleProp::FigureEdge(self.background),
            StyleProp::FontSize(self.fontsize),
            StyleProp::XTickColour(self.colour),
            StyleProp::YTickColour(self.colour),
        ];
        if self.preset == Preset::Tufte {
            props.push(StyleProp::FrameOn(false));
            props.push(StyleProp::FontFamily(FontFamily::Serif));
        }
        StyleFragment { name: "figure", props }
    }

    fn grid_fragment(&self) -> StyleFragment {
        StyleFragment {
            name: "grid",
            props: vec![
                StyleProp::Grid(true),
                StyleProp::GridAxis(GridAxis::X),
                StyleProp::GridColour(self.background),
                StyleProp::GridWidth(1.0),
            ],
        }
    }

    fn axes_fragment(&self) -> StyleFragment {
        StyleFragment {
            name: "axes",
            props: vec![
                StyleProp::XTickColour(self.colour),
                StyleProp::YTickColour(self.colour),
                StyleProp::XTickBottom(false),
                StyleProp::YTickLeft(false),
            ],
        }
    }

    fn spines_fragment(&self) -> StyleFragment {
        StyleFragment {
            name: "spines",
            props: vec![
                StyleProp::SpineLeft(false),
                StyleProp::SpineBottom(false),
                StyleProp::SpineRight(false),
                StyleProp::SpineTop(false),
            ],
        }
    }
}

/// Built-in style sheets.
pub fn presets() -> Vec<StyleSheet> {
    vec![StyleSheet::tufte(), StyleSheet::base()]
}

/// Find a style sheet by `name`, falling back to Tufte.
pub fn find(name: &str) -> StyleSheet {
    presets()
        .into_iter()
        .find(|s| s.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(StyleSheet::tufte)
}

/// Parse `#RRGGBB`, `#RRGGBBAA` or a named colour.
pub fn parse_colour(text: &str) -> GraphResult<skia::Color> {
    let t = text.trim();
    if let Some(hex) = t.strip_prefix('#') {
        let byte = |i: usize| {
            hex.get(i..i + 2)
                .and_then(|h| u8::from_str_radix(h, 16).ok())
                .ok_or_else(|| GraphError::InvalidColour(text.to_string()))
        };
        return match hex.len() {
            6 => Ok(skia::Color::from_argb(255, byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(skia::Color::from_argb(byte(6)?, byte(0)?, byte(2)?, byte(4)?)),
            _ => Err(GraphError::InvalidColour(text.to_string())),
        };
    }
    let rgb = match t.to_ascii_lowercase().as_str() {
        "white" => (0xff, 0xff, 0xff),
        "black" => (0x00, 0x00, 0x00),
        "lightgrey" | "lightgray" => (0xd3, 0xd3, 0xd3),
        "grey" | "gray" => (0x80, 0x80, 0x80),
        "darkgrey" | "darkgray" => (0xa9, 0xa9, 0xa9),
        "dimgrey" | "dimgray" => (0x69, 0x69, 0x69),
        "ivory" => (0xff, 0xff, 0xf0),
        "red" => (0xff, 0x00, 0x00),
        "firebrick" => (0xb2, 0x22, 0x22),
        "steelblue" => (0x46, 0x82, 0xb4),
        "navy" => (0x00, 0x00, 0x80),
        _ => return Err(GraphError::InvalidColour(text.to_string())),
    };
    Ok(skia::Color::from_rgb(rgb.0, rgb.1, rgb.2))
}

/// Default bar fill.
pub fn light_grey() -> skia::Color { skia::Color::from_rgb(0xd3, 0xd3, 0xd3) }
