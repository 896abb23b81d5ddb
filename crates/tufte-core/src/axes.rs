// File: crates/tufte-core/src/axes.rs
// Summary: Axes state handed to the renderer: drawn artists, x/y axis config, spines, margins and title.

use skia_safe as skia;

use crate::axis::{Axis, AxisId};
use crate::error::{GraphError, GraphResult};
use crate::limits::{Range, SampleSource, SpineBounds};
use crate::style::{Marker, MarkerStyle, SpineVisibility};
use crate::view::ViewState;

/// Where a step line changes level relative to each sample.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StepWhere {
    /// The level of sample `i` applies to the interval `(x[i-1], x[i]]`.
    #[default]
    Pre,
    /// The level of sample `i` applies to the interval `[x[i], x[i+1])`.
    Post,
    /// Level changes halfway between samples.
    Mid,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

/// Bar annotation settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueLabels {
    pub precision: usize,
    /// Gap between bar end and label, in points.
    pub padding: f32,
    /// Label font size in points.
    pub font_size: f32,
}

impl Default for ValueLabels {
    fn default() -> Self { Self { precision: 1, padding: 3.0, font_size: 8.0 } }
}

impl ValueLabels {
    pub fn format(&self, value: f64) -> String { format!("{:.*}", self.precision, value) }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ArtistKind {
    /// Bars from zero; `x`/`y` are plot coordinates, so horizontal bars keep lengths in `x`.
    Bars { orientation: Orientation, width: f64 },
    Line { style: MarkerStyle, step: Option<StepWhere> },
    Scatter { marker: Marker, size: f32, edge: skia::Color },
}

/// One drawn series.
#[derive(Clone, Debug)]
pub struct Artist {
    pub kind: ArtistKind,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub colour: skia::Color,
}

impl Artist {
    pub fn is_bars(&self) -> bool { matches!(self.kind, ArtistKind::Bars { .. }) }

    pub fn is_empty(&self) -> bool { self.x.is_empty() || self.y.is_empty() }

    /// Data extent along `axis`, including the zero baseline and width of bars.
    pub fn extent(&self, axis: AxisId) -> Option<Range> {
        let samples = match axis {
            AxisId::X => &self.x,
            AxisId::Y => &self.y,
        };
        let range = Range::of(samples)?;
        match self.kind {
            ArtistKind::Bars { orientation, width } => {
                let value_axis = match orientation {
                    Orientation::Vertical => AxisId::Y,
                    Orientation::Horizontal => AxisId::X,
                };
                if axis == value_axis {
                    Some(range.include(0.0))
                } else {
                    let half = width / 2.0;
                    Some(Range::new(range.min - half, range.max + half))
                }
            }
            _ => Some(range),
        }
    }
}

impl SampleSource for Artist {
    fn x_samples(&self) -> &[f64] { &self.x }
    fn y_samples(&self) -> &[f64] { &self.y }
}

/// Index of an artist within its axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ArtistId(pub usize);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spine {
    pub visible: bool,
    /// Data extent of the spine; `None` spans the whole plot edge.
    pub bounds: Option<SpineBounds>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spines {
    pub left: Spine,
    pub bottom: Spine,
    pub right: Spine,
    pub top: Spine,
}

impl Spines {
    pub fn from_visibility(v: SpineVisibility) -> Self {
        let spine = |visible| Spine { visible, bounds: None };
        Self { left: spine(v.left), bottom: spine(v.bottom), right: spine(v.right), top: spine(v.top) }
    }
}

/// Default padding added on each side of the data, as a fraction of its span.
pub const DEFAULT_MARGIN: f64 = 0.05;

#[derive(Clone, Debug)]
pub struct Axes {
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub title: Option<String>,
    artists: Vec<Artist>,
    spines: Spines,
    margins: (f64, f64),
    value_labels: Option<ValueLabels>,
}

impl Axes {
    pub fn new(spines: SpineVisibility) -> Self {
        Self {
            x_axis: Axis::default(),
            y_axis: Axis::default(),
            title: None,
            artists: Vec::new(),
            spines: Spines::from_visibility(spines),
            margins: (DEFAULT_MARGIN, DEFAULT_MARGIN),
            value_labels: None,
        }
    }

    pub fn add_artist(&mut self, artist: Artist) -> ArtistId {
        self.artists.push(artist);
        ArtistId(self.artists.len() - 1)
    }

    pub fn artists(&self) -> &[Artist] { &self.artists }

    pub fn artist(&self, id: ArtistId) -> Option<&Artist> { self.artists.get(id.0) }

    /// Artists with numeric x/y series (lines, steps, scatter points). Bars are excluded.
    pub fn lines(&self) -> impl Iterator<Item = &Artist> {
        self.artists.iter().filter(|a| !a.is_bars())
    }

    pub fn has_series_data(&self) -> bool { self.lines().any(|a| !a.is_empty()) }

    pub fn spines(&self) -> &Spines { &self.spines }

    pub fn spines_mut(&mut self) -> &mut Spines { &mut self.spines }

    pub fn axis(&self, id: AxisId) -> &Axis {
        match id {
            AxisId::X => &self.x_axis,
            AxisId::Y => &self.y_axis,
        }
    }

    pub fn axis_mut(&mut self, id: AxisId) -> &mut Axis {
        match id {
            AxisId::X => &mut self.x_axis,
            AxisId::Y => &mut self.y_axis,
        }
    }

    pub fn margins(&self) -> (f64, f64) { self.margins }

    pub fn set_margins(&mut self, x: f64, y: f64) -> GraphResult<()> {
        for m in [x, y] {
            if !m.is_finite() || m < 0.0 {
                return Err(GraphError::InvalidMargin(m));
            }
        }
        self.margins = (x, y);
        Ok(())
    }

    pub fn value_labels(&self) -> Option<ValueLabels> { self.value_labels }

    pub fn set_value_labels(&mut self, labels: Option<ValueLabels>) { self.value_labels = labels; }

    /// Padded data view; ticks are located over this view.
    pub fn data_view(&self) -> ViewState { ViewState::from_axes(self) }

    /// Data view widened to cover any spine bounds, so limited spines are never clipped.
    pub fn view_limits(&self) -> (Range, Range) {
        let view = self.data_view();
        let mut x = view.x;
        let mut y = view.y;
        for spine in [self.spines.bottom, self.spines.top] {
            if let Some(b) = spine.bounds.filter(|_| spine.visible) {
                x = x.union(b.into());
            }
        }
        for spine in [self.spines.left, self.spines.right] {
            if let Some(b) = spine.bounds.filter(|_| spine.visible) {
                y = y.union(b.into());
            }
        }
        (x, y)
    }

    pub fn x_ticks(&self) -> Vec<f64> { self.x_axis.ticks(self.data_view().x) }

    pub fn y_ticks(&self) -> Vec<f64> { self.y_axis.ticks(self.data_view().y) }
}
