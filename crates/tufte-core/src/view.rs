// File: crates/tufte-core/src/view.rs
// Visible data ranges derived from the axes' artists, padded by the axes margins.

use crate::axes::Axes;
use crate::axis::AxisId;
use crate::limits::Range;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x: Range,
    pub y: Range,
}

impl Default for ViewState {
    fn default() -> Self {
        Self { x: Range::new(0.0, 1.0), y: Range::new(0.0, 1.0) }
    }
}

impl ViewState {
    pub fn from_axes(axes: &Axes) -> Self {
        let (mx, my) = axes.margins();
        let fallback = Self::default();
        Self {
            x: data_extent(axes, AxisId::X).map(|r| pad(r, mx)).unwrap_or(fallback.x),
            y: data_extent(axes, AxisId::Y).map(|r| pad(r, my)).unwrap_or(fallback.y),
        }
    }
}

fn data_extent(axes: &Axes, axis: AxisId) -> Option<Range> {
    axes.artists()
        .iter()
        .filter_map(|a| a.extent(axis))
        .filter(|r| r.min.is_finite() && r.max.is_finite())
        .reduce(Range::union)
}

fn pad(r: Range, margin: f64) -> Range {
    if r.span().abs() < 1e-12 {
        return Range::new(r.min - 0.5, r.max + 0.5);
    }
    let m = r.span() * margin;
    Range::new(r.min - m, r.max + m)
}
