// File: crates/tufte-core/src/limits.rs
// Summary: Spine limiting: combined data range of overlaid series, snapped outward to rendered ticks.
// Notes:
// - Snapping always rounds outward to the bracketing tick scanned first, never by proximity.
// - A data bound equal to a tick still moves one tick outward when one exists.
// - A bound outside every tick interval is left unsnapped.

use tracing::{debug, trace};

use crate::axes::Axes;
use crate::error::{GraphError, GraphResult};

/// Closed interval of data values. Contract: `min <= max`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    /// Build a range; the endpoints are swapped when given in the wrong order.
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b { Self { min: a, max: b } } else { Self { min: b, max: a } }
    }

    /// Min/max of the samples, ignoring NaN; `None` when nothing is left.
    pub fn of(samples: &[f64]) -> Option<Self> {
        let mut finite = samples.iter().copied().filter(|v| !v.is_nan());
        let first = finite.next()?;
        let (min, max) = finite.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
        Some(Self { min, max })
    }

    pub fn union(self, other: Range) -> Range {
        Range { min: self.min.min(other.min), max: self.max.max(other.max) }
    }

    pub fn include(self, v: f64) -> Range {
        Range { min: self.min.min(v), max: self.max.max(v) }
    }

    pub fn span(&self) -> f64 { self.max - self.min }

    pub fn contains(&self, v: f64) -> bool { self.min <= v && v <= self.max }
}

/// Extent at which an axis spine is drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpineBounds {
    pub low: f64,
    pub high: f64,
}

impl From<Range> for SpineBounds {
    fn from(r: Range) -> Self { Self { low: r.min, high: r.max } }
}

impl From<SpineBounds> for Range {
    fn from(b: SpineBounds) -> Self { Range::new(b.low, b.high) }
}

/// Anything exposing paired x/y samples for spine limiting.
pub trait SampleSource {
    fn x_samples(&self) -> &[f64];
    fn y_samples(&self) -> &[f64];
}

impl<T: SampleSource + ?Sized> SampleSource for &T {
    fn x_samples(&self) -> &[f64] { (**self).x_samples() }
    fn y_samples(&self) -> &[f64] { (**self).y_samples() }
}

/// Tightest range covering every series. Empty series are skipped.
pub fn combined_range<I>(series: I) -> GraphResult<Range>
where
    I: IntoIterator,
    I::Item: AsRef<[f64]>,
{
    let mut combined: Option<Range> = None;
    for s in series {
        let Some(r) = Range::of(s.as_ref()) else {
            trace!("skipping series without samples");
            continue;
        };
        combined = Some(match combined {
            None => r,
            Some(c) => c.union(r),
        });
    }
    combined.ok_or(GraphError::EmptyInput)
}

/// Snap both ends of `range` outward to the bracketing ticks.
///
/// Fewer than two ticks is a degenerate tick set: the raw range is returned.
pub fn nearest_tick_bounds(range: Range, ticks: &[f64]) -> SpineBounds {
    if ticks.len() < 2 {
        debug!(ticks = ticks.len(), "degenerate tick set; using raw data range");
        return range.into();
    }
    SpineBounds { low: snap_low(range.min, ticks), high: snap_high(range.max, ticks) }
}

/// Same as [`nearest_tick_bounds`] but rejects tick sets that are not ascending.
pub fn checked_nearest_tick_bounds(range: Range, ticks: &[f64]) -> GraphResult<SpineBounds> {
    validate_tick_order(ticks)?;
    Ok(nearest_tick_bounds(range, ticks))
}

pub fn validate_tick_order(ticks: &[f64]) -> GraphResult<()> {
    match ticks.windows(2).position(|w| !(w[0] <= w[1])) {
        Some(i) => Err(GraphError::InvalidTickOrder {
            index: i + 1,
            previous: ticks[i],
            current: ticks[i + 1],
        }),
        None => Ok(()),
    }
}

fn snap_low(low: f64, ticks: &[f64]) -> f64 {
    for pair in ticks.windows(2) {
        let (prev, curr) = (pair[0], pair[1]);
        if prev <= low && low <= curr {
            return prev;
        }
    }
    debug!(low, "low bound not bracketed by ticks; left unsnapped");
    low
}

fn snap_high(high: f64, ticks: &[f64]) -> f64 {
    for pair in ticks.windows(2).rev() {
        let (curr, prev) = (pair[0], pair[1]);
        if curr <= high && high <= prev {
            return prev;
        }
    }
    debug!(high, "high bound not bracketed by ticks; left unsnapped");
    high
}

/// Tick-aligned x and y spine bounds covering every series.
pub fn spine_limits<S: SampleSource>(
    series: &[S],
    x_ticks: &[f64],
    y_ticks: &[f64],
) -> GraphResult<(SpineBounds, SpineBounds)> {
    let x_range = combined_range(series.iter().map(|s| s.x_samples()))?;
    let y_range = combined_range(series.iter().map(|s| s.y_samples()))?;
    let x = checked_nearest_tick_bounds(x_range, x_ticks)?;
    let y = checked_nearest_tick_bounds(y_range, y_ticks)?;
    trace!(?x_range, ?y_range, ?x, ?y, "spine limits");
    Ok((x, y))
}

/// Set the bottom and left spine extents and make both visible.
///
/// Axes without any series data are left untouched.
pub fn apply_spine_bounds(axes: &mut Axes, x_bounds: SpineBounds, y_bounds: SpineBounds) {
    if !axes.has_series_data() {
        return;
    }
    let spines = axes.spines_mut();
    spines.bottom.bounds = Some(x_bounds);
    spines.bottom.visible = true;
    spines.left.bounds = Some(y_bounds);
    spines.left.visible = true;
}
