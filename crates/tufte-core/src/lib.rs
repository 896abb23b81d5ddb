// File: crates/tufte-core/src/lib.rs
// Summary: Core library entry point; Tufte-styled graphs, spine limiting and headless rendering.

pub mod error;
pub mod limits;
pub mod series;
pub mod ticks;
pub mod axis;
pub mod style;
pub mod axes;
pub mod view;
pub mod scale;
pub mod types;
pub mod geometry;
pub mod text;
pub mod render;
pub mod graph;
pub mod telemetry;

pub use error::{GraphError, GraphResult};
pub use limits::{
    apply_spine_bounds, checked_nearest_tick_bounds, combined_range, nearest_tick_bounds, spine_limits, Range,
    SampleSource, SpineBounds,
};
pub use series::Series;
pub use axis::{Axis, AxisId};
pub use style::{presets, LineStyle, Marker, MarkerStyle, ResolvedStyle, StyleSheet};
pub use axes::{Artist, ArtistId, ArtistKind, Axes, Orientation, StepWhere, ValueLabels};
pub use view::ViewState;
pub use render::{render, Frame, RenderOptions};
pub use graph::{Graph, GraphKind};
pub use text::TextShaper;
pub use telemetry::init_default_tracing;
