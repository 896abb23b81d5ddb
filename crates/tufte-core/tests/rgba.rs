// File: crates/tufte-core/tests/rgba.rs
// Purpose: Validate RGBA frame shape and a few styled pixels.

use tufte_core::render::RenderOptions;
use tufte_core::style::StyleSheet;
use tufte_core::{Graph, GraphError, GraphKind, Series};

fn opts() -> RenderOptions {
    RenderOptions { draw_labels: false, ..RenderOptions::default() } // avoid font variance
}

#[test]
fn render_rgba8_buffer() {
    let mut graph = Graph::line().with_options(opts());
    graph.add(Series::new(vec![0.0, 4.0], vec![0.0, 4.0])).expect("add");
    let frame = graph.draw().expect("rgba render");
    assert_eq!(frame.width as usize * frame.height as usize * 4, frame.pixels.len());
    assert_eq!(frame.stride(), frame.width as usize * 4);
    assert_eq!((frame.width, frame.height), (1024, 640));

    // Tufte background in the top-left corner, opaque
    assert_eq!(frame.pixel(0, 0), Some([0xff, 0xff, 0xf8, 0xff]));
    assert_eq!(frame.pixel(frame.width, 0), None);
}

#[test]
fn base_sheet_paints_white() {
    let mut graph = Graph::with_stylesheet(GraphKind::Line, StyleSheet::base()).with_options(opts());
    graph.add(Series::new(vec![0.0, 1.0], vec![0.0, 1.0])).expect("add");
    let frame = graph.draw().expect("render");
    // inside the 1px frame edge, which is also white
    assert_eq!(frame.pixel(5, 5), Some([0xff, 0xff, 0xff, 0xff]));
}

#[test]
fn limited_spine_stops_at_its_bounds() {
    let mut graph = Graph::with_stylesheet(GraphKind::Line, StyleSheet::base()).with_options(opts());
    graph.add(Series::new(vec![1.0, 9.0], vec![1.0, 9.0])).expect("add");
    graph.margins(0.2, None).expect("margins");
    graph.limit_spines().expect("limit");
    let frame = graph.draw().expect("render");

    let insets = opts().insets;
    let bottom = frame.height - insets.bottom;
    let left = insets.left;
    // the plot's bottom-left corner lies outside the limited x range, so no spine ink there
    let bounds = graph.axes().spines().bottom.bounds.expect("bounds");
    let (view, _) = graph.axes().view_limits();
    assert!(bounds.low > view.min);
    assert_eq!(frame.pixel(left + 1, bottom), Some([0xff, 0xff, 0xff, 0xff]));
}

#[test]
fn zero_sized_figure_is_rejected() {
    let graph = Graph::line().with_options(RenderOptions { width: 0, ..opts() });
    assert!(matches!(graph.draw(), Err(GraphError::InvalidFigureSize { width: 0, .. })));
}
