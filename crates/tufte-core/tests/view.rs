// File: crates/tufte-core/tests/view.rs
// Purpose: Validate the padded data view over mixed artists.

use approx::assert_relative_eq;
use tufte_core::{Graph, Series, ViewState};

#[test]
fn view_pads_line_data_by_margins() {
    let mut graph = Graph::line();
    graph.add(Series::new(vec![0.0, 10.0], vec![-2.0, 2.0])).expect("add");
    let view = graph.axes().data_view();
    assert_relative_eq!(view.x.min, -0.5, epsilon = 1e-12);
    assert_relative_eq!(view.x.max, 10.5, epsilon = 1e-12);
    assert_relative_eq!(view.y.min, -2.2, epsilon = 1e-12);
    assert_relative_eq!(view.y.max, 2.2, epsilon = 1e-12);
}

#[test]
fn bars_include_baseline_and_width() {
    let mut graph = Graph::vertical_bar();
    graph.margins(0.0, None).expect("margins");
    graph.add(Series::categorical(["a", "b", "c"], vec![4.0, 6.0, 5.0])).expect("add");
    let view = graph.axes().data_view();
    // categories 0..2 widened by half a bar on each side
    assert_relative_eq!(view.x.min, -0.4, epsilon = 1e-12);
    assert_relative_eq!(view.x.max, 2.4, epsilon = 1e-12);
    // value axis always reaches zero
    assert_relative_eq!(view.y.min, 0.0, epsilon = 1e-12);
    assert_relative_eq!(view.y.max, 6.0, epsilon = 1e-12);
}

#[test]
fn flat_data_is_widened() {
    let mut graph = Graph::scatter();
    graph.add(Series::new(vec![3.0, 3.0], vec![1.0, 2.0])).expect("add");
    let view = graph.axes().data_view();
    assert_relative_eq!(view.x.min, 2.5, epsilon = 1e-12);
    assert_relative_eq!(view.x.max, 3.5, epsilon = 1e-12);
}

#[test]
fn empty_axes_use_unit_view() {
    let graph = Graph::line();
    assert_eq!(graph.axes().data_view(), ViewState::default());
}
