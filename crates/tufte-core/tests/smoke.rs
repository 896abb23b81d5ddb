// File: crates/tufte-core/tests/smoke.rs
// Purpose: End-to-end render smoke tests writing each supported file format.

use tufte_core::{Graph, GraphError, Series, StepWhere, ValueLabels};

fn line_graph() -> Graph {
    let mut graph = Graph::line();
    graph
        .add(Series::new(vec![0.0, 1.0, 2.0, 3.0, 4.0], vec![0.0, 2.0, 1.0, 3.5, 2.5]))
        .expect("add");
    graph.title("Smoke").x_label("X").y_label("Y");
    graph.limit_spines().expect("limit");
    graph
}

#[test]
fn render_smoke_png() {
    let graph = line_graph();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    graph.save(&out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    let bytes = graph.render_to_png_bytes().expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn render_smoke_other_formats() {
    let graph = line_graph();
    for name in ["smoke.jpg", "smoke.jpeg", "smoke.bmp"] {
        let out = std::path::PathBuf::from("target/test_out").join(name);
        graph.save(&out).expect("save");
        assert!(std::fs::metadata(&out).expect("exists").len() > 0, "{name}");
    }
}

#[test]
fn unknown_extension_is_rejected() {
    let err = line_graph().save("target/test_out/smoke.svg").unwrap_err();
    assert!(matches!(err, GraphError::UnsupportedFormat(_)));
}

#[test]
fn every_variant_renders() {
    let mut hbar = Graph::horizontal_bar();
    hbar.add(Series::categorical(["alpha", "beta", "gamma"], vec![3.0, -1.0, 2.0])).expect("add");
    hbar.show_values(ValueLabels::default()).expect("values");

    let mut vbar = Graph::vertical_bar();
    vbar.add(Series::categorical(["a", "b"], vec![2.0, 5.0])).expect("add");
    vbar.rotate_xlabels(0.8);

    let mut scatter = Graph::scatter();
    scatter.add(Series::from_points(&[(1.0, 2.0), (2.0, 3.0), (3.5, 1.0)])).expect("add");
    scatter.limit_spines().expect("limit");

    let mut step = Graph::step(StepWhere::Mid);
    step.add(Series::new(vec![0.0, 1.0, 2.0, 3.0], vec![1.0, 3.0, 2.0, 2.0])).expect("add");
    step.limit_spines().expect("limit");

    for graph in [hbar, vbar, scatter, step] {
        let frame = graph.draw().unwrap_or_else(|e| panic!("{} failed: {e}", graph.kind()));
        assert_eq!(frame.pixels.len(), frame.width as usize * frame.height as usize * 4);
    }
}

#[test]
fn empty_graph_still_renders() {
    let frame = Graph::line().draw().expect("empty draw");
    assert!(frame.width > 0 && frame.height > 0);
}
