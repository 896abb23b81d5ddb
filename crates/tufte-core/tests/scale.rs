// File: crates/tufte-core/tests/scale.rs
// Purpose: Data-to-pixel mapping used by the renderer.

use approx::assert_relative_eq;
use tufte_core::scale::LinearScale;
use tufte_core::Range;

#[test]
fn maps_domain_onto_pixels() {
    let s = LinearScale::new(Range::new(0.0, 10.0), 100.0, 300.0);
    assert_relative_eq!(s.to_px(0.0), 100.0);
    assert_relative_eq!(s.to_px(5.0), 200.0);
    assert_relative_eq!(s.to_px(10.0), 300.0);
    assert_relative_eq!(s.from_px(250.0), 7.5, epsilon = 1e-6);
}

#[test]
fn vertical_axes_grow_upwards() {
    let s = LinearScale::new(Range::new(-1.0, 1.0), 500.0, 100.0);
    assert!(s.to_px(1.0) < s.to_px(-1.0));
    assert_relative_eq!(s.to_px(0.0), 300.0);
    assert!(s.contains(1.0) && !s.contains(1.1));
}
