// File: crates/tufte-core/tests/ticks.rs
// Purpose: Tick locator coverage and tick label formatting.

use approx::assert_relative_eq;
use tufte_core::ticks::{format_tick, locate, nice_number};
use tufte_core::Range;

#[test]
fn nice_numbers() {
    assert_eq!(nice_number(3.3, false), 5.0);
    assert_eq!(nice_number(1.0, true), 1.0);
    assert_eq!(nice_number(2.4, true), 2.0);
    assert_relative_eq!(nice_number(0.045, true), 0.05, epsilon = 1e-12);
    assert_eq!(nice_number(820.0, false), 1000.0);
}

#[test]
fn ticks_enclose_the_view() {
    let view = Range::new(0.85, 4.15);
    let ticks = locate(view, 6);
    assert_eq!(ticks, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
    assert!(ticks[0] <= view.min && *ticks.last().unwrap() >= view.max);
}

#[test]
fn ticks_are_ascending() {
    for view in [Range::new(-13.2, 7.9), Range::new(0.001, 0.0042), Range::new(1.0e4, 9.0e5)] {
        let ticks = locate(view, 6);
        assert!(ticks.len() >= 2, "{view:?}");
        assert!(ticks.windows(2).all(|w| w[0] < w[1]), "{ticks:?}");
        assert!(ticks[0] <= view.min && *ticks.last().unwrap() >= view.max);
    }
}

#[test]
fn degenerate_views() {
    assert_eq!(locate(Range::new(2.0, 2.0), 6), vec![2.0]);
    assert_eq!(locate(Range::new(0.0, 1.0), 1), vec![0.0]);
    assert!(locate(Range::new(0.0, f64::INFINITY), 6).is_empty());
}

#[test]
fn labels() {
    assert_eq!(format_tick(0.0), "0");
    assert_eq!(format_tick(5.0), "5");
    assert_eq!(format_tick(-20.0), "-20");
    assert_eq!(format_tick(0.25), "0.25");
    assert_eq!(format_tick(0.1 + 0.2), "0.3");
    assert_eq!(format_tick(2.5e6), "2.5e6");
    assert_eq!(format_tick(1.0e-5), "1e-5");
}
