// File: crates/tufte-core/src/ticks.rs
// Summary: Tick locator ("nice" steps of 1, 2, 5 x 10^n) and tick label formatting.

use crate::limits::Range;

/// Default number of ticks the locator aims for.
pub const DEFAULT_TICK_TARGET: usize = 6;

/// Round `span` to a nice number; `round` picks the closest rather than the ceiling.
pub fn nice_number(span: f64, round: bool) -> f64 {
    let exponent = span.log10().floor();
    let fraction = span / 10f64.powf(exponent);
    let nice = if round {
        if fraction < 1.5 { 1.0 } else if fraction < 3.0 { 2.0 } else if fraction < 7.0 { 5.0 } else { 10.0 }
    } else if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * 10f64.powf(exponent)
}

/// Tick positions covering `view`, ascending.
///
/// The outermost ticks sit on or beyond the view edges so spines can snap outward to them.
pub fn locate(view: Range, target: usize) -> Vec<f64> {
    let span = view.span();
    if !span.is_finite() || !view.min.is_finite() {
        return Vec::new();
    }
    if span <= 0.0 || target < 2 {
        return vec![view.min];
    }
    let step = nice_number(nice_number(span, false) / (target - 1) as f64, true);
    let first = (view.min / step).floor() as i64;
    let last = (view.max / step).ceil() as i64;
    (first..=last).map(|k| k as f64 * step).collect()
}

/// Label text for a tick value.
pub fn format_tick(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if magnitude >= 1e6 || magnitude < 1e-4 {
        return format!("{value:e}");
    }
    if (value - value.round()).abs() < 1e-9 {
        return format!("{:.0}", value.round());
    }
    let text = format!("{value:.3}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}
