// File: crates/tufte-core/src/types.rs
// Summary: Shared figure constants and screen margins.

/// Default surface width in pixels.
pub const WIDTH: i32 = 1024;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 640;
/// Default pixels per inch; font and marker sizes are given in points (1/72 inch).
pub const DPI: f32 = 100.0;

/// Convert points to pixels at `dpi`.
#[inline]
pub fn points_to_px(points: f32, dpi: f32) -> f32 { points * dpi / 72.0 }

/// Screen margins around the plot area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(72, 24, 24, 56)
    }
}
