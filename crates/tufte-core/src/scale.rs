// File: crates/tufte-core/src/scale.rs
// Summary: Linear data-to-pixel transform for one axis.

use crate::limits::Range;

/// Maps the data range onto the pixel span `[start_px, end_px]`.
///
/// `end_px` may be smaller than `start_px` (vertical axes grow upwards).
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub domain: Range,
    pub start_px: f32,
    pub end_px: f32,
}

impl LinearScale {
    pub fn new(domain: Range, start_px: f32, end_px: f32) -> Self {
        Self { domain, start_px, end_px }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let span = self.domain.span().max(1e-12);
        self.start_px + ((v - self.domain.min) / span) as f32 * (self.end_px - self.start_px)
    }

    #[inline]
    pub fn from_px(&self, px: f32) -> f64 {
        let extent = self.end_px - self.start_px;
        if extent.abs() < f32::EPSILON {
            return self.domain.min;
        }
        self.domain.min + ((px - self.start_px) / extent) as f64 * self.domain.span()
    }

    pub fn contains(&self, v: f64) -> bool {
        let eps = self.domain.span().abs() * 1e-9;
        v >= self.domain.min - eps && v <= self.domain.max + eps
    }
}
