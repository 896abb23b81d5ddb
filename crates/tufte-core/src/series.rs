// File: crates/tufte-core/src/series.rs
// Summary: Series model: paired x/y samples with optional category labels, colour and marker size.

use skia_safe as skia;

use crate::error::{GraphError, GraphResult};
use crate::limits::SampleSource;

#[derive(Clone, Debug, Default)]
pub struct Series {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    /// Category names; when set, `x` holds the category positions `0..n`.
    pub labels: Option<Vec<String>>,
    pub colour: Option<skia::Color>,
    /// Marker size in points (scatter graphs).
    pub size: Option<f32>,
}

impl Series {
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Self {
        Self { x, y, ..Self::default() }
    }

    pub fn from_points(points: &[(f64, f64)]) -> Self {
        let (x, y) = points.iter().copied().unzip();
        Self::new(x, y)
    }

    /// One value per named category, placed at positions `0, 1, 2, ...`.
    pub fn categorical<S: Into<String>>(labels: impl IntoIterator<Item = S>, values: Vec<f64>) -> Self {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        let x = (0..labels.len()).map(|i| i as f64).collect();
        Self { x, y: values, labels: Some(labels), ..Self::default() }
    }

    pub fn with_colour(mut self, colour: skia::Color) -> Self {
        self.colour = Some(colour);
        self
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn len(&self) -> usize { self.x.len() }

    pub fn is_empty(&self) -> bool { self.x.is_empty() }

    /// Check that every x sample has a matching y sample.
    pub fn validate(&self) -> GraphResult<()> {
        if self.x.len() != self.y.len() {
            return Err(GraphError::LengthMismatch { x: self.x.len(), y: self.y.len() });
        }
        Ok(())
    }
}

impl SampleSource for Series {
    fn x_samples(&self) -> &[f64] { &self.x }
    fn y_samples(&self) -> &[f64] { &self.y }
}
