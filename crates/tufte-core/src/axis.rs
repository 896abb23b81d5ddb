// File: crates/tufte-core/src/axis.rs
// Summary: Per-axis configuration: label, category names, tick target and tick label rotation.

use crate::limits::Range;
use crate::ticks::{format_tick, locate, DEFAULT_TICK_TARGET};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisId {
    X,
    Y,
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: Option<String>,
    /// Category names placed at positions `0..n`; replaces numeric ticks.
    pub categories: Option<Vec<String>>,
    pub tick_target: usize,
    /// Tick label rotation in degrees (counter-clockwise).
    pub label_rotation: f32,
}

impl Default for Axis {
    fn default() -> Self {
        Self { label: None, categories: None, tick_target: DEFAULT_TICK_TARGET, label_rotation: 0.0 }
    }
}

impl Axis {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: Some(label.into()), ..Self::default() }
    }

    pub fn is_categorical(&self) -> bool { self.categories.is_some() }

    /// Tick positions for the given view.
    pub fn ticks(&self, view: Range) -> Vec<f64> {
        match &self.categories {
            Some(names) => (0..names.len()).map(|i| i as f64).collect(),
            None => locate(view, self.tick_target),
        }
    }

    pub fn tick_labels(&self, ticks: &[f64]) -> Vec<String> {
        match &self.categories {
            Some(names) => ticks
                .iter()
                .map(|&t| {
                    let i = t.round();
                    if i >= 0.0 && (i as usize) < names.len() { names[i as usize].clone() } else { String::new() }
                })
                .collect(),
            None => ticks.iter().map(|&t| format_tick(t)).collect(),
        }
    }
}
