use std::time::Duration;

use line_fit::{IterationLimit, Phase};

/// Axis bounds of the chart, `[low, high]` per axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: [f64; 2],
    pub y: [f64; 2],
}

/// A single log entry shown in the event panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub level: &'static str,
    pub message: String,
}

/// Snapshot rendered by the TUI on every frame.
#[derive(Debug, Clone)]
pub struct FitView<'a> {
    pub phase: Phase,
    pub paused: bool,
    pub elapsed: Duration,
    pub iterations: usize,
    pub limit: IterationLimit,
    pub learning_rate: f64,

    pub slope: f64,
    /// Intercept against the original x values.
    pub intercept: f64,
    pub x_offset: f64,
    pub loss: f64,

    pub points: &'a [(f64, f64)],
    /// Endpoints of the fitted line, non-finite ones left out.
    pub fitted: Vec<(f64, f64)>,
    pub bounds: Bounds,
    pub x_label: &'a str,
    pub y_label: &'a str,

    pub logs: &'a [LogLine],
}
