use std::time::{Duration, Instant};

use line_fit::{Dataset, FitReport, GradientDescent, Tick, Trainer};
use log::info;

use super::model::{Bounds, FitView, LogLine};

const MAX_LOGS: usize = 200;

/// Owns a run and everything the display needs about it between frames.
pub struct SessionState {
    trainer: Trainer<GradientDescent>,
    points: Vec<(f64, f64)>,
    bounds: Bounds,

    started_at: Instant,
    elapsed: Duration,
    paused: bool,

    /// Set once, when a limited run completes.
    report: Option<FitReport>,
    logs: Vec<LogLine>,
}

impl SessionState {
    /// Creates a new `SessionState` around a trainer that has not ticked yet.
    pub fn new(trainer: Trainer<GradientDescent>) -> Self {
        let dataset = trainer.regression().dataset();
        let points = dataset.points();
        let bounds = bounds(dataset);
        let samples = dataset.len();
        let learning_rate = trainer.regression().learning_rate();

        let mut session = Self {
            trainer,
            points,
            bounds,
            started_at: Instant::now(),
            elapsed: Duration::ZERO,
            paused: false,
            report: None,
            logs: Vec::new(),
        };

        session.push_log(
            "INFO",
            format!("fitting {samples} samples, learning rate {learning_rate}"),
        );
        session
    }

    /// Advances the run by one frame. Does nothing while paused or once the run ended.
    pub fn tick(&mut self) {
        if self.paused || self.trainer.phase().is_terminal() {
            return;
        }

        self.elapsed = self.started_at.elapsed();

        match self.trainer.tick() {
            Tick::Stepped(_) | Tick::Idle => {}
            Tick::Finished(report) => {
                self.push_log(
                    "INFO",
                    format!(
                        "limit reached after {} iterations, MSE {:.4}",
                        report.iterations(),
                        report.loss()
                    ),
                );
                self.report = Some(report);
            }
        }
    }

    pub fn toggle_pause(&mut self) {
        if self.trainer.phase().is_terminal() {
            return;
        }

        self.paused = !self.paused;
        let message = if self.paused { "paused" } else { "resumed" };
        self.push_log(
            "INFO",
            format!("{message} at iteration {}", self.trainer.iterations()),
        );
    }

    /// Returns the current snapshot for rendering.
    pub fn view(&self) -> FitView<'_> {
        let regression = self.trainer.regression();
        let dataset = regression.dataset();

        let fitted = self
            .bounds
            .x
            .iter()
            .map(|&x| (x, regression.predict(x)))
            .filter(|(_, y)| y.is_finite())
            .collect();

        FitView {
            phase: self.trainer.phase(),
            paused: self.paused,
            elapsed: self.elapsed,
            iterations: self.trainer.iterations(),
            limit: self.trainer.limit(),
            learning_rate: regression.learning_rate(),
            slope: regression.slope(),
            intercept: regression.intercept_original(),
            x_offset: regression.x_offset(),
            loss: regression.loss(),
            points: &self.points,
            fitted,
            bounds: self.bounds,
            x_label: dataset.x_label().unwrap_or("x"),
            y_label: dataset.y_label().unwrap_or("y"),
            logs: &self.logs,
        }
    }

    /// Ends the session and hands out its report.
    ///
    /// # Returns
    /// The completion report of a limited run, or the parameters so far if the run was
    /// still going.
    pub fn close(mut self) -> Option<FitReport> {
        let report = self.trainer.finish().or(self.report);
        info!("session closed after {:?}", self.started_at.elapsed());
        report
    }

    fn push_log(&mut self, level: &'static str, message: String) {
        self.logs.push(LogLine { level, message });
        if self.logs.len() > MAX_LOGS {
            let drain = self.logs.len() - MAX_LOGS;
            self.logs.drain(0..drain);
        }
    }
}

/// Leaves one unit around the samples and extra room above them for the overlay.
fn bounds(dataset: &Dataset) -> Bounds {
    let (min_y, max_y) = (dataset.min_y(), dataset.max_y());

    Bounds {
        x: [dataset.min_x() - 1.0, dataset.max_x() + 1.0],
        y: [min_y - 1.0, max_y + 0.5 * (max_y - min_y)],
    }
}
