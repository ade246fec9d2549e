use log::info;

use crate::{FitReport, LineRegression, optimizer::Optimizer};

/// How many steps a run may take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IterationLimit {
    /// Step until the driving loop stops calling `tick`.
    #[default]
    Unbounded,
    /// Step exactly this many times. Zero means never.
    Limited(usize),
}

/// Lifecycle of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Limited run that has not reached its limit yet.
    Running { limit: usize },
    Unbounded,
    /// Limited run that reached its limit, no more steps are taken.
    Complete,
    /// Run ended by the driving loop before completing.
    Stopped,
}

impl Phase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Complete | Phase::Stopped)
    }
}

/// What a single `tick` did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tick {
    /// One step was taken, holds the new loss.
    Stepped(f64),
    /// The limit was reached on this tick. Emitted once per run.
    Finished(FitReport),
    /// The run already ended, nothing changed.
    Idle,
}

/// Drives a `LineRegression` one step per tick and enforces the iteration policy.
///
/// A limited run calls `step` exactly `limit` times: the tick that takes the last step also
/// returns `Tick::Finished`. A zero limit finishes on the first tick without stepping.
#[derive(Debug, Clone)]
pub struct Trainer<O: Optimizer> {
    regression: LineRegression<O>,
    limit: IterationLimit,
    phase: Phase,
    iterations: usize,
}

impl<O: Optimizer> Trainer<O> {
    /// Returns a new `Trainer`.
    ///
    /// # Arguments
    /// * `regression` - The optimizer state to drive.
    /// * `limit` - The iteration policy.
    pub fn new(regression: LineRegression<O>, limit: IterationLimit) -> Self {
        let phase = match limit {
            IterationLimit::Unbounded => Phase::Unbounded,
            IterationLimit::Limited(limit) => Phase::Running { limit },
        };

        Self {
            regression,
            limit,
            phase,
            iterations: 0,
        }
    }

    /// Advances the run by at most one step.
    pub fn tick(&mut self) -> Tick {
        match self.phase {
            Phase::Complete | Phase::Stopped => Tick::Idle,
            Phase::Running { limit } if self.iterations >= limit => self.complete(),
            Phase::Running { limit } => {
                let loss = self.advance();
                if self.iterations == limit {
                    self.complete()
                } else {
                    Tick::Stepped(loss)
                }
            }
            Phase::Unbounded => Tick::Stepped(self.advance()),
        }
    }

    /// Ends the run from the outside, e.g. when the user closes the display.
    ///
    /// # Returns
    /// The report with the steps taken so far, or `None` if the run had already ended and
    /// was reported.
    pub fn finish(&mut self) -> Option<FitReport> {
        if self.phase.is_terminal() {
            return None;
        }

        self.phase = Phase::Stopped;
        let report = self.report();
        info!("run stopped after {} iterations", self.iterations);
        Some(report)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The amount of steps taken so far.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn limit(&self) -> IterationLimit {
        self.limit
    }

    pub fn regression(&self) -> &LineRegression<O> {
        &self.regression
    }

    /// A report of the current parameters. Does not end the run.
    pub fn report(&self) -> FitReport {
        self.regression.report(self.iterations)
    }

    fn advance(&mut self) -> f64 {
        self.iterations += 1;
        self.regression.step()
    }

    fn complete(&mut self) -> Tick {
        self.phase = Phase::Complete;
        info!("iteration limit reached after {} iterations", self.iterations);
        Tick::Finished(self.report())
    }
}
