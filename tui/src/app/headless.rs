use line_fit::{FitReport, GradientDescent, Tick, Trainer};
use log::debug;

const PROGRESS_EVERY: usize = 1000;

/// Runs a trainer to completion without a display.
///
/// The trainer must be limited, an unbounded one would never return.
pub fn run(mut trainer: Trainer<GradientDescent>) -> FitReport {
    loop {
        match trainer.tick() {
            Tick::Finished(report) => return report,
            Tick::Stepped(loss) => {
                if trainer.iterations() % PROGRESS_EVERY == 0 {
                    debug!("iteration {}: MSE {loss}", trainer.iterations());
                }
            }
            Tick::Idle => return trainer.report(),
        }
    }
}
