//! Fits a line `y = m * x + b` to 2-D samples with batch gradient descent, one step at a
//! time, so that a display can follow the convergence.

pub mod dataset;
pub mod error;
pub mod loss;
pub mod optimizer;
pub mod regression;
pub mod report;
pub mod source;
pub mod trainer;

pub use dataset::Dataset;
pub use error::{FitError, Result};
pub use optimizer::{GradientDescent, Optimizer};
pub use regression::{InitPolicy, LineRegression, XScale};
pub use report::FitReport;
pub use trainer::{IterationLimit, Phase, Tick, Trainer};
