use log::{info, trace};
use ndarray::{Array1, Zip};

use crate::{
    Dataset, FitError, Result,
    loss::{LossFn, Mse},
    optimizer::{GradientDescent, Optimizer},
    report::FitReport,
};

/// How the line parameters are initialized.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InitPolicy {
    /// `(m, b) = (0, 0)`.
    Zero,
    /// `(m, b) = (0, min(y))`, a flat line through the lowest sample.
    #[default]
    MinY,
    Explicit { slope: f64, intercept: f64 },
}

/// The coordinates the line is fitted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum XScale {
    /// Fit on x as given.
    Raw,
    /// Fit on `x - min(x)`. Predictions against the original x reapply the offset.
    #[default]
    ShiftToMin,
}

/// Batch gradient descent over a line `y = m * x + b`.
///
/// Owns the dataset, the current parameters, the cached loss and a cache of the predicted
/// line. Both caches always correspond to the current parameters.
#[derive(Debug, Clone)]
pub struct LineRegression<O: Optimizer = GradientDescent> {
    dataset: Dataset,
    x: Array1<f64>,
    x_offset: f64,

    /// `[m, b]`.
    params: [f64; 2],
    predicted: Array1<f64>,
    loss: f64,

    optimizer: O,
    loss_fn: Mse,
}

impl LineRegression<GradientDescent> {
    /// Returns a new `LineRegression` driven by plain gradient descent.
    ///
    /// # Arguments
    /// * `dataset` - The samples to fit.
    /// * `learning_rate` - The step size, must be positive and finite.
    /// * `init` - How to pick the initial slope and intercept.
    /// * `scale` - Which x coordinates to fit in.
    ///
    /// # Errors
    /// Fails with `InvalidInput` if the learning rate is not positive and finite.
    pub fn new(
        dataset: Dataset,
        learning_rate: f64,
        init: InitPolicy,
        scale: XScale,
    ) -> Result<Self> {
        if !(learning_rate.is_finite() && learning_rate > 0.0) {
            return Err(FitError::InvalidInput(
                "the learning rate must be positive and finite",
            ));
        }

        let regression =
            Self::with_optimizer(dataset, GradientDescent::new(learning_rate), init, scale);

        info!(
            "optimizer ready: {} samples, learning rate {learning_rate}, init {init:?}, scale {scale:?}",
            regression.dataset.len(),
        );

        Ok(regression)
    }

    pub fn learning_rate(&self) -> f64 {
        self.optimizer.learning_rate()
    }
}

impl<O: Optimizer> LineRegression<O> {
    /// Returns a new `LineRegression` using the given update rule.
    pub fn with_optimizer(dataset: Dataset, optimizer: O, init: InitPolicy, scale: XScale) -> Self {
        let x_offset = match scale {
            XScale::Raw => 0.0,
            XScale::ShiftToMin => dataset.min_x(),
        };

        let x = dataset.x().mapv(|x| x - x_offset);

        let params = match init {
            InitPolicy::Zero => [0.0, 0.0],
            InitPolicy::MinY => [0.0, dataset.min_y()],
            InitPolicy::Explicit { slope, intercept } => [slope, intercept],
        };

        let mut regression = Self {
            predicted: Array1::zeros(x.len()),
            x,
            x_offset,
            dataset,
            params,
            loss: 0.0,
            optimizer,
            loss_fn: Mse,
        };

        regression.refresh();
        regression
    }

    /// Performs one batch gradient descent update on `(m, b)`:
    ///
    /// * `dm = (-2 / n) * sum(x_i * (y_i - (m * x_i + b)))`
    /// * `db = (-2 / n) * sum(y_i - (m * x_i + b))`
    ///
    /// Then refreshes the predicted line and the cached loss.
    ///
    /// # Returns
    /// The loss after the update.
    pub fn step(&mut self) -> f64 {
        let n = self.dataset.len() as f64;
        let mut sum_m = 0.0;
        let mut sum_b = 0.0;

        Zip::from(&self.x)
            .and(self.dataset.y())
            .and(&self.predicted)
            .for_each(|&x, &y, &y_pred| {
                let residual = y - y_pred;
                sum_m += x * residual;
                sum_b += residual;
            });

        let grad = [(-2.0 / n) * sum_m, (-2.0 / n) * sum_b];
        self.optimizer.update_params(&mut self.params, &grad);
        self.refresh();

        trace!(
            "step: dm={} db={} m={} b={} loss={}",
            grad[0], grad[1], self.params[0], self.params[1], self.loss
        );

        self.loss
    }

    /// Computes the mean squared error of the current line over every sample.
    pub fn compute_loss(&self) -> f64 {
        self.loss_fn.loss(self.predicted.view(), self.dataset.y())
    }

    /// The loss as of construction or the last `step`.
    pub fn loss(&self) -> f64 {
        self.loss
    }

    /// The slope `m`. Shifting x does not change it.
    pub fn slope(&self) -> f64 {
        self.params[0]
    }

    /// The intercept `b` in fitting coordinates.
    pub fn intercept(&self) -> f64 {
        self.params[1]
    }

    /// The intercept of the fitted line against the original x values.
    pub fn intercept_original(&self) -> f64 {
        self.params[1] - self.params[0] * self.x_offset
    }

    /// The amount subtracted from every x before fitting.
    pub fn x_offset(&self) -> f64 {
        self.x_offset
    }

    /// Predicts `y` for an x in the dataset's original coordinates.
    pub fn predict(&self, x: f64) -> f64 {
        self.params[0] * (x - self.x_offset) + self.params[1]
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Builds a report of the current parameters.
    pub fn report(&self, iterations: usize) -> FitReport {
        FitReport::new(
            self.slope(),
            self.intercept(),
            self.loss,
            iterations,
            self.x_offset,
        )
    }

    fn refresh(&mut self) {
        let [m, b] = self.params;
        self.predicted
            .zip_mut_with(&self.x, |y_pred, &x| *y_pred = m * x + b);
        self.loss = self.compute_loss();
    }
}
