use ndarray::{ArrayView1, Zip};

pub trait LossFn {
    fn loss(&self, y_pred: ArrayView1<f64>, y: ArrayView1<f64>) -> f64;
}

/// Mean squared error loss function.
#[derive(Debug, Default, Clone, Copy)]
pub struct Mse;

impl Mse {
    /// Returns a new `Mse`.
    pub fn new() -> Self {
        Self
    }
}

impl LossFn for Mse {
    /// Plain summation of the squared residuals, divided by the amount of samples.
    ///
    /// Returns `0.0` for empty inputs.
    fn loss(&self, y_pred: ArrayView1<f64>, y: ArrayView1<f64>) -> f64 {
        if y.is_empty() {
            return 0.0;
        }

        let sum = Zip::from(&y_pred)
            .and(&y)
            .fold(0.0, |acc, &p, &t| acc + (t - p).powi(2));

        sum / y.len() as f64
    }
}
