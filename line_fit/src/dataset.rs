use ndarray::{Array1, ArrayView1};

use crate::{FitError, Result};

/// An ordered, immutable set of `(x, y)` samples.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    x: Array1<f64>,
    y: Array1<f64>,
    x_label: Option<String>,
    y_label: Option<String>,
}

impl Dataset {
    /// Creates a new `Dataset`.
    ///
    /// # Arguments
    /// * `x` - The input values.
    /// * `y` - The observed values, paired with `x` by position.
    ///
    /// # Errors
    /// Fails if the dataset is empty, the lengths differ or any value is not finite.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self> {
        if x.is_empty() && y.is_empty() {
            return Err(FitError::InvalidInput("the dataset is empty"));
        }

        if x.len() != y.len() {
            return Err(FitError::ShapeMismatch {
                what: "y values",
                got: y.len(),
                expected: x.len(),
            });
        }

        if let Some(index) = x
            .iter()
            .zip(&y)
            .position(|(x, y)| !x.is_finite() || !y.is_finite())
        {
            return Err(FitError::NonFinite { index });
        }

        Ok(Self {
            x: Array1::from_vec(x),
            y: Array1::from_vec(y),
            x_label: None,
            y_label: None,
        })
    }

    /// Attaches axis labels, usually the column names of the source table.
    pub fn with_labels(mut self, x_label: Option<String>, y_label: Option<String>) -> Self {
        self.x_label = x_label.filter(|l| !l.is_empty());
        self.y_label = y_label.filter(|l| !l.is_empty());
        self
    }

    /// The amount of samples, always at least one.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn x(&self) -> ArrayView1<'_, f64> {
        self.x.view()
    }

    pub fn y(&self) -> ArrayView1<'_, f64> {
        self.y.view()
    }

    pub fn x_label(&self) -> Option<&str> {
        self.x_label.as_deref()
    }

    pub fn y_label(&self) -> Option<&str> {
        self.y_label.as_deref()
    }

    pub fn min_x(&self) -> f64 {
        min(self.x.view())
    }

    pub fn max_x(&self) -> f64 {
        max(self.x.view())
    }

    pub fn min_y(&self) -> f64 {
        min(self.y.view())
    }

    pub fn max_y(&self) -> f64 {
        max(self.y.view())
    }

    /// Returns the samples as `(x, y)` pairs, in order.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.x.iter().copied().zip(self.y.iter().copied()).collect()
    }
}

fn min(values: ArrayView1<f64>) -> f64 {
    values.fold(f64::INFINITY, |acc, &v| acc.min(v))
}

fn max(values: ArrayView1<f64>) -> f64 {
    values.fold(f64::NEG_INFINITY, |acc, &v| acc.max(v))
}
