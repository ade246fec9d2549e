use std::fmt;

/// The parameters of a run at the moment it ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitReport {
    slope: f64,
    intercept: f64,
    loss: f64,
    iterations: usize,
    x_offset: f64,
}

impl FitReport {
    /// Creates a new `FitReport`.
    ///
    /// # Args
    /// * `slope` - The fitted `m`.
    /// * `intercept` - The fitted `b`, in fitting coordinates.
    /// * `loss` - The mean squared error of the fitted line.
    /// * `iterations` - How many steps were taken.
    /// * `x_offset` - The amount subtracted from x before fitting.
    pub fn new(slope: f64, intercept: f64, loss: f64, iterations: usize, x_offset: f64) -> Self {
        Self {
            slope,
            intercept,
            loss,
            iterations,
            x_offset,
        }
    }

    pub fn slope(&self) -> f64 {
        self.slope
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// The intercept against the original x values, `b - m * x_offset`.
    pub fn intercept_original(&self) -> f64 {
        self.intercept - self.slope * self.x_offset
    }

    pub fn loss(&self) -> f64 {
        self.loss
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn x_offset(&self) -> f64 {
        self.x_offset
    }
}

impl fmt::Display for FitReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "m = {:.2}", self.slope)?;
        writeln!(f, "b = {:.2}", self.intercept_original())?;
        writeln!(f, "MSE = {:.2}", self.loss)?;
        write!(f, "Iterations = {}", self.iterations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn console_format() {
        let report = FitReport::new(0.456, 1.234, 0.0049, 12, 0.0);
        assert_eq!(
            report.to_string(),
            "m = 0.46\nb = 1.23\nMSE = 0.00\nIterations = 12"
        );
    }

    #[test]
    fn intercept_against_original_x() {
        let report = FitReport::new(2.0, 3.0, 0.0, 1, 10.0);
        assert_eq!(report.intercept_original(), -17.0);
        assert_eq!(report.to_string().lines().nth(1), Some("b = -17.00"));
    }

    #[test]
    fn divergence_is_printed_not_rejected() {
        let report = FitReport::new(f64::NAN, f64::INFINITY, f64::INFINITY, 3, 0.0);
        assert!(report.to_string().starts_with("m = NaN"));
    }
}
