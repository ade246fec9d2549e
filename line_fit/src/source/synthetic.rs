use log::info;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{Dataset, FitError, Result};

/// Largest accepted range, which is also the sample count.
pub const MAX_RANGE: u32 = 1_000_000;

/// Random samples over a numeric range.
///
/// Generates `x = 0, 1, ..., range - 1`, each paired with a random integer `y` in `[0, range]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Synthetic {
    range: u32,
    seed: Option<u64>,
}

impl Synthetic {
    /// Returns a new `Synthetic` source.
    ///
    /// # Arguments
    /// * `range` - Amount of samples and upper bound of the y values.
    /// * `seed` - Makes the samples reproducible when set.
    pub fn new(range: u32, seed: Option<u64>) -> Self {
        Self { range, seed }
    }

    /// Generates the dataset.
    ///
    /// # Errors
    /// Fails with `InvalidInput` if the range is zero or above [`MAX_RANGE`].
    pub fn generate(&self) -> Result<Dataset> {
        if self.range == 0 {
            return Err(FitError::InvalidInput("the synthetic range must be positive"));
        }
        if self.range > MAX_RANGE {
            return Err(FitError::InvalidInput(
                "the synthetic range must be at most 1000000",
            ));
        }

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };

        let x = (0..self.range).map(f64::from).collect();
        let y = (0..self.range)
            .map(|_| f64::from(rng.random_range(0..=self.range)))
            .collect();

        info!(
            "generated {} synthetic samples (seed {:?})",
            self.range, self.seed
        );

        Ok(Dataset::new(x, y)?.with_labels(Some("x".into()), Some("y".into())))
    }
}
