use line_fit::{
    source::{load_table, read_table, Synthetic},
    Dataset, Result,
};
use log::info;

use crate::config::DataChoice;

/// US GDP in trillions of USD, 1999 to 2022.
const BUNDLED_EXAMPLE: &str = include_str!("../../data/us_gdp_example.csv");

/// Loads the samples for a run.
///
/// # Errors
/// Propagates any invalid input found while reading or generating the samples.
pub fn load(choice: &DataChoice) -> Result<Dataset> {
    match choice {
        DataChoice::Bundled => {
            info!("no input given, using the bundled example");
            read_table(BUNDLED_EXAMPLE.as_bytes())
        }
        DataChoice::File(path) => load_table(path),
        DataChoice::Synthetic { range, seed } => Synthetic::new(*range, *seed).generate(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_example_is_valid() {
        let dataset = load(&DataChoice::Bundled).unwrap();

        assert_eq!(dataset.len(), 24);
        assert_eq!(dataset.min_x(), 1999.);
        assert_eq!(dataset.max_x(), 2022.);
        assert_eq!(dataset.x_label(), Some("Year"));
    }

    #[test]
    fn synthetic_choice() {
        let choice = DataChoice::Synthetic {
            range: 10,
            seed: Some(1),
        };
        assert_eq!(load(&choice).unwrap().len(), 10);
    }
}
