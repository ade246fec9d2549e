//! Providers of the samples a line is fitted to.

mod synthetic;
mod table;

pub use synthetic::{MAX_RANGE, Synthetic};
pub use table::{load_table, read_table};
