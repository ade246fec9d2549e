mod builder;
mod json;
mod model;

pub use builder::build;
pub use json::load_run;
pub use model::{DataChoice, RunDraft};
