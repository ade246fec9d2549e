pub mod data;
pub mod headless;
pub mod run;
