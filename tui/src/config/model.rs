use std::{path::PathBuf, time::Duration};

use line_fit::{InitPolicy, IterationLimit, XScale};

/// Settings read from a JSON run file. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunDraft {
    pub learning_rate: Option<f64>,
    pub limit: Option<usize>,
    pub input: Option<PathBuf>,
    pub synthetic: Option<SyntheticDraft>,
    pub init: Option<InitPolicy>,
    pub scale: Option<XScale>,
    pub tick_ms: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntheticDraft {
    pub range: u32,
    pub seed: Option<u64>,
}

/// Where the samples come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataChoice {
    /// The example dataset shipped with the binary.
    Bundled,
    File(PathBuf),
    Synthetic { range: u32, seed: Option<u64> },
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSettings {
    pub learning_rate: f64,
    pub limit: IterationLimit,
    pub data: DataChoice,
    pub init: InitPolicy,
    pub scale: XScale,
    pub tick: Duration,
    pub headless: bool,
}
