use std::time::Duration;

use line_fit::IterationLimit;
use log::warn;

use super::model::{DataChoice, RunDraft, RunSettings};
use crate::cli::{CliArgs, ParseError};

pub const DEFAULT_LEARNING_RATE: f64 = 0.001;
pub const DEFAULT_TICK_MS: u64 = 10;

/// Merges the run file and the command line flags into [`RunSettings`].
///
/// Flags take precedence over the run file, which takes precedence over the defaults.
///
/// # Errors
/// Returns [`ParseError::HeadlessWithoutLimit`] if neither source sets a limit for a
/// headless run.
pub fn build(draft: RunDraft, args: &CliArgs) -> Result<RunSettings, ParseError> {
    let limit = match args.limit.or(draft.limit) {
        Some(limit) => IterationLimit::Limited(limit),
        None => IterationLimit::Unbounded,
    };

    if args.headless && limit == IterationLimit::Unbounded {
        return Err(ParseError::HeadlessWithoutLimit);
    }

    let draft_seed = draft.synthetic.and_then(|s| s.seed);
    let data = if let Some(path) = &args.input {
        DataChoice::File(path.clone())
    } else if let Some(range) = args.range {
        DataChoice::Synthetic {
            range,
            seed: args.seed.or(draft_seed),
        }
    } else if let Some(path) = draft.input {
        DataChoice::File(path)
    } else if let Some(synthetic) = draft.synthetic {
        DataChoice::Synthetic {
            range: synthetic.range,
            seed: args.seed.or(synthetic.seed),
        }
    } else {
        DataChoice::Bundled
    };

    if args.seed.is_some() && !matches!(data, DataChoice::Synthetic { .. }) {
        warn!("-seed only applies to random data, ignoring it");
    }

    Ok(RunSettings {
        learning_rate: args
            .learning_rate
            .or(draft.learning_rate)
            .unwrap_or(DEFAULT_LEARNING_RATE),
        limit,
        data,
        init: draft.init.unwrap_or_default(),
        scale: draft.scale.unwrap_or_default(),
        tick: Duration::from_millis(args.tick_ms.or(draft.tick_ms).unwrap_or(DEFAULT_TICK_MS)),
        headless: args.headless,
    })
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use line_fit::{InitPolicy, XScale};

    use super::*;
    use crate::config::model::SyntheticDraft;

    #[test]
    fn defaults() {
        let settings = build(RunDraft::default(), &CliArgs::default()).unwrap();

        assert_eq!(settings.learning_rate, DEFAULT_LEARNING_RATE);
        assert_eq!(settings.limit, IterationLimit::Unbounded);
        assert_eq!(settings.data, DataChoice::Bundled);
        assert_eq!(settings.init, InitPolicy::MinY);
        assert_eq!(settings.scale, XScale::ShiftToMin);
        assert_eq!(settings.tick, Duration::from_millis(DEFAULT_TICK_MS));
        assert!(!settings.headless);
    }

    #[test]
    fn flags_override_the_run_file() {
        let draft = RunDraft {
            learning_rate: Some(0.5),
            limit: Some(10),
            input: Some("from_file.csv".into()),
            tick_ms: Some(100),
            ..Default::default()
        };
        let args = CliArgs {
            learning_rate: Some(0.002),
            limit: Some(0),
            range: Some(30),
            ..Default::default()
        };

        let settings = build(draft, &args).unwrap();

        assert_eq!(settings.learning_rate, 0.002);
        assert_eq!(settings.limit, IterationLimit::Limited(0));
        assert_eq!(
            settings.data,
            DataChoice::Synthetic {
                range: 30,
                seed: None
            }
        );
        assert_eq!(settings.tick, Duration::from_millis(100));
    }

    #[test]
    fn run_file_fills_the_gaps() {
        let draft = RunDraft {
            synthetic: Some(SyntheticDraft {
                range: 12,
                seed: Some(4),
            }),
            init: Some(InitPolicy::Zero),
            scale: Some(XScale::Raw),
            ..Default::default()
        };

        let settings = build(draft, &CliArgs::default()).unwrap();

        assert_eq!(
            settings.data,
            DataChoice::Synthetic {
                range: 12,
                seed: Some(4)
            }
        );
        assert_eq!(settings.init, InitPolicy::Zero);
        assert_eq!(settings.scale, XScale::Raw);
    }

    #[test]
    fn input_flag_beats_synthetic_run_file() {
        let draft = RunDraft {
            synthetic: Some(SyntheticDraft {
                range: 12,
                seed: None,
            }),
            ..Default::default()
        };
        let args = CliArgs {
            input: Some("gdp.csv".into()),
            ..Default::default()
        };

        let settings = build(draft, &args).unwrap();
        assert_eq!(settings.data, DataChoice::File(PathBuf::from("gdp.csv")));
    }

    #[test]
    fn headless_needs_a_limit() {
        let args = CliArgs {
            headless: true,
            ..Default::default()
        };
        assert_eq!(
            build(RunDraft::default(), &args).unwrap_err(),
            ParseError::HeadlessWithoutLimit
        );

        let draft = RunDraft {
            limit: Some(50),
            ..Default::default()
        };
        assert!(build(draft, &args).unwrap().headless);
    }
}
