use std::{env, fs::File, path::PathBuf};

use anyhow::{Context, Result};
use env_logger::{Builder, Target};
use log::LevelFilter;

/// Where records go while the terminal display owns the screen.
pub const DISPLAY_LOG_FILE: &str = "line-fit.log";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Sink {
    Stderr,
    File(PathBuf),
    Off,
}

/// Headless runs log to stderr. The display keeps stderr clean: records go to
/// [`DISPLAY_LOG_FILE`] if `RUST_LOG` asks for them, and nowhere otherwise.
fn sink(headless: bool, filter_set: bool) -> Sink {
    match (headless, filter_set) {
        (true, _) => Sink::Stderr,
        (false, true) => Sink::File(PathBuf::from(DISPLAY_LOG_FILE)),
        (false, false) => Sink::Off,
    }
}

/// Installs the global logger, filtered by `RUST_LOG`.
///
/// # Errors
/// Returns an error if the display log file cannot be created.
pub fn init(headless: bool) -> Result<()> {
    let mut builder = Builder::from_default_env();

    match sink(headless, env::var_os("RUST_LOG").is_some()) {
        Sink::Stderr => {}
        Sink::File(path) => {
            let file = File::create(&path)
                .with_context(|| format!("cannot create '{}'", path.display()))?;
            builder.target(Target::Pipe(Box::new(file)));
        }
        Sink::Off => {
            builder.filter_level(LevelFilter::Off);
        }
    }

    builder.init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headless_logs_to_stderr() {
        assert_eq!(sink(true, true), Sink::Stderr);
        assert_eq!(sink(true, false), Sink::Stderr);
    }

    #[test]
    fn display_never_logs_to_the_terminal() {
        assert_eq!(sink(false, false), Sink::Off);
        assert_eq!(
            sink(false, true),
            Sink::File(PathBuf::from(DISPLAY_LOG_FILE))
        );
    }
}
