use std::{env, process};

use anyhow::{anyhow, Context, Result};
use line_fit::{LineRegression, Trainer};
use log::info;

mod app;
mod cli;
mod config;
mod logging;
mod state;
mod ui;

use cli::{Command, ParseError, USAGE};
use config::{DataChoice, RunDraft};
use state::session::SessionState;

fn usage_error(e: ParseError) -> ! {
    eprintln!("error: {e}");
    eprintln!("run with -help for usage");
    process::exit(2);
}

fn main() -> Result<()> {
    let args = match cli::parse(env::args().skip(1)) {
        Ok(Command::Help) => {
            println!("{USAGE}");
            return Ok(());
        }
        Ok(Command::Run(args)) => args,
        Err(e) => usage_error(e),
    };

    logging::init(args.headless)?;

    let draft = match &args.config {
        Some(path) => config::load_run(path).map_err(|e| anyhow!(e))?,
        None => RunDraft::default(),
    };
    let settings = match config::build(draft, &args) {
        Ok(settings) => settings,
        Err(e) => usage_error(e),
    };

    let dataset = app::data::load(&settings.data).with_context(|| match &settings.data {
        DataChoice::File(path) => format!("cannot load '{}'", path.display()),
        _ => "cannot load the samples".to_string(),
    })?;

    let regression =
        LineRegression::new(dataset, settings.learning_rate, settings.init, settings.scale)
            .context("cannot build the optimizer")?;
    let trainer = Trainer::new(regression, settings.limit);

    let report = if settings.headless {
        Some(app::headless::run(trainer))
    } else {
        app::run::run(SessionState::new(trainer), settings.tick)?
    };

    if let Some(report) = report {
        info!("final report: {report:?}");
        println!("{report}");
    }

    Ok(())
}
