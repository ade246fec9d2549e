use std::{error::Error, fmt, path::PathBuf, str::FromStr};

pub const USAGE: &str = "
\tUSAGE: line-fit [FLAGS]
\tFLAGS:
\t\t-help            Display this message
\t\t-l <int>         Limit the number of iterations to a specified value
\t\t-lr <float>      Specify a learning rate (default 0.001)
\t\t-i <path>        Specify an input CSV file (default: bundled US GDP example)
\t\t-r <int>         Fit random data over [0, r] instead of a file (r <= 1000000)
\t\t-seed <int>      Seed for the random data
\t\t-c <path>        Read settings from a JSON file, flags take precedence
\t\t-tick <ms>       Milliseconds between animation frames (default 10)
\t\t-headless        Run without the terminal display, requires a limit
\tRUST_LOG logs to stderr with -headless, to line-fit.log otherwise
\tKEYS: q quit, space pause, l toggle events
";

/// What the user asked for on the command line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Run(CliArgs),
}

/// Flags given on the command line. `None` means the flag was absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliArgs {
    pub limit: Option<usize>,
    pub learning_rate: Option<f64>,
    pub input: Option<PathBuf>,
    pub range: Option<u32>,
    pub seed: Option<u64>,
    pub config: Option<PathBuf>,
    pub tick_ms: Option<u64>,
    pub headless: bool,
}

/// Malformed command line arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    MissingValue {
        flag: &'static str,
    },
    InvalidValue {
        flag: &'static str,
        value: String,
        expected: &'static str,
    },
    UnknownFlag(String),
    /// Both a file and random data were requested.
    ConflictingSources,
    /// `-headless` with no limit from the flags or the run file.
    HeadlessWithoutLimit,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MissingValue { flag } => write!(f, "missing value after {flag}"),
            ParseError::InvalidValue {
                flag,
                value,
                expected,
            } => write!(f, "invalid value '{value}' for {flag}, expected {expected}"),
            ParseError::UnknownFlag(flag) => write!(f, "unknown flag '{flag}'"),
            ParseError::ConflictingSources => write!(f, "-i and -r cannot be used together"),
            ParseError::HeadlessWithoutLimit => {
                write!(f, "-headless needs an iteration limit (-l)")
            }
        }
    }
}

impl Error for ParseError {}

/// Parses the arguments that follow the program name.
///
/// `-help` anywhere wins over everything else, including malformed flags.
///
/// # Errors
/// Returns a `ParseError` on unknown flags, missing or non-numeric values and conflicting
/// data sources.
pub fn parse<I, S>(args: I) -> Result<Command, ParseError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(Into::into).collect();
    if args.iter().any(|a| a == "-help") {
        return Ok(Command::Help);
    }

    let mut parsed = CliArgs::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-l" => parsed.limit = Some(value(&mut args, "-l", "a non-negative integer")?),
            "-lr" => parsed.learning_rate = Some(value(&mut args, "-lr", "a number")?),
            "-i" => parsed.input = Some(value(&mut args, "-i", "a path")?),
            "-r" => parsed.range = Some(value(&mut args, "-r", "a positive integer")?),
            "-seed" => parsed.seed = Some(value(&mut args, "-seed", "a non-negative integer")?),
            "-c" => parsed.config = Some(value(&mut args, "-c", "a path")?),
            "-tick" => parsed.tick_ms = Some(value(&mut args, "-tick", "milliseconds")?),
            "-headless" => parsed.headless = true,
            _ => return Err(ParseError::UnknownFlag(arg)),
        }
    }

    if parsed.input.is_some() && parsed.range.is_some() {
        return Err(ParseError::ConflictingSources);
    }

    Ok(Command::Run(parsed))
}

fn value<T: FromStr>(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
    expected: &'static str,
) -> Result<T, ParseError> {
    let raw = args.next().ok_or(ParseError::MissingValue { flag })?;
    raw.parse().map_err(|_| ParseError::InvalidValue {
        flag,
        value: raw,
        expected,
    })
}
