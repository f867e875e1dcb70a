use clap::Parser;
use perm_gen::{print_sequence, Error, GeneratorConfig};
use std::ffi::{OsStr, OsString};
use std::io;

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

// Every argument is data: no help or version flags, hyphens and non-UTF-8 allowed.
#[derive(Parser)]
#[command(
    about = "Print a random permutation of 0..COUNT on one line",
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// Number of values to permute
    #[arg(allow_hyphen_values = true)]
    count: OsString,
    /// Integer seed for a reproducible order; anything else is ignored
    #[arg(allow_hyphen_values = true)]
    seed: Option<OsString>,
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    rest: Vec<OsString>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    if !cli.rest.is_empty() {
        log::debug!("ignoring extra arguments {:?}", cli.rest);
    }

    let count = cli.count.to_string_lossy();
    let seed = cli.seed.as_deref().and_then(OsStr::to_str);
    let config = GeneratorConfig::from_args(&count, seed)?;
    let sequence = config.generate();

    match print_sequence(&sequence) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        Err(err) => Err(Error::from(err).into()),
    }
}
