use std::{
    ffi::OsString,
    io::{self, BufWriter, Write},
};

use anyhow::{Context, Result};
use clap::{error::ErrorKind, Parser};
use log::debug;

use fizzbuzz::{parse_max, perform};

#[derive(Parser, Debug)]
#[command(version, about, allow_negative_numbers = true)]
struct Cli {
    /// Largest number to print (defaults to 100 when missing or not a positive integer)
    ///
    /// Only the first value is used. Everything after it, including
    /// anything that looks like an option, is ignored.
    #[arg(value_name = "MAX", num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<OsString>,

    /// Paint Fizz, Buzz and FizzBuzz with terminal colours
    #[arg(long)]
    highlight: bool,

    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

fn main() -> Result<()> {
    // A bad command line runs with the defaults rather than failing
    let (cli, ignored) = match Cli::try_parse() {
        Ok(cli) => (cli, None),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => (Cli::parse_from([env!("CARGO_PKG_NAME")]), Some(err)),
        },
    };

    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();

    if let Some(err) = ignored {
        debug!("Ignoring command line: {:?}", err.kind());
    }
    debug!("CLI: {:?}", cli);

    // Non-UTF-8 turns into replacement characters and so never parses
    let args: Vec<String> = cli
        .args
        .iter()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    let max = parse_max(&args);
    debug!("Max: {}", max);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    perform(max, cli.highlight, &mut out)
        .and_then(|()| out.flush())
        .context("Unable to write to stdout")?;

    Ok(())
}
