//! FizzBuzz library crate
//!
//! This crate provides the core functionality for the `fizzbuzz` and
//! `tomorrow` CLIs. It is organized into small modules: `classify` (the
//! FizzBuzz rule), `runner` (count validation and sequence output), `error`
//! (the crate error type), `logger` (stderr tracing setup), and `tomorrow`
//! (the independent date printer). The binary `src/main.rs` calls
//! `fizzbuzz_lib::run()` to execute the CLI.
//!
//! Public API
//!
//! - `run()` — CLI entrypoint used by the `fizzbuzz` binary.
//! - `classify::classify` / `classify::label` — label for a single number.
//! - `runner::run` — write the sequence to any `std::io::Write`.
//!
//! See each module for detailed documentation on functions and behavior.

pub mod classify;
pub mod error;
pub mod logger;
pub mod runner;
pub mod tomorrow;

use std::ffi::OsString;
use std::io::{self, BufWriter};

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{ArgAction, Parser};
use tracing::debug;

use crate::error::{FizzBuzzError, Result};
use crate::runner::{DEFAULT_COUNT, NOT_A_NUMBER, parse_count};

/// Top-level CLI types and runner. Keep `main.rs` thin.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of terms to print (default: 100)
    #[arg(value_name = "COUNT", allow_negative_numbers = true)]
    count_arg: Option<String>,

    /// Number of terms to print, as a flag
    #[arg(
        short = 'n',
        long = "count",
        value_name = "COUNT",
        allow_negative_numbers = true,
        conflicts_with = "count_arg"
    )]
    count: Option<String>,

    /// Log debug output to stderr
    #[arg(short = 'v', long = "verbose", action = ArgAction::SetTrue)]
    verbose: bool,
}

impl Cli {
    /// Parse `args`, treating an unknown short flag such as `-1x` or `-abc`
    /// as a malformed count rather than a usage error.
    fn try_parse_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Cli::try_parse_from(args).map_err(|e| {
            if is_unknown_short(&e) {
                FizzBuzzError::invalid_argument(NOT_A_NUMBER)
            } else {
                FizzBuzzError::Usage(e)
            }
        })
    }

    /// Resolve the requested count, falling back to `DEFAULT_COUNT`.
    fn resolve_count(&self) -> Result<i64> {
        match self.count_arg.as_deref().or(self.count.as_deref()) {
            Some(raw) => parse_count(raw),
            None => Ok(DEFAULT_COUNT),
        }
    }
}

fn is_unknown_short(e: &clap::Error) -> bool {
    if e.kind() != ErrorKind::UnknownArgument {
        return false;
    }
    matches!(
        e.get(ContextKind::InvalidArg),
        Some(ContextValue::String(arg)) if !arg.starts_with("--")
    )
}

/// Run the FizzBuzz CLI.
///
/// Parses the optional count, validates it, and prints the sequence to stdout.
/// An invalid count prints a message to stdout and exits with status 1 before
/// any label is written. Write failures are reported on stderr, also with
/// status 1. Other clap errors (unknown long flags, `--help`) keep clap's own
/// output and exit code.
///
/// Example:
///
/// ```no_run
/// fizzbuzz_lib::run(); // called from src/main.rs
/// ```
pub fn run() {
    let result = Cli::try_parse_args(std::env::args_os()).and_then(|cli| {
        logger::init_cli_logger(cli.verbose);
        debug!(?cli, "parsed arguments");

        let count = cli.resolve_count()?;
        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        runner::run(count, &mut out)
    });

    match result {
        Ok(_) => {}
        Err(FizzBuzzError::Usage(e)) => e.exit(),
        Err(e @ FizzBuzzError::InvalidArgument { .. }) => {
            println!("{}", e);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
