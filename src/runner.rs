//! Sequence runner.
//!
//! Validates a requested count and writes `classify(i)` for every `i` in
//! `1..=count`, one label per line. Validation always happens before the first
//! byte is written, so a rejected count produces no output at all.

use std::io::Write;

use tracing::debug;

use crate::classify::{Label, classify};
use crate::error::{FizzBuzzError, Result};

/// Number of terms printed when no count is supplied.
pub const DEFAULT_COUNT: i64 = 100;

pub(crate) const NOT_A_NUMBER: &str = "Please provide a valid number";
const NOT_POSITIVE: &str = "Please provide a positive number of iterations";

/// Parse a user-supplied count and check that it is positive.
///
/// Surrounding whitespace is ignored. Anything that does not parse as an
/// integer, and any integer `<= 0`, yields `FizzBuzzError::InvalidArgument`.
pub fn parse_count(raw: &str) -> Result<i64> {
    let count = raw
        .trim()
        .parse::<i64>()
        .map_err(|_| FizzBuzzError::invalid_argument(NOT_A_NUMBER))?;
    validate_count(count)
}

/// Reject non-positive counts.
pub fn validate_count(count: i64) -> Result<i64> {
    if count <= 0 {
        return Err(FizzBuzzError::invalid_argument(NOT_POSITIVE));
    }
    Ok(count)
}

/// Lazily yield the labels for `1..=count`.
pub fn labels(count: i64) -> Result<impl Iterator<Item = Label>> {
    let count = validate_count(count)?;
    Ok((1..=count).map(classify))
}

/// Write the sequence for `count` to `out`, one label per line.
///
/// Returns the number of lines written. An invalid count returns
/// `InvalidArgument` without touching `out`.
pub fn run<W: Write>(count: i64, out: &mut W) -> Result<u64> {
    let labels = labels(count)?;
    debug!(count, "writing sequence");

    let mut written = 0u64;
    for label in labels {
        writeln!(out, "{}", label)?;
        written += 1;
    }
    out.flush()?;

    debug!(written, "sequence complete");
    Ok(written)
}
