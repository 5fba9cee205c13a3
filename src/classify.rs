//! FizzBuzz classification.
//!
//! `classify` maps a sequence position to its [`Label`]. The rule is checked
//! in order: divisible by both 3 and 5, then by 3, then by 5, otherwise the
//! number itself. Every integer has a label, so the function cannot fail.

use std::fmt;

/// The label emitted for a single sequence position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Fizz,
    Buzz,
    FizzBuzz,
    Number(i64),
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Fizz => f.write_str("Fizz"),
            Label::Buzz => f.write_str("Buzz"),
            Label::FizzBuzz => f.write_str("FizzBuzz"),
            Label::Number(n) => write!(f, "{}", n),
        }
    }
}

/// Classify `n` into a [`Label`].
pub fn classify(n: i64) -> Label {
    match (n % 3, n % 5) {
        (0, 0) => Label::FizzBuzz,
        (0, _) => Label::Fizz,
        (_, 0) => Label::Buzz,
        _ => Label::Number(n),
    }
}

/// Rendered label text for `n`.
pub fn label(n: i64) -> String {
    classify(n).to_string()
}
