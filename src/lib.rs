use std::{
    fmt,
    io::{self, Write},
};

use log::{debug, trace};
use yansi::{Color, Paint};

/// Maximum used when no usable value is given on the command line
pub const DEFAULT_MAX: i64 = 100;

/// Text shown for a single number
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Label {
    FizzBuzz,
    Fizz,
    Buzz,
    Number(i64),
}

impl Label {
    /// Label painted for a terminal; plain numbers are left as is
    pub fn painted(self) -> Paint<Label> {
        match self {
            Label::FizzBuzz => Paint::new(self).fg(Color::Magenta).bold(),
            Label::Fizz => Paint::new(self).fg(Color::Yellow).bold(),
            Label::Buzz => Paint::new(self).fg(Color::Cyan).bold(),
            Label::Number(_) => Paint::new(self),
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::FizzBuzz => f.write_str("FizzBuzz"),
            Label::Fizz => f.write_str("Fizz"),
            Label::Buzz => f.write_str("Buzz"),
            Label::Number(i) => write!(f, "{}", i),
        }
    }
}

pub fn classify(i: i64) -> Label {
    match (i % 3, i % 5) {
        (0, 0) => Label::FizzBuzz,
        (0, _) => Label::Fizz,
        (_, 0) => Label::Buzz,
        _ => Label::Number(i),
    }
}

/// Resolves the maximum from the positional arguments.
///
/// Only the first argument is considered. Anything missing, unparseable or
/// below 1 silently falls back to [`DEFAULT_MAX`].
pub fn parse_max<S: AsRef<str>>(args: &[S]) -> i64 {
    let Some(first) = args.first() else {
        debug!("No max given, using {}", DEFAULT_MAX);
        return DEFAULT_MAX;
    };
    let first: &str = first.as_ref();
    match first.parse::<i64>() {
        Ok(max) if max >= 1 => max,
        _ => {
            debug!("Unusable max `{}`, using {}", first, DEFAULT_MAX);
            DEFAULT_MAX
        }
    }
}

/// Writes `<i>: <label>` for every `i` from 1 to `max` inclusive
///
/// With `highlight` set, substitution words are painted for a terminal.
pub fn perform<W: Write>(max: i64, highlight: bool, out: &mut W) -> io::Result<()> {
    for i in 1..=max {
        let label = classify(i);
        trace!("{}: {:?}", i, label);
        if highlight {
            writeln!(out, "{}: {}", i, label.painted())?;
        } else {
            writeln!(out, "{}: {}", i, label)?;
        }
    }
    Ok(())
}
