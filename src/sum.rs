use crate::command::Exercise;
use crate::io_adapters::InputSource;
use anyhow::Result;
use regex::Regex;
use std::io::Write;
use std::sync::LazyLock;
use thiserror::Error;
use tracing::debug;

pub const PROMPT: &str = "Enter the value of n: ";

/// Largest accepted `n`. Anything whose digits overflow `i64` is rejected.
pub const MAX_N: u64 = i64::MAX as u64;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SumError {
    /// Not an integer, or an integer below 1.
    #[error("Number invalid")]
    InvalidInput,
}

/// Parse `n` from user text.
///
/// Leading whitespace is skipped and an optional sign is accepted; the longest
/// run of digits after that is the number and anything following it is ignored
/// (`"12abc"` is 12, `"3.7"` is 3).
pub fn parse_n(text: &str) -> Result<u64, SumError> {
    static LEADING_INT: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^\s*([+-]?[0-9]+)").unwrap());

    let caps = LEADING_INT.captures(text).ok_or(SumError::InvalidInput)?;
    let n: i64 = caps[1].parse().map_err(|_| SumError::InvalidInput)?;
    if n < 1 {
        return Err(SumError::InvalidInput);
    }
    Ok(n as u64)
}

/// Sum of `1..=n` by accumulation.
pub fn sum_iterative(n: u64) -> u128 {
    let mut sum: u128 = 0;
    for i in 1..=n {
        sum += u128::from(i);
    }
    sum
}

/// Sum of `1..=n` as `n * (n + 1) / 2`. Cannot overflow for any `u64`.
pub fn sum_closed_form(n: u64) -> u128 {
    let n = u128::from(n);
    n * (n + 1) / 2
}

/// Reads `n` and prints the sum of the first `n` natural numbers.
#[derive(Default)]
pub struct SumCalculator;

impl Exercise for SumCalculator {
    fn name(&self) -> &'static str {
        "sum"
    }

    fn run(&self, input: &mut dyn InputSource, stdout: &mut dyn Write) -> Result<()> {
        let line = input.read_line(PROMPT)?;
        match parse_n(&line) {
            Ok(n) => {
                let sum = sum_closed_form(n);
                debug!(n, %sum, "computed sum");
                writeln!(stdout, "Sum = {}", sum)?;
            }
            Err(e) => {
                debug!(input = %line, "rejected input");
                writeln!(stdout, "{}", e)?;
            }
        }
        Ok(())
    }
}
