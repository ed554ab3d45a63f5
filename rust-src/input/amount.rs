//! Reading and validating the daily litre amount.

use std::io::{BufRead, Write};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use regex::Regex;
use thiserror::Error;


/// Prompt shown before reading the amount.
pub const PROMPT: &str = "How many litres did you use today? (whole number, e.g. 50): ";


/// Errors for a rejected amount.
#[derive(Error, Debug, PartialEq)]
pub enum InputError {
    #[error("Invalid input. Please enter a whole number of litres (e.g. 50).")]
    NotWholeNumber,

    #[error("Amount too large. Please enter a smaller whole number of litres.")]
    TooLarge,
}


fn whole_number() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[0-9]+$").expect("static pattern is valid"))
}


/// Parse an answer into litres.
///
/// Only surrounding whitespace is tolerated: no sign, no decimal point.
/// Digit strings beyond the range of `f64` are rejected rather than stored
/// as infinity.
pub fn parse_litres(answer: &str) -> Result<f64, InputError> {
    let answer = answer.trim();
    if !whole_number().is_match(answer) {
        return Err(InputError::NotWholeNumber);
    }

    let litres = answer
        .parse::<f64>()
        .map_err(|_| InputError::NotWholeNumber)?;
    if !litres.is_finite() {
        return Err(InputError::TooLarge);
    }

    Ok(litres)
}


/// Write the prompt and read one line of answer.
pub fn prompt_for_litres<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<f64> {
    write!(output, "{PROMPT}")?;
    output.flush()?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read answer")?;

    Ok(parse_litres(&line)?)
}
