//! Formatting of difficulty values into compact, human-readable strings.

use crate::types::{DifficultyError, DifficultyResult};
use crate::units::unit_for;
use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::Value;
use std::fmt;

/// The sentinel returned in place of a formatted value when the input is
/// invalid.
pub const INVALID: &str = "Invalid";

/// The number of decimal places scaled values are rounded to.
const DECIMALS: u32 = 2;

/// Rounds a scaled value to [`DECIMALS`] places, with exact midpoints
/// rounded away from zero.
///
/// The value is converted to a decimal without loss, so ties are decided on
/// the exact binary value rather than on its shortest representation. Values
/// too large for a decimal are integers, and are rendered directly.
fn round_scaled(scaled: f64) -> String {
    match Decimal::from_f64_retain(scaled) {
        Some(decimal) => decimal
            .round_dp_with_strategy(DECIMALS, RoundingStrategy::MidpointAwayFromZero)
            .to_string(),
        None => format!("{:.*}", DECIMALS as usize, scaled),
    }
}

/// Removes trailing fractional zeros, and the decimal point if nothing
/// remains after it.
fn trim_fraction(rendered: &str) -> &str {
    if rendered.contains('.') {
        rendered.trim_end_matches('0').trim_end_matches('.')
    } else {
        rendered
    }
}

/// A difficulty value that formats itself with a magnitude suffix.
///
/// ```
/// use difficulty_format::DisplayDifficulty;
///
/// assert_eq!(format!("diff {}", DisplayDifficulty(2_000_000.0)), "diff 2M");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayDifficulty(pub f64);

impl fmt::Display for DisplayDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let difficulty = self.0;

        if difficulty.is_nan() {
            return f.write_str(INVALID);
        }

        match unit_for(difficulty) {
            Some(unit) => {
                let rounded = round_scaled(difficulty / unit.value);
                write!(f, "{}{}", trim_fraction(&rounded), unit.symbol)
            }
            // Negative zero renders like zero.
            None if difficulty == 0.0 => f.write_str("0"),
            None => write!(f, "{difficulty}"),
        }
    }
}

/// Formats a difficulty value, reporting invalid input as an error.
///
/// # Errors
///
/// This will return an error if the difficulty is NaN.
pub fn try_format_difficulty(difficulty: f64) -> DifficultyResult<String> {
    if difficulty.is_nan() {
        Err(DifficultyError::NotANumber)
    } else {
        Ok(DisplayDifficulty(difficulty).to_string())
    }
}

/// Formats a difficulty value into a human-readable string with a magnitude
/// suffix, e.g. `1500` becomes `"1.5K"`.
///
/// Values below one thousand, including zero and negative values, are
/// rendered without a suffix. NaN is rendered as [`INVALID`].
#[must_use]
pub fn format_difficulty(difficulty: f64) -> String {
    try_format_difficulty(difficulty).unwrap_or_else(|_| INVALID.to_owned())
}

/// Returns the name of a JSON value's kind.
fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Formats a dynamically typed difficulty value, reporting invalid input as
/// an error.
///
/// # Errors
///
/// This will return an error if the value is not a JSON number.
pub fn try_format_value(value: &Value) -> DifficultyResult<String> {
    match value.as_f64() {
        Some(difficulty) => try_format_difficulty(difficulty),
        None => {
            let kind = value_kind(value);
            log::debug!("rejecting non-numeric difficulty of kind {kind}");
            Err(DifficultyError::NonNumeric(kind))
        }
    }
}

/// Formats a dynamically typed difficulty value. Anything other than a
/// number is rendered as [`INVALID`].
#[must_use]
pub fn format_value(value: &Value) -> String {
    try_format_value(value).unwrap_or_else(|_| INVALID.to_owned())
}
