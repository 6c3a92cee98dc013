//! Parsing of suffixed difficulty strings back into numbers.

use crate::format::INVALID;
use crate::types::{DifficultyError, DifficultyResult};
use crate::units::unit_by_symbol;

/// Splits a trailing unit symbol off of a difficulty string, returning the
/// numeric part and the unit multiplier.
fn split_unit(s: &str) -> (&str, f64) {
    match s.char_indices().next_back() {
        Some((index, last)) if last.is_ascii_alphabetic() => {
            match unit_by_symbol(&s[index..]) {
                Some(unit) => (s[..index].trim_end(), unit.value),
                None => (s, 1.0),
            }
        }
        _ => (s, 1.0),
    }
}

/// Parses a difficulty string such as `"1.5K"` or `"45.68G"` into a number.
///
/// Unit symbols are matched without regard to case. Strings without a
/// symbol are parsed as plain numbers.
///
/// # Errors
///
/// This will return an error if the string is empty, is the invalid
/// sentinel, cannot be parsed as a number, or does not produce a finite
/// value.
pub fn parse_difficulty(s: &str) -> DifficultyResult<f64> {
    let s = s.trim();

    if s.is_empty() {
        return Err(DifficultyError::Empty);
    }

    if s.eq_ignore_ascii_case(INVALID) {
        return Err(DifficultyError::NotANumber);
    }

    let (number, multiplier) = split_unit(s);
    let value = number.parse::<f64>().map_err(|e| {
        log::debug!("failed to parse difficulty {s:?}: {e}");
        DifficultyError::Unparseable(s.to_owned())
    })?;
    let difficulty = value * multiplier;

    if difficulty.is_finite() {
        Ok(difficulty)
    } else {
        Err(DifficultyError::OutOfRange(s.to_owned()))
    }
}
