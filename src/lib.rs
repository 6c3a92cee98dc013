//! Formats proof-of-work difficulty values into compact, human-readable
//! strings using the K, M, G, T and P magnitude suffixes.
//!
//! ```
//! use difficulty_format::{format_difficulty, INVALID};
//!
//! assert_eq!(format_difficulty(999.0), "999");
//! assert_eq!(format_difficulty(1_500.0), "1.5K");
//! assert_eq!(format_difficulty(2_000_000.0), "2M");
//! assert_eq!(format_difficulty(f64::NAN), INVALID);
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![warn(unused_mut)]
#![warn(clippy::missing_docs_in_private_items)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::wildcard_imports)]
#![allow(clippy::if_not_else)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]

mod format;
mod magnitude;
mod parse;
mod types;
mod units;

pub use crate::format::{
    format_difficulty, format_value, try_format_difficulty, try_format_value, DisplayDifficulty,
    INVALID,
};
pub use crate::magnitude::{format_magnitude, Magnitude};
pub use crate::parse::parse_difficulty;
pub use crate::types::{DifficultyError, DifficultyResult};
pub use crate::units::{unit_by_symbol, unit_for, Unit, UNITS};
