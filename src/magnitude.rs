//! Generalization of numeric types for use as difficulty values.

use crate::format::format_difficulty;

/// A primitive numeric type that can be formatted as a difficulty.
pub trait Magnitude: Copy {
    /// Converts the value to a floating point difficulty. This may lose
    /// precision for integers wider than 53 bits.
    fn to_difficulty(self) -> f64;
}

/// Implements the `Magnitude` trait for integer primitives.
macro_rules! impl_magnitude_int {
    ( $($ty:ty),* ) => {
        $(
            impl Magnitude for $ty {
                #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
                fn to_difficulty(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

/// Implements the `Magnitude` trait for floating point primitives.
macro_rules! impl_magnitude_float {
    ( $($ty:ty),* ) => {
        $(
            impl Magnitude for $ty {
                fn to_difficulty(self) -> f64 {
                    f64::from(self)
                }
            }
        )*
    };
}

impl_magnitude_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl_magnitude_float!(f32, f64);

/// Formats any primitive numeric value as a difficulty.
#[must_use]
pub fn format_magnitude<N: Magnitude>(value: N) -> String {
    format_difficulty(value.to_difficulty())
}

/// Magnitude tests.
#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::INVALID;

    #[test]
    fn test_format_integers() {
        assert_eq!(format_magnitude(999_u16), "999");
        assert_eq!(format_magnitude(1_500_i32), "1.5K");
        assert_eq!(format_magnitude(2_000_000_u64), "2M");
        assert_eq!(format_magnitude(1_000_000_000_000_000_u128), "1P");
        assert_eq!(format_magnitude(-42_i64), "-42");
        assert_eq!(format_magnitude(0_usize), "0");
    }

    #[test]
    fn test_format_floats() {
        assert_eq!(format_magnitude(1_500.0_f32), "1.5K");
        assert_eq!(format_magnitude(f32::NAN), INVALID);
        assert_eq!(format_magnitude(f64::NAN), INVALID);
    }

    #[test]
    fn test_large_integers_lose_precision() {
        assert_eq!(format_magnitude(u64::MAX), "18446.74P");
    }
}
