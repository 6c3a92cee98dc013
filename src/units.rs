//! The order-of-magnitude unit table.

/// A magnitude unit, used when formatting difficulty values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Unit {
    /// The threshold magnitude of the unit.
    pub value: f64,
    /// The suffix symbol appended to scaled values.
    pub symbol: &'static str,
}

/// The unit table, sorted strictly descending by magnitude.
pub const UNITS: [Unit; 5] = [
    Unit {
        value: 1e15,
        symbol: "P",
    },
    Unit {
        value: 1e12,
        symbol: "T",
    },
    Unit {
        value: 1e9,
        symbol: "G",
    },
    Unit {
        value: 1e6,
        symbol: "M",
    },
    Unit {
        value: 1e3,
        symbol: "K",
    },
];

/// Selects the coarsest unit whose threshold is at most `difficulty`.
///
/// Returns `None` for values below the smallest threshold, which includes
/// zero, negative numbers, and NaN.
#[must_use]
pub fn unit_for(difficulty: f64) -> Option<&'static Unit> {
    UNITS.iter().find(|unit| difficulty >= unit.value)
}

/// Looks up a unit by its symbol, ignoring ASCII case.
#[must_use]
pub fn unit_by_symbol(symbol: &str) -> Option<&'static Unit> {
    UNITS
        .iter()
        .find(|unit| unit.symbol.eq_ignore_ascii_case(symbol))
}

/// Unit table tests.
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_units_sorted_descending() {
        for pair in UNITS.windows(2) {
            assert!(pair[0].value > pair[1].value);
        }
    }

    #[test]
    fn test_unit_for_boundaries() {
        for unit in &UNITS {
            assert_eq!(unit_for(unit.value).map(|u| u.symbol), Some(unit.symbol));
        }

        assert_eq!(unit_for(999.999).map(|u| u.symbol), None);
        assert_eq!(unit_for(999_999.0).map(|u| u.symbol), Some("K"));
        assert_eq!(unit_for(1e18).map(|u| u.symbol), Some("P"));
    }

    #[test]
    fn test_unit_for_non_positive() {
        assert!(unit_for(0.0).is_none());
        assert!(unit_for(-1e18).is_none());
        assert!(unit_for(f64::NEG_INFINITY).is_none());
        assert!(unit_for(f64::NAN).is_none());
    }

    #[test]
    fn test_unit_by_symbol() {
        assert_eq!(unit_by_symbol("G").map(|u| u.value), Some(1e9));
        assert_eq!(unit_by_symbol("k").map(|u| u.value), Some(1e3));
        assert!(unit_by_symbol("E").is_none());
        assert!(unit_by_symbol("").is_none());
    }
}
