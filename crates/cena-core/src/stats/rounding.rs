//! Rounding policy for the compliance percentage.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::CenaError;

/// How an exact ratio is turned into a whole percentage.
///
/// Default is half-up, which is what the history screen has always shown
/// (1 of 8 -> 13%). Half-even gives 12% for the same input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoundingMode {
    #[default]
    HalfUp,
    HalfEven,
}

impl RoundingMode {
    /// `round(100 * part / total)` in integer arithmetic.
    ///
    /// Returns 0 when `total == 0`. `part` is clamped to `total`.
    ///
    /// Examples with half-up:
    /// - 1 of 2: 50
    /// - 1 of 3: 33
    /// - 2 of 3: 67
    /// - 1 of 8: 13 (half-even: 12)
    pub fn percentage(self, part: usize, total: usize) -> u8 {
        if total == 0 {
            return 0;
        }
        let total = total as u64;
        let scaled = 100 * (part as u64).min(total);
        let quotient = scaled / total;
        let remainder = scaled % total;

        let rounded = match (2 * remainder).cmp(&total) {
            std::cmp::Ordering::Less => quotient,
            std::cmp::Ordering::Greater => quotient + 1,
            std::cmp::Ordering::Equal => match self {
                RoundingMode::HalfUp => quotient + 1,
                RoundingMode::HalfEven => quotient + (quotient % 2),
            },
        };
        u8::try_from(rounded).unwrap_or(100)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RoundingMode::HalfUp => "half-up",
            RoundingMode::HalfEven => "half-even",
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for RoundingMode {
    type Err = CenaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "half-up" | "half_up" => Ok(RoundingMode::HalfUp),
            "half-even" | "half_even" => Ok(RoundingMode::HalfEven),
            _ => Err(CenaError::InvalidConfig {
                key: "rounding",
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::empty(0, 0, 0)]
    #[case::none(0, 5, 0)]
    #[case::all(5, 5, 100)]
    #[case::half(1, 2, 50)]
    #[case::one_third(1, 3, 33)]
    #[case::two_thirds(2, 3, 67)]
    #[case::one_eighth(1, 8, 13)]
    #[case::three_eighths(3, 8, 38)]
    fn half_up(#[case] part: usize, #[case] total: usize, #[case] expected: u8) {
        assert_eq!(RoundingMode::HalfUp.percentage(part, total), expected);
    }

    #[rstest]
    #[case::one_third(1, 3, 33)]
    #[case::two_thirds(2, 3, 67)]
    #[case::one_eighth(1, 8, 12)]
    #[case::three_eighths(3, 8, 38)]
    #[case::one_fortieth(1, 40, 2)]
    fn half_even(#[case] part: usize, #[case] total: usize, #[case] expected: u8) {
        assert_eq!(RoundingMode::HalfEven.percentage(part, total), expected);
    }

    #[test]
    fn part_larger_than_total_is_clamped() {
        assert_eq!(RoundingMode::HalfUp.percentage(7, 3), 100);
    }

    #[test]
    fn parses_from_config_strings() {
        assert_eq!("half-even".parse::<RoundingMode>().unwrap(), RoundingMode::HalfEven);
        assert_eq!("HALF_UP".parse::<RoundingMode>().unwrap(), RoundingMode::HalfUp);
        assert!("bankers".parse::<RoundingMode>().is_err());
    }
}
