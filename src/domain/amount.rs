//! Arbitrary-precision token amounts and their display formatting.
//!
//! Token amounts are raw integers in the token's smallest unit. They routinely
//! exceed `2^53`, so nothing here goes through floating point.

use std::fmt;

use alloy::primitives::U256;
use num_bigint::BigUint;
use num_traits::Zero;

use super::BridgeError;
use crate::constants::MAX_DISPLAY_DECIMALS;

// ============================================================================
// Amount
// ============================================================================

/// Raw token amount in the token's smallest unit.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(BigUint);

impl Amount {
    /// The zero amount.
    #[must_use]
    pub fn zero() -> Self {
        Self(BigUint::zero())
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns the underlying big integer.
    #[must_use]
    pub const fn as_biguint(&self) -> &BigUint {
        &self.0
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Self(BigUint::from(value))
    }
}

impl From<u128> for Amount {
    fn from(value: u128) -> Self {
        Self(BigUint::from(value))
    }
}

impl From<U256> for Amount {
    fn from(value: U256) -> Self {
        Self(BigUint::from_bytes_be(&value.to_be_bytes::<32>()))
    }
}

impl From<BigUint> for Amount {
    fn from(value: BigUint) -> Self {
        Self(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Formatting
// ============================================================================

/// Splits an amount into its exact integer and fractional digit strings.
///
/// The fractional part has exactly `decimals` digits (empty for zero decimals).
fn split_units(amount: &Amount, decimals: u8) -> (String, String) {
    let digits = amount.0.to_str_radix(10);
    let decimals = usize::from(decimals);
    if decimals == 0 {
        return (digits, String::new());
    }

    let padded = format!("{digits:0>width$}", width = decimals + 1);
    let split_at = padded.len() - decimals;
    (padded[..split_at].to_string(), padded[split_at..].to_string())
}

/// Inserts thousands separators into a string of decimal digits.
fn group_thousands(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Formats a raw amount for display.
///
/// The integer part is exact and grouped with commas. The fractional part is
/// truncated (never rounded) to [`MAX_DISPLAY_DECIMALS`] digits and trailing
/// zeros are dropped.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(trim_decimals(&Amount::from(1_500_000u64), 6), "1.5");
/// assert_eq!(trim_decimals(&Amount::from(1_234_567_891u64), 3), "1,234,567.891");
/// ```
#[must_use]
pub fn trim_decimals(amount: &Amount, decimals: u8) -> String {
    let (integer, fraction) = split_units(amount, decimals);
    let kept: String = fraction.chars().take(MAX_DISPLAY_DECIMALS).collect();
    let kept = kept.trim_end_matches('0');

    if kept.is_empty() {
        group_thousands(&integer)
    } else {
        format!("{}.{kept}", group_thousands(&integer))
    }
}

/// Parses a user-entered decimal string into a raw amount.
///
/// # Errors
///
/// Returns [`BridgeError::InvalidInput`] for empty input, characters other
/// than digits and a single `.`, or more fractional digits than `decimals`.
pub fn parse_units(input: &str, decimals: u8) -> Result<Amount, BridgeError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(BridgeError::invalid_input("enter an amount"));
    }

    let (integer, fraction) = match input.split_once('.') {
        Some((integer, fraction)) => (integer, fraction),
        None => (input, ""),
    };

    if integer.is_empty() && fraction.is_empty() {
        return Err(BridgeError::invalid_input("enter an amount"));
    }
    if !integer.chars().chain(fraction.chars()).all(|c| c.is_ascii_digit()) {
        return Err(BridgeError::invalid_input(format!(
            "'{input}' is not a number"
        )));
    }
    if fraction.len() > usize::from(decimals) {
        return Err(BridgeError::invalid_input(format!(
            "at most {decimals} decimal places allowed"
        )));
    }

    let digits = format!(
        "{integer}{fraction:0<width$}",
        width = usize::from(decimals)
    );
    BigUint::parse_bytes(digits.as_bytes(), 10)
        .map(Amount)
        .ok_or_else(|| BridgeError::invalid_input(format!("'{input}' is not a number")))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case::zero(0, 18, "0")]
    #[case::one_eth(1_000_000_000_000_000_000, 18, "1")]
    #[case::half_usdc(500_000, 6, "0.5")]
    #[case::grouped(1_234_567_891, 3, "1,234,567.891")]
    #[case::truncated_not_rounded(1_999_999_999, 9, "1.999999")]
    #[case::dust_disappears(1, 18, "0")]
    #[case::no_decimals(1_000_000, 0, "1,000,000")]
    fn test_trim_decimals(#[case] raw: u128, #[case] decimals: u8, #[case] expected: &str) {
        assert_eq!(trim_decimals(&Amount::from(raw), decimals), expected);
    }

    #[test]
    fn test_trim_decimals_snapshot() {
        let amount = Amount::from(12_345_678_900_000_000_000_000u128);
        insta::assert_snapshot!(trim_decimals(&amount, 18), @"12,345.6789");
    }

    #[rstest]
    #[case("1", 18, 1_000_000_000_000_000_000)]
    #[case("0.5", 6, 500_000)]
    #[case(".25", 2, 25)]
    #[case("10.", 2, 1_000)]
    #[case(" 3 ", 0, 3)]
    fn test_parse_units(#[case] input: &str, #[case] decimals: u8, #[case] expected: u128) {
        assert_eq!(parse_units(input, decimals).unwrap(), Amount::from(expected));
    }

    #[rstest]
    #[case("")]
    #[case(".")]
    #[case("1.2.3")]
    #[case("-1")]
    #[case("1e5")]
    #[case("0.1234567")]
    fn test_parse_units_rejects(#[case] input: &str) {
        assert!(matches!(
            parse_units(input, 6),
            Err(BridgeError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_from_u256() {
        assert_eq!(Amount::from(U256::ZERO), Amount::zero());
        assert_eq!(
            Amount::from(U256::from(1_000_000_000_000_000_000u64)),
            Amount::from(1_000_000_000_000_000_000u64)
        );
        assert_eq!(
            Amount::from(U256::MAX).to_string(),
            "115792089237316195423570985008687907853269984665640564039457584007913129639935"
        );
    }

    proptest! {
        #[test]
        fn prop_large_amounts_format_exactly(
            whole in any::<u128>(),
            fraction in 0u64..1_000_000,
        ) {
            // whole * 10^6 + fraction with six decimals, far beyond 2^53
            let raw = BigUint::from(whole) * BigUint::from(1_000_000u32) + BigUint::from(fraction);
            let formatted = trim_decimals(&Amount::from(raw), 6);

            let (int_part, frac_part) = match formatted.split_once('.') {
                Some((i, f)) => (i.to_string(), f.to_string()),
                None => (formatted.clone(), String::new()),
            };
            prop_assert_eq!(int_part.replace(',', ""), whole.to_string());

            let expected_fraction = format!("{fraction:06}");
            prop_assert_eq!(frac_part.as_str(), expected_fraction.trim_end_matches('0'));
        }

        #[test]
        fn prop_parse_then_format_preserves_value(whole in any::<u64>(), cents in 0u8..100) {
            let input = format!("{whole}.{cents:02}");
            let amount = parse_units(&input, 2).unwrap();
            let expected = BigUint::from(whole) * BigUint::from(100u32) + BigUint::from(cents);
            prop_assert_eq!(amount.as_biguint(), &expected);
        }
    }
}
