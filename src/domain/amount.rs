//! Fixed-point token amounts.
//!
//! On-chain quantities arrive as integer strings in the token's smallest
//! unit. They routinely exceed what an `f64` can hold exactly, so the
//! scaling is done on `BigInt`s.

use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use serde::{Deserialize, Serialize};

use super::WalletError;

// ============================================================================
// Constants
// ============================================================================

/// Decimals used by ERC-20 style tokens and ether itself.
pub const DEFAULT_TOKEN_DECIMALS: u32 = 18;

/// Largest supported scale. `10^77` is the biggest power of ten that fits
/// a 256-bit token balance.
pub const MAX_TOKEN_DECIMALS: u32 = 77;

/// Number of fractional digits shown for every quantity.
pub const DISPLAY_FRACTION_DIGITS: u32 = 6;

/// Symbol appended to formatted quantities when none is configured.
pub const DEFAULT_TOKEN_SYMBOL: &str = "ETH";

// ============================================================================
// Token Format
// ============================================================================

/// How raw quantities are scaled and labelled for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenFormat {
    /// Power of ten separating the smallest unit from one whole token.
    pub decimals: u32,
    /// Unit label shown after the amount.
    pub symbol: String,
}

impl Default for TokenFormat {
    fn default() -> Self {
        Self {
            decimals: DEFAULT_TOKEN_DECIMALS,
            symbol: DEFAULT_TOKEN_SYMBOL.to_string(),
        }
    }
}

impl TokenFormat {
    /// Parses `raw` and renders it as `"<amount> <symbol>"`.
    ///
    /// # Errors
    ///
    /// Returns [`WalletError::MalformedRecord`] if `raw` is not an integer.
    pub fn format_quantity(&self, raw: &str) -> Result<String, WalletError> {
        let amount = TokenAmount::parse(raw, self.decimals)?;
        Ok(format!(
            "{} {}",
            amount.to_fixed(DISPLAY_FRACTION_DIGITS),
            self.symbol
        ))
    }
}

// ============================================================================
// Token Amount
// ============================================================================

/// An integer amount of a token's smallest unit together with its scale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenAmount {
    raw: BigInt,
    decimals: u32,
}

impl TokenAmount {
    /// Parses a base-10 integer string, or a `0x`-prefixed hex integer.
    ///
    /// A single leading `+` or `-` is accepted. Surrounding whitespace is
    /// ignored; anything else (fractions, exponents, separators) is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`WalletError::MalformedRecord`] for non-integer input and
    /// [`WalletError::InvalidInput`] when `decimals` exceeds
    /// [`MAX_TOKEN_DECIMALS`].
    pub fn parse(raw: &str, decimals: u32) -> Result<Self, WalletError> {
        if decimals > MAX_TOKEN_DECIMALS {
            return Err(WalletError::invalid_input(format!(
                "token decimals must be at most {MAX_TOKEN_DECIMALS}, got {decimals}"
            )));
        }

        let trimmed = raw.trim();
        let (negative, body) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        let magnitude = match body
            .strip_prefix("0x")
            .or_else(|| body.strip_prefix("0X"))
        {
            Some(hex) => parse_digits(hex, 16),
            None => parse_digits(body, 10),
        }
        .ok_or_else(|| WalletError::malformed("quantity", raw))?;

        Ok(Self {
            raw: if negative { -magnitude } else { magnitude },
            decimals,
        })
    }

    /// Renders `raw / 10^decimals` with exactly `places` fractional digits.
    ///
    /// Rounds half away from zero. A value that rounds to zero is printed
    /// without a sign.
    #[must_use]
    pub fn to_fixed(&self, places: u32) -> String {
        let magnitude = self.raw.abs();

        let scaled = if places >= self.decimals {
            magnitude * pow10(places - self.decimals)
        } else {
            let shift = self.decimals - places;
            let half = BigInt::from(5u8) * pow10(shift - 1);
            (magnitude + half) / pow10(shift)
        };

        let sign = if self.raw.is_negative() && !scaled.is_zero() {
            "-"
        } else {
            ""
        };

        if places == 0 {
            return format!("{sign}{scaled}");
        }

        let unit = pow10(places);
        let whole = &scaled / &unit;
        let fraction = (&scaled % &unit).to_string();
        format!(
            "{sign}{whole}.{fraction:0>width$}",
            width = places as usize
        )
    }
}

fn pow10(exponent: u32) -> BigInt {
    BigInt::from(10u8).pow(exponent)
}

fn parse_digits(digits: &str, radix: u32) -> Option<BigInt> {
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    BigInt::parse_bytes(digits.as_bytes(), radix)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::one_token("1000000000000000000", "1.000000")]
    #[case::rounds_up("123456789012345678", "0.123457")]
    #[case::zero("0", "0.000000")]
    #[case::half_rounds_away("500000000000", "0.000001")]
    #[case::below_half("499999999999", "0.000000")]
    #[case::beyond_u128("123456789000000000000000000000000000000000", "123456789000000000000000.000000")]
    #[case::negative("-1500000000000000000", "-1.500000")]
    #[case::negative_rounds_to_zero("-1", "0.000000")]
    #[case::hex("0xde0b6b3a7640000", "1.000000")]
    #[case::padded("  42000000000000000000 ", "42.000000")]
    fn test_to_fixed_18_decimals(#[case] raw: &str, #[case] expected: &str) {
        let amount = TokenAmount::parse(raw, DEFAULT_TOKEN_DECIMALS).unwrap();
        assert_eq!(amount.to_fixed(DISPLAY_FRACTION_DIGITS), expected, "raw={raw}");
    }

    #[rstest]
    #[case("")]
    #[case("-")]
    #[case("1.5")]
    #[case("1e18")]
    #[case("12abc")]
    #[case("0x")]
    #[case("1_000")]
    fn test_parse_rejects_non_integers(#[case] raw: &str) {
        let err = TokenAmount::parse(raw, DEFAULT_TOKEN_DECIMALS).unwrap_err();
        assert!(matches!(
            err,
            WalletError::MalformedRecord {
                field: "quantity",
                ..
            }
        ));
    }

    #[test]
    fn test_parse_rejects_oversized_scale() {
        let err = TokenAmount::parse("1", 4_000_000_000).unwrap_err();
        assert!(matches!(err, WalletError::InvalidInput(_)), "got {err:?}");

        let widest = TokenAmount::parse("1", MAX_TOKEN_DECIMALS).unwrap();
        assert_eq!(widest.to_fixed(DISPLAY_FRACTION_DIGITS), "0.000000");
    }

    #[test]
    fn test_to_fixed_with_fewer_decimals_than_places() {
        let usdc = TokenAmount::parse("1234567", 6).unwrap();
        assert_eq!(usdc.to_fixed(6), "1.234567");

        let whole_units = TokenAmount::parse("7", 0).unwrap();
        assert_eq!(whole_units.to_fixed(6), "7.000000");
        assert_eq!(whole_units.to_fixed(0), "7");
    }

    #[test]
    fn test_format_quantity_appends_symbol() {
        let format = TokenFormat::default();
        insta::assert_snapshot!(
            format.format_quantity("2500000000000000000").unwrap(),
            @"2.500000 ETH"
        );

        let custom = TokenFormat {
            decimals: 6,
            symbol: "USDC".into(),
        };
        assert_eq!(custom.format_quantity("1000000").unwrap(), "1.000000 USDC");
        assert!(custom.format_quantity("n/a").is_err());
    }
}
