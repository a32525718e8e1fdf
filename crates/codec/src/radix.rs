// Copyright (C) 2025 Deckhand Developers
// SPDX-License-Identifier: Apache-2.0

//! Base 62 text for big integers.
//!
//! Digits are `0-9`, then `a-z`, then `A-Z`, the same layout used by the
//! widest base of Go's `math/big` so tokens stay interchangeable.
use num_bigint::BigUint;

use crate::TokenError;

/// The token numeric base.
pub const BASE: u32 = 62;

const DIGITS: &[u8; BASE as usize] =
    b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Renders a value as base 62 text, zero is rendered as `"0"`.
pub fn to_text(value: &BigUint) -> String {
    value
        .to_radix_be(BASE)
        .into_iter()
        .map(|d| DIGITS[d as usize] as char)
        .collect()
}

/// Parses base 62 text.
pub fn from_text(text: &str) -> Result<BigUint, TokenError> {
    if text.is_empty() {
        return Err(TokenError::Empty);
    }

    text.chars()
        .enumerate()
        .try_fold(BigUint::default(), |acc, (position, digit)| {
            let value = digit_value(digit).ok_or(TokenError::InvalidDigit { digit, position })?;
            Ok(acc * BASE + value)
        })
}

fn digit_value(digit: char) -> Option<u32> {
    match digit {
        '0'..='9' => Some(digit as u32 - '0' as u32),
        'a'..='z' => Some(digit as u32 - 'a' as u32 + 10),
        'A'..='Z' => Some(digit as u32 - 'A' as u32 + 36),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_values() {
        let cases = [
            (0u32, "0"),
            (9, "9"),
            (10, "a"),
            (61, "Z"),
            (62, "10"),
            (3843, "ZZ"),
        ];

        for (value, text) in cases {
            assert_eq!(to_text(&BigUint::from(value)), text);
            assert_eq!(from_text(text).unwrap(), BigUint::from(value));
        }
    }

    #[test]
    fn digit_table() {
        for (idx, &d) in DIGITS.iter().enumerate() {
            assert_eq!(digit_value(d as char), Some(idx as u32));
        }
    }

    #[test]
    fn leading_zeros_are_ignored() {
        assert_eq!(from_text("000a").unwrap(), BigUint::from(10u32));
    }

    #[test]
    fn large_value() {
        // 52^52, the first value that doesn't fit a deck.
        let value = BigUint::from(52u32).pow(52);
        let text = to_text(&value);
        assert_eq!(text, "ppkJF6EB7IlMFIOPjtuaJvIw7ob6cOI60Eg5gZaKbuow2GInUk");
        assert_eq!(from_text(&text).unwrap(), value);
    }

    #[test]
    fn invalid_text() {
        assert_eq!(from_text(""), Err(TokenError::Empty));
        assert_eq!(
            from_text("ab-c"),
            Err(TokenError::InvalidDigit {
                digit: '-',
                position: 2
            })
        );
        assert_eq!(
            from_text(" 1"),
            Err(TokenError::InvalidDigit {
                digit: ' ',
                position: 0
            })
        );
    }
}
