// Copyright (C) 2025 Deckhand Developers
// SPDX-License-Identifier: Apache-2.0

//! Token decoding errors.
use deckhand_cards::ParseCardError;
use thiserror::Error;

/// Errors that can occur when decoding a share token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// The token has no digits.
    #[error("empty token")]
    Empty,
    /// A character that is not a base 62 digit.
    #[error("invalid token digit {digit:?} at position {position}")]
    InvalidDigit {
        /// The rejected character.
        digit: char,
        /// The character index in the token.
        position: usize,
    },
    /// The token value needs more than a deck worth of digits.
    #[error("token value has {digits} digits, a deck has at most 52")]
    Overflow {
        /// Number of decoded digits.
        digits: usize,
    },
    /// A decoded digit that is not a card.
    #[error(transparent)]
    Card(#[from] ParseCardError),
}
