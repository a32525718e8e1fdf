// Copyright (C) 2025 Deckhand Developers
// SPDX-License-Identifier: Apache-2.0

//! Positional base 52 deck tokens.
//!
//! A deck is read as a number with one base 52 digit per card, the card at
//! index `i` having weight `52^i`:
//!
//! ```text
//!   value = sum(ordinal(deck[i]) * 52^i) for i in 1..len
//! ```
//!
//! The top card has no term in the sum, decoding always yields digit 0 for it
//! so the top card of a decoded deck is the Ace of spades whatever card was
//! encoded. Tokens from other deckhand tools rely on this layout.
use deckhand_cards::{Card, Deck};
use log::debug;
use num_bigint::BigUint;

use crate::{TokenError, radix};

/// The digits base.
const BASE: u32 = Deck::SIZE as u32;

/// Encodes a deck order as a base 62 token.
pub fn encode(deck: &Deck) -> String {
    radix::to_text(&value(deck))
}

/// Decodes a token into a 52 cards deck.
pub fn decode(token: &str) -> Result<Deck, TokenError> {
    let value = radix::from_text(token)?;

    let mut digits = value.to_radix_le(BASE);
    if digits.len() > Deck::SIZE {
        return Err(TokenError::Overflow {
            digits: digits.len(),
        });
    }

    if digits.len() < Deck::SIZE {
        debug!("Padding {} high zero digits", Deck::SIZE - digits.len());
        digits.resize(Deck::SIZE, 0);
    }

    digits
        .into_iter()
        .map(|d| Card::try_from(d).map_err(TokenError::from))
        .collect()
}

/// The token value for a deck.
fn value(deck: &Deck) -> BigUint {
    let Some((_, rest)) = deck.cards().split_first() else {
        return BigUint::default();
    };

    // Horner's rule from the bottom card up to the second one, each term
    // ends up one power short so the sum is scaled once more at the end.
    let value = rest
        .iter()
        .rev()
        .fold(BigUint::default(), |acc, card| {
            acc * BASE + u32::from(card.ordinal())
        });

    value * BASE
}
