// Copyright (C) 2025 Deckhand Developers
// SPDX-License-Identifier: Apache-2.0

//! Byte packed deck tokens.
//!
//! Each card ordinal is stored in one byte and the bytes are read as a big
//! endian integer. Leading Ace of spades cards are zero bytes that the
//! integer drops, decoding pads the bytes back to a full deck.
use deckhand_cards::{Card, Deck};
use log::debug;
use num_bigint::BigUint;

use crate::{TokenError, radix};

/// Encodes a deck order as a base 62 token.
pub fn encode(deck: &Deck) -> String {
    let bytes = deck.iter().map(Card::ordinal).collect::<Vec<_>>();
    radix::to_text(&BigUint::from_bytes_be(&bytes))
}

/// Decodes a token into a 52 cards deck.
pub fn decode(token: &str) -> Result<Deck, TokenError> {
    let bytes = radix::from_text(token)?.to_bytes_be();
    if bytes.len() > Deck::SIZE {
        return Err(TokenError::Overflow {
            digits: bytes.len(),
        });
    }

    let padding = Deck::SIZE - bytes.len();
    if padding > 0 {
        debug!("Restoring {padding} leading zero bytes");
    }

    std::iter::repeat_n(0, padding)
        .chain(bytes)
        .map(|b| Card::try_from(b).map_err(TokenError::from))
        .collect()
}
